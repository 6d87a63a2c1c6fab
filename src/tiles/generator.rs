//! Weighted random agent types.
//!
//! The unit interval is cut into one contiguous range per type, sized by its
//! normalized weight. Ranges are laid out smallest-mass first, e.g. weights
//! `{Empty: 5, Green: 3, Blue: 2}` give
//! `[(Blue, 0.0, 0.2), (Green, 0.2, 0.5), (Empty, 0.5, 1.0)]`.

use super::AgentType;
use crate::core::config::{validate_weights, TypeWeight};
use crate::core::WorldResult;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
struct TypeRange {
    agent: AgentType,
    lower: f64,
    upper: f64,
}

#[derive(Clone, Debug)]
pub struct RandomTypeGenerator {
    ranges: Vec<TypeRange>,
}

impl RandomTypeGenerator {
    pub fn new(weights: &[TypeWeight]) -> WorldResult<Self> {
        validate_weights(weights)?;

        let total: f64 = weights.iter().map(|w| w.weight as f64).sum();
        let mut probs: Vec<(AgentType, f64)> = weights
            .iter()
            .filter(|w| w.weight > 0)
            .map(|w| (w.agent, w.weight as f64 / total))
            .collect();
        // Stable: equal weights keep table order.
        probs.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

        let mut ranges = Vec::with_capacity(probs.len());
        let mut lower = 0.0;
        for (i, (agent, p)) in probs.iter().enumerate() {
            let upper = if i + 1 == probs.len() { 1.0 } else { lower + p };
            ranges.push(TypeRange {
                agent: *agent,
                lower,
                upper,
            });
            lower = upper;
        }

        Ok(RandomTypeGenerator { ranges })
    }

    /// Type whose range contains `r`. Shared boundaries resolve to the lower range.
    pub fn type_for(&self, r: f64) -> AgentType {
        self.ranges
            .iter()
            .find(|range| range.lower <= r && r <= range.upper)
            .map(|range| range.agent)
            .unwrap_or(AgentType::Empty)
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> AgentType {
        self.type_for(rng.gen::<f64>())
    }

    /// `(type, lower, upper)` in lookup order.
    pub fn ranges(&self) -> Vec<(AgentType, f64, f64)> {
        self.ranges
            .iter()
            .map(|r| (r.agent, r.lower, r.upper))
            .collect()
    }
}
