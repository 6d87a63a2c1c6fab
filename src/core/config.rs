use super::error::{WorldError, WorldResult};
use crate::tiles::AgentType;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Neighbor topology of the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyKind {
    /// 8-connected
    #[default]
    Octagonal,
    /// 6-connected, hex grid sheared into rectangular coordinates
    HorizontalHex,
}

/// Relative sampling weight of one agent type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeWeight {
    pub agent: AgentType,
    pub weight: u32,
}

impl TypeWeight {
    pub fn new(agent: AgentType, weight: u32) -> Self {
        TypeWeight { agent, weight }
    }
}

/// Everything needed to build a `World`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub rows: i32,
    pub cols: i32,
    /// Centered grids span `[-rows, rows] x [-cols, cols]`, otherwise `[0, rows) x [0, cols)`.
    pub centered: bool,
    pub topology: TopologyKind,
    pub weights: Vec<TypeWeight>,
    /// Fixed seed for reproducible random worlds.
    pub seed: Option<u64>,
    /// Compute step proposals on the rayon pool.
    pub parallel_proposals: bool,
}

impl WorldConfig {
    pub fn new(rows: i32, cols: i32, centered: bool, weights: Vec<TypeWeight>) -> Self {
        WorldConfig {
            rows,
            cols,
            centered,
            weights,
            ..Self::default()
        }
    }

    pub fn with_topology(mut self, topology: TopologyKind) -> Self {
        self.topology = topology;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel_proposals(mut self, parallel: bool) -> Self {
        self.parallel_proposals = parallel;
        self
    }

    /// Parse and validate a JSON config. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> WorldResult<()> {
        if self.rows <= 0 || self.cols <= 0 {
            return Err(WorldError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        validate_weights(&self.weights)
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            rows: 24,
            cols: 24,
            centered: false,
            topology: TopologyKind::Octagonal,
            weights: vec![
                TypeWeight::new(AgentType::Empty, 6),
                TypeWeight::new(AgentType::Green, 3),
                TypeWeight::new(AgentType::Blue, 3),
            ],
            seed: None,
            parallel_proposals: false,
        }
    }
}

pub(crate) fn validate_weights(weights: &[TypeWeight]) -> WorldResult<()> {
    if weights.is_empty() {
        return Err(WorldError::EmptyWeightTable);
    }
    let mut seen = HashSet::new();
    for w in weights {
        if !seen.insert(w.agent) {
            return Err(WorldError::DuplicateWeight(w.agent));
        }
    }
    let total: u64 = weights.iter().map(|w| w.weight as u64).sum();
    if total == 0 {
        return Err(WorldError::ZeroTotalWeight);
    }
    Ok(())
}
