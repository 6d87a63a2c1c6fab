//! Conflict resolution for one step's proposals.
//!
//! Pure reduction from proposals to accepted moves; nothing here touches the
//! grid. Destinations with one proposer are granted. Contested destinations go
//! to the unique least-satisfied proposer, or to nobody on a tie.

use crate::grid::GridLocation;
use std::collections::HashMap;
use tracing::trace;

/// A tile's wish to relocate, computed against the pre-step grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proposal {
    pub origin: GridLocation,
    /// Self-desirability at `origin`.
    pub self_score: f64,
    pub destination: GridLocation,
}

/// An accepted relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub origin: GridLocation,
    pub destination: GridLocation,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    pub moves: Vec<Move>,
    /// Destinations named by more than one proposal.
    pub contested: usize,
    /// Proposals that did not become moves.
    pub dropped: usize,
}

pub fn resolve(proposals: &[Proposal]) -> Resolution {
    // Groups keep first-seen order so the move list is deterministic.
    let mut slot_of: HashMap<GridLocation, usize> = HashMap::new();
    let mut groups: Vec<(GridLocation, Vec<&Proposal>)> = Vec::new();
    for p in proposals {
        match slot_of.get(&p.destination) {
            Some(&i) => groups[i].1.push(p),
            None => {
                slot_of.insert(p.destination, groups.len());
                groups.push((p.destination, vec![p]));
            }
        }
    }

    let mut resolution = Resolution::default();
    for (destination, group) in groups {
        if group.len() > 1 {
            resolution.contested += 1;
        }
        match least_satisfied(&group) {
            Some(winner) => {
                resolution.dropped += group.len() - 1;
                resolution.moves.push(Move {
                    origin: winner.origin,
                    destination,
                });
            }
            None => {
                trace!(
                    "[Conflict] {} proposers tied for {}, nobody moves",
                    group.len(),
                    destination
                );
                resolution.dropped += group.len();
            }
        }
    }
    resolution
}

/// Unique proposer with the lowest self-score, if there is one.
fn least_satisfied<'a>(group: &[&'a Proposal]) -> Option<&'a Proposal> {
    let min = group
        .iter()
        .map(|p| p.self_score)
        .fold(f64::INFINITY, f64::min);
    let mut lowest = group.iter().filter(|p| p.self_score == min);
    let first = lowest.next()?;
    if lowest.next().is_some() {
        None
    } else {
        Some(*first)
    }
}
