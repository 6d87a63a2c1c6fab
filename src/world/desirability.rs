//! Desirability scoring.
//!
//! `score = (2*same - 2*diff + empty) / (2 * neighbor_count)`, always in [-1, 1].

use super::conflict::Proposal;
use super::World;
use crate::grid::GridLocation;
use crate::tiles::{AgentType, Tile};

/// Whose point of view a tile is scored from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Perspective {
    /// The tile's current occupant staying put.
    Occupant,
    /// An agent arriving from `from`. If `from` is adjacent it is counted as
    /// the empty slot it will become.
    Arriving { from: GridLocation },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Census {
    same: i32,
    diff: i32,
    empty: i32,
}

impl Census {
    fn tally(&mut self, agent: AgentType, candidate: AgentType, weight: i32) {
        if agent.is_empty() {
            self.empty += weight;
        } else if agent == candidate {
            self.same += weight;
        } else {
            self.diff += weight;
        }
    }
}

impl World {
    /// Score of `tile` for an agent of type `candidate`.
    pub fn desirability(&self, tile: &Tile, candidate: AgentType, perspective: Perspective) -> f64 {
        if perspective == Perspective::Occupant && tile.is_empty() {
            return 0.0;
        }
        let neighbors = self.neighbors_of(tile);
        if neighbors.is_empty() {
            return 0.0;
        }

        let mut census = Census::default();
        for n in &neighbors {
            census.tally(n.agent, candidate, 1);
        }
        if let Perspective::Arriving { from } = perspective {
            if let Some(origin) = neighbors.iter().find(|n| n.position == from) {
                census.tally(origin.agent, candidate, -1);
                census.empty += 1;
            }
        }

        let numerator = 2 * census.same - 2 * census.diff + census.empty;
        numerator as f64 / (2 * neighbors.len()) as f64
    }

    /// How happy the tile's occupant is where it stands. Empty tiles score 0.
    pub fn self_desirability(&self, tile: &Tile) -> f64 {
        self.desirability(tile, tile.agent, Perspective::Occupant)
    }

    /// Empty neighbors of `tile` paired with the score its occupant would get there.
    pub fn desirability_matrix(&self, tile: &Tile) -> Vec<(Tile, f64)> {
        let arriving = Perspective::Arriving {
            from: tile.position,
        };
        self.neighbors_of(tile)
            .into_iter()
            .filter(|n| n.is_empty())
            .map(|n| (*n, self.desirability(n, tile.agent, arriving)))
            .collect()
    }

    /// Where `tile` wants to go this step, if anywhere.
    ///
    /// The best-scoring empty neighbor (first in neighbor order on ties), only
    /// when it strictly beats the current self-desirability.
    pub fn proposal_for(&self, tile: &Tile) -> Option<Proposal> {
        if tile.is_empty() {
            return None;
        }
        let self_score = self.self_desirability(tile);
        let mut best: Option<(Tile, f64)> = None;
        for (candidate, score) in self.desirability_matrix(tile) {
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((candidate, score));
            }
        }
        let (destination, score) = best?;
        (score > self_score).then_some(Proposal {
            origin: tile.position,
            self_score,
            destination: destination.position,
        })
    }
}
