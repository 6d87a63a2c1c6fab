use crate::grid::GridLocation;
use crate::tiles::{AgentType, Tile, TileId};
use serde::{Deserialize, Serialize};

/// Outcome of one `advance_step`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    pub generation: u64,
    pub proposals: usize,
    pub contested: usize,
    pub dropped: usize,
    pub moves: usize,
}

impl StepSummary {
    pub fn is_equilibrium(&self) -> bool {
        self.moves == 0
    }
}

/// An empty neighbor a tile could relocate to, with the score it would get there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveOption {
    pub id: TileId,
    pub position: GridLocation,
    pub score: f64,
}

/// Per-tile diagnostics for a presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileReport {
    pub id: TileId,
    pub agent: AgentType,
    pub position: GridLocation,
    pub self_desirability: f64,
    pub neighbors: Vec<TileId>,
    pub options: Vec<MoveOption>,
}

impl TileReport {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Best option by score, first one on ties.
    pub fn best_option(&self) -> Option<&MoveOption> {
        self.options.iter().fold(None, |best: Option<&MoveOption>, o| match best {
            Some(b) if b.score >= o.score => Some(b),
            _ => Some(o),
        })
    }
}

/// Every tile of the world, row-major.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub generation: u64,
    pub tiles: Vec<Tile>,
}

impl WorldSnapshot {
    pub fn layout(&self) -> Vec<AgentType> {
        self.tiles.iter().map(|t| t.agent).collect()
    }

    pub fn ids(&self) -> Vec<TileId> {
        self.tiles.iter().map(|t| t.id).collect()
    }

    pub fn count(&self, agent: AgentType) -> usize {
        self.tiles.iter().filter(|t| t.agent == agent).count()
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
