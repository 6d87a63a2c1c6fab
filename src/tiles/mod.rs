//! Tiles
//!
//! Fixed-position slots holding an agent type and a stable id. Tiles never move;
//! a relocation exchanges `(agent, id)` between two slots, so an id can later be
//! found at a different position.

pub mod generator;
pub mod store;

use crate::grid::GridLocation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

pub use generator::RandomTypeGenerator;
pub use store::TileStore;

pub type TileId = u32;

/// What occupies a tile. Agent kinds are compared for equality only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentType {
    Empty,
    Green,
    Blue,
}

impl AgentType {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == AgentType::Empty
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentType::Empty => "empty",
            AgentType::Green => "green",
            AgentType::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// One grid slot. Equality and hashing go by `id`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Tile {
    pub agent: AgentType,
    pub position: GridLocation,
    pub id: TileId,
}

impl Tile {
    pub fn new(agent: AgentType, position: GridLocation, id: TileId) -> Self {
        Tile { agent, position, id }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agent.is_empty()
    }
}

impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl Hash for Tile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_compare_by_id() {
        let a = Tile::new(AgentType::Green, GridLocation::new(0, 0), 4);
        let b = Tile::new(AgentType::Blue, GridLocation::new(3, 3), 4);
        let c = Tile::new(AgentType::Green, GridLocation::new(0, 0), 5);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn agent_type_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&AgentType::Green).unwrap(), "\"green\"");
        assert!(AgentType::Empty.is_empty());
        assert!(!AgentType::Blue.is_empty());
    }
}
