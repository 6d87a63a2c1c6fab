use super::{Tile, TileId};
use crate::core::{WorldError, WorldResult};
use crate::grid::{GridBounds, GridLocation};
use std::collections::{HashMap, HashSet};

/// Owns every tile: one fixed slot per valid location.
///
/// The slot array never changes shape after construction; only slot contents
/// (agent type and id) are exchanged by `swap`.
#[derive(Clone, Debug)]
pub struct TileStore {
    slots: Vec<Tile>,
    index: HashMap<GridLocation, usize>,
}

impl TileStore {
    /// Build a store from tiles that must cover `bounds` exactly once.
    /// Slots are laid out row-major regardless of input order.
    pub fn new(tiles: Vec<Tile>, bounds: &GridBounds) -> WorldResult<Self> {
        let expected = bounds.location_count();
        if tiles.len() != expected {
            return Err(WorldError::TileCountMismatch {
                expected,
                actual: tiles.len(),
            });
        }

        let mut by_position: HashMap<GridLocation, Tile> = HashMap::with_capacity(tiles.len());
        let mut ids = HashSet::with_capacity(tiles.len());
        for tile in tiles {
            if !bounds.contains(tile.position) {
                return Err(WorldError::TileOutOfBounds {
                    id: tile.id,
                    position: tile.position,
                });
            }
            if !ids.insert(tile.id) {
                return Err(WorldError::DuplicateTileId(tile.id));
            }
            if by_position.insert(tile.position, tile).is_some() {
                return Err(WorldError::DuplicatePosition(tile.position));
            }
        }

        // Count matched and every position is in bounds and distinct, so this covers the grid.
        let slots: Vec<Tile> = bounds
            .indices()
            .into_iter()
            .filter_map(|loc| by_position.remove(&loc))
            .collect();
        let index = slots
            .iter()
            .enumerate()
            .map(|(i, t)| (t.position, i))
            .collect();

        Ok(TileStore { slots, index })
    }

    pub fn tile_at(&self, loc: GridLocation) -> Option<&Tile> {
        self.index.get(&loc).map(|&i| &self.slots[i])
    }

    /// Linear scan; meant for external lookups, not the step loop.
    pub fn tile_by_id(&self, id: TileId) -> Option<&Tile> {
        self.slots.iter().find(|t| t.id == id)
    }

    /// Exchange agent type and id between two positions. Positions stay put.
    /// Same location or an unknown location is a no-op.
    pub fn swap(&mut self, a: GridLocation, b: GridLocation) {
        if a == b {
            return;
        }
        let (Some(&i), Some(&j)) = (self.index.get(&a), self.index.get(&b)) else {
            return;
        };
        let (agent_i, id_i) = (self.slots[i].agent, self.slots[i].id);
        self.slots[i].agent = self.slots[j].agent;
        self.slots[i].id = self.slots[j].id;
        self.slots[j].agent = agent_i;
        self.slots[j].id = id_i;
    }

    /// Row-major.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
