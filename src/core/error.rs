//! Construction-time errors.
//!
//! Lookups inside a running world never fail; they return `Option`. Everything
//! here is raised while building a `World` or loading its configuration.

use crate::grid::GridLocation;
use crate::tiles::{AgentType, TileId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("grid dimensions must be positive (rows={rows}, cols={cols})")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("type weight table is empty")]
    EmptyWeightTable,

    #[error("type weights sum to zero")]
    ZeroTotalWeight,

    #[error("agent type {0:?} is weighted more than once")]
    DuplicateWeight(AgentType),

    #[error("tile {id} sits outside the grid at {position}")]
    TileOutOfBounds { id: TileId, position: GridLocation },

    #[error("more than one tile placed at {0}")]
    DuplicatePosition(GridLocation),

    #[error("tile id {0} is used more than once")]
    DuplicateTileId(TileId),

    #[error("expected {expected} tiles to cover the grid, got {actual}")]
    TileCountMismatch { expected: usize, actual: usize },

    #[error("invalid world config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
