use super::{GridBounds, GridSystem};
use crate::core::TopologyKind;

const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Each interior tile touches eight others (edges and corners).
#[derive(Clone, Debug)]
pub struct OctagonalGrid {
    bounds: GridBounds,
}

impl OctagonalGrid {
    pub fn new(bounds: GridBounds) -> Self {
        OctagonalGrid { bounds }
    }
}

impl GridSystem for OctagonalGrid {
    fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    fn directions(&self) -> &'static [(i32, i32)] {
        &DIRECTIONS
    }

    fn kind(&self) -> TopologyKind {
        TopologyKind::Octagonal
    }
}
