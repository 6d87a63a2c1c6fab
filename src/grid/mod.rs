//! Grid Topology
//!
//! Grid extents, the bounds predicate, and the neighbor models. A grid system
//! is immutable once built; the world asks it for the in-bounds neighbors of a
//! location and for the full list of valid locations when seeding tiles.

pub mod hexagonal;
pub mod location;
pub mod octagonal;

use crate::core::TopologyKind;

pub use hexagonal::HorizontalHexGrid;
pub use location::GridLocation;
pub use octagonal::OctagonalGrid;

/// Extent of a grid.
///
/// Non-centered grids cover rows `[0, rows)` and columns `[0, cols)`.
/// Centered grids cover rows `[-rows, rows]` and columns `[-cols, cols]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub rows: i32,
    pub cols: i32,
    pub centered: bool,
}

impl GridBounds {
    pub fn new(rows: i32, cols: i32, centered: bool) -> Self {
        GridBounds { rows, cols, centered }
    }

    fn row_range(&self) -> (i32, i32) {
        if self.centered {
            (-self.rows, self.rows)
        } else {
            (0, self.rows - 1)
        }
    }

    fn col_range(&self) -> (i32, i32) {
        if self.centered {
            (-self.cols, self.cols)
        } else {
            (0, self.cols - 1)
        }
    }

    #[inline]
    pub fn contains(&self, loc: GridLocation) -> bool {
        let (r0, r1) = self.row_range();
        let (c0, c1) = self.col_range();
        (r0..=r1).contains(&loc.row) && (c0..=c1).contains(&loc.col)
    }

    /// Every valid location, row-major.
    pub fn indices(&self) -> Vec<GridLocation> {
        let (r0, r1) = self.row_range();
        let (c0, c1) = self.col_range();
        (r0..=r1)
            .flat_map(|r| (c0..=c1).map(move |c| GridLocation::new(r, c)))
            .collect()
    }

    pub fn location_count(&self) -> usize {
        let (r0, r1) = self.row_range();
        let (c0, c1) = self.col_range();
        let rows = (r1 - r0 + 1).max(0) as usize;
        let cols = (c1 - c0 + 1).max(0) as usize;
        rows * cols
    }
}

/// A neighbor topology over a bounded grid.
pub trait GridSystem: Send + Sync {
    fn bounds(&self) -> &GridBounds;

    /// Fixed (d_row, d_col) offsets, in enumeration order.
    fn directions(&self) -> &'static [(i32, i32)];

    fn kind(&self) -> TopologyKind;

    /// Neighbor count of an interior location.
    fn degree(&self) -> usize {
        self.directions().len()
    }

    /// In-bounds neighbors of `loc`, in direction-set order.
    fn neighbors(&self, loc: GridLocation) -> Vec<GridLocation> {
        let bounds = self.bounds();
        self.directions()
            .iter()
            .map(|&d| loc.offset(d))
            .filter(|n| bounds.contains(*n))
            .collect()
    }

    fn indices(&self) -> Vec<GridLocation> {
        self.bounds().indices()
    }
}

/// Build the grid system for a topology.
pub fn build(kind: TopologyKind, bounds: GridBounds) -> Box<dyn GridSystem> {
    match kind {
        TopologyKind::Octagonal => Box::new(OctagonalGrid::new(bounds)),
        TopologyKind::HorizontalHex => Box::new(HorizontalHexGrid::new(bounds)),
    }
}
