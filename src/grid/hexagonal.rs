use super::{GridBounds, GridSystem};
use crate::core::TopologyKind;

// Diagonal neighbors exist only on the (+row, +col) / (-row, +col) side.
const DIRECTIONS: [(i32, i32); 6] = [(0, 1), (1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1)];

/// Horizontal hex grid stored in rectangular coordinates; six neighbors per
/// interior tile.
#[derive(Clone, Debug)]
pub struct HorizontalHexGrid {
    bounds: GridBounds,
}

impl HorizontalHexGrid {
    pub fn new(bounds: GridBounds) -> Self {
        HorizontalHexGrid { bounds }
    }
}

impl GridSystem for HorizontalHexGrid {
    fn bounds(&self) -> &GridBounds {
        &self.bounds
    }

    fn directions(&self) -> &'static [(i32, i32)] {
        &DIRECTIONS
    }

    fn kind(&self) -> TopologyKind {
        TopologyKind::HorizontalHex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridLocation;

    #[test]
    fn interior_neighbors_in_direction_order() {
        let grid = HorizontalHexGrid::new(GridBounds::new(3, 3, false));
        let got = grid.neighbors(GridLocation::new(1, 1));
        assert_eq!(
            got,
            vec![
                GridLocation::new(1, 2),
                GridLocation::new(2, 2),
                GridLocation::new(2, 1),
                GridLocation::new(1, 0),
                GridLocation::new(0, 1),
                GridLocation::new(0, 2),
            ]
        );
    }

    #[test]
    fn corners_are_clipped() {
        let grid = HorizontalHexGrid::new(GridBounds::new(3, 3, false));
        assert_eq!(
            grid.neighbors(GridLocation::new(2, 2)),
            vec![GridLocation::new(2, 1), GridLocation::new(1, 2)]
        );
        assert_eq!(grid.neighbors(GridLocation::new(0, 0)).len(), 3);
    }

    #[test]
    fn lower_left_diagonal_is_not_a_neighbor() {
        let grid = HorizontalHexGrid::new(GridBounds::new(2, 2, true));
        let got = grid.neighbors(GridLocation::new(0, 0));
        assert!(!got.contains(&GridLocation::new(-1, -1)));
        assert!(!got.contains(&GridLocation::new(1, -1)));
        assert_eq!(got.len(), 6);
    }
}
