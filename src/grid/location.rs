use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) coordinate on the grid. Compared and hashed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridLocation {
    pub row: i32,
    pub col: i32,
}

impl GridLocation {
    pub const fn new(row: i32, col: i32) -> Self {
        GridLocation { row, col }
    }

    #[inline]
    pub fn offset(self, (d_row, d_col): (i32, i32)) -> Self {
        GridLocation::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(i32, i32)> for GridLocation {
    fn from((row, col): (i32, i32)) -> Self {
        GridLocation::new(row, col)
    }
}

impl fmt::Display for GridLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
