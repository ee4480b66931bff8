//! Grid coordinate value type.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A 2D grid coordinate.
///
/// `x` is the column and `y` the row; `(0, 0)` is the top-left corner of the
/// grid and `y` grows downward. Serializes to `{"x": …, "y": …}` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Point {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Point {
    /// Creates a point from column and row indices.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Creates a point from (row, col) order, the order used by the grid API.
    pub fn from_row_col(row: usize, col: usize) -> Self {
        Self { x: col, y: row }
    }

    /// The row index (alias for `y`).
    pub fn row(&self) -> usize {
        self.y
    }

    /// The column index (alias for `x`).
    pub fn col(&self) -> usize {
        self.x
    }
}
