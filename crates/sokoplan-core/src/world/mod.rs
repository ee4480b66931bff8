//! The grid world model and world-document ingestion.
//!
//! A [`GridWorld`] is a decorated matrix: each cell holds a *set* of
//! [`CellContent`] markers, and the world derives the robot position, the
//! docking-station position, the ordered block list and the goal cells from
//! them. `(0, 0)` is the top-left corner; rows grow downward.
//!
//! The world is mutated only while a document is ingested (see [`ingest`])
//! and treated as read-only afterward — the problem compiler never touches
//! it. Sharing one instance across threads therefore needs no internal
//! synchronization, but none is provided either.

use std::collections::BTreeSet;

use crate::error::{Result, SokoplanError};
use crate::models::{Block, CellContent, Direction, Point};

pub mod ingest;

pub use ingest::{world_from_json, WorldRequest};

/// A rows×cols grid of marker sets with derived entity caches.
#[derive(Debug, Clone)]
pub struct GridWorld {
    rows: usize,
    cols: usize,
    /// Flat row-major cell storage; length is exactly `rows * cols`.
    cells: Vec<BTreeSet<CellContent>>,
    /// Cached robot position; last insertion wins on duplicates.
    robot: Option<Point>,
    /// Cached docking-station position; last insertion wins on duplicates.
    docking_station: Option<Point>,
    /// Blocks in first-insertion order; ids are the vector indices.
    blocks: Vec<Block>,
}

impl GridWorld {
    /// Creates an empty world with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`SokoplanError::InvalidDimensions`] when either dimension is
    /// zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(SokoplanError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![BTreeSet::new(); rows * cols],
            robot: None,
            docking_station: None,
            blocks: Vec::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Maps (row, col) to the flat index, checking bounds.
    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(SokoplanError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(row * self.cols + col)
    }

    /// Maps a flat index back to a coordinate. Inverse of [`Self::index_of`].
    fn point_of(&self, index: usize) -> Point {
        Point::from_row_col(index / self.cols, index % self.cols)
    }

    /// Inserts a marker into the target cell's set.
    ///
    /// Inserting [`CellContent::Robot`] or [`CellContent::DockingStation`]
    /// also caches the coordinate; on duplicate insertions the last write
    /// wins. Inserting [`CellContent::Block`] appends a [`Block`] with the
    /// next sequential id, so block ids replay deterministically from the
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SokoplanError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn add_content(&mut self, row: usize, col: usize, content: CellContent) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index].insert(content);
        match content {
            CellContent::Robot => self.robot = Some(Point::from_row_col(row, col)),
            CellContent::DockingStation => {
                self.docking_station = Some(Point::from_row_col(row, col));
            }
            CellContent::Block => {
                let id = self.blocks.len();
                self.blocks.push(Block {
                    id,
                    position: Point::from_row_col(row, col),
                });
            }
            _ => {}
        }
        Ok(())
    }

    /// Removes a marker from the target cell's set.
    ///
    /// Removing an absent marker is a no-op. The derived caches (robot,
    /// docking station, block list) are not rolled back: the world is
    /// read-only once ingestion finishes, so removal only exists to let
    /// callers fix up a cell mid-ingestion.
    ///
    /// # Errors
    ///
    /// Returns [`SokoplanError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn remove_content(&mut self, row: usize, col: usize, content: CellContent) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index].remove(&content);
        Ok(())
    }

    /// Whether the target cell's set contains the marker.
    ///
    /// # Errors
    ///
    /// Returns [`SokoplanError::OutOfBounds`] for coordinates outside the
    /// grid.
    pub fn contains(&self, row: usize, col: usize, content: CellContent) -> Result<bool> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index].contains(&content))
    }

    /// Infallible marker lookup by point; out-of-range points read as absent.
    pub fn has(&self, point: Point, content: CellContent) -> bool {
        self.contains(point.row(), point.col(), content).unwrap_or(false)
    }

    /// True iff the cell does not carry [`CellContent::Untraversable`].
    pub fn is_traversable(&self, row: usize, col: usize) -> bool {
        !self.has(Point::from_row_col(row, col), CellContent::Untraversable)
    }

    /// Whether a cell counts as empty for the `clear` planning predicate.
    ///
    /// The check order is significant: anything untraversable, occupied by a
    /// block or occupied by the robot is not empty, no matter what else the
    /// cell carries; a docking station or a goal does not block traversal
    /// and short-circuits to empty; otherwise the cell is empty iff its
    /// marker set is.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        let p = Point::from_row_col(row, col);
        if self.has(p, CellContent::Untraversable) {
            return false;
        }
        if self.has(p, CellContent::Block) {
            return false;
        }
        if self.has(p, CellContent::Robot) {
            return false;
        }
        if self.has(p, CellContent::DockingStation) {
            return true;
        }
        if self.has(p, CellContent::Goal) {
            return true;
        }
        self.index_of(row, col)
            .map(|i| self.cells[i].is_empty())
            .unwrap_or(false)
    }

    /// True iff the cell carries the exploration-only `Visited` marker.
    pub fn is_visited(&self, row: usize, col: usize) -> bool {
        self.has(Point::from_row_col(row, col), CellContent::Visited)
    }

    /// The coordinate one step in `direction` from (row, col).
    ///
    /// This is a boundary check only — it does not consult traversability.
    ///
    /// # Errors
    ///
    /// Returns [`SokoplanError::EdgeOfGrid`] when the step would leave the
    /// grid. Callers probing adjacency are expected to catch and skip it.
    pub fn neighbor(&self, row: usize, col: usize, direction: Direction) -> Result<Point> {
        let edge = || SokoplanError::EdgeOfGrid { direction, row, col };
        let (r, c) = match direction {
            Direction::Up => (row.checked_sub(1).ok_or_else(edge)?, col),
            Direction::Down => {
                if row + 1 >= self.rows {
                    return Err(edge());
                }
                (row + 1, col)
            }
            Direction::Left => (row, col.checked_sub(1).ok_or_else(edge)?),
            Direction::Right => {
                if col + 1 >= self.cols {
                    return Err(edge());
                }
                (row, col + 1)
            }
        };
        Ok(Point::from_row_col(r, c))
    }

    /// Every coordinate in row-major order (row varies slowest).
    ///
    /// The iterator is lazy and restartable: each call yields a fresh pass
    /// over all `rows * cols` coordinates.
    pub fn cells(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Point::from_row_col(row, col)))
    }

    /// The blocks in first-insertion order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The block occupying `point`, if any.
    pub fn block_at(&self, point: Point) -> Option<&Block> {
        self.blocks.iter().find(|b| b.position == point)
    }

    /// Goal cells in row-major scan order. Computed per call, not cached.
    pub fn goals(&self) -> Vec<Point> {
        (0..self.cell_count())
            .filter(|&i| self.cells[i].contains(&CellContent::Goal))
            .map(|i| self.point_of(i))
            .collect()
    }

    /// Cached robot position, if a robot marker was inserted.
    pub fn robot(&self) -> Option<Point> {
        self.robot
    }

    /// Cached docking-station position, if one was inserted.
    pub fn docking_station(&self) -> Option<Point> {
        self.docking_station
    }
}
