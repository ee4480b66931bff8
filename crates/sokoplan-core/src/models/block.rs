//! Identified blocks (stones) in a grid world.

use crate::models::Point;

/// A pushable block, identified by insertion order.
///
/// Blocks are owned by the grid world's block list. The `id` is allocated
/// sequentially starting at 0, in the order blocks are first inserted during
/// ingestion, and is the basis for the block's planning-object name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    /// Sequential identifier, 0-based, in first-seen order
    pub id: usize,
    /// The cell the block occupies
    pub position: Point,
}

impl Block {
    /// The symbolic planning-object name for this block, e.g. `stone-03`.
    pub fn object_name(&self) -> String {
        format!("stone-{:02}", self.id)
    }
}
