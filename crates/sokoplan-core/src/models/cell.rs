//! Per-cell content markers.

use crate::error::SokoplanError;

/// A set-membership tag describing what occupies a grid cell.
///
/// Cells hold a *set* of markers. `Goal` may co-occur with any other marker;
/// `Robot`, `DockingStation`, `Block` and `Untraversable` are mutually
/// exclusive by convention but never enforced structurally — ingestion
/// replays whatever the world document says. `Visited` only occurs in
/// exploration worlds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellContent {
    Robot,
    DockingStation,
    Block,
    Goal,
    Untraversable,
    Visited,
}

impl CellContent {
    /// The one-character code used in world documents.
    pub fn code(&self) -> char {
        match self {
            CellContent::Robot => 'R',
            CellContent::DockingStation => 'D',
            CellContent::Block => 'B',
            CellContent::Goal => 'G',
            CellContent::Untraversable => 'U',
            CellContent::Visited => 'V',
        }
    }

    /// Parses a one-character entity code from a world document.
    pub fn from_code(c: char) -> Result<Self, SokoplanError> {
        match c {
            'R' => Ok(CellContent::Robot),
            'D' => Ok(CellContent::DockingStation),
            'B' => Ok(CellContent::Block),
            'G' => Ok(CellContent::Goal),
            'U' => Ok(CellContent::Untraversable),
            'V' => Ok(CellContent::Visited),
            _ => Err(SokoplanError::UnknownEntityCharacter { character: c }),
        }
    }
}
