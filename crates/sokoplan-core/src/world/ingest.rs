//! World-document ingestion.
//!
//! Converts the external JSON world description into a [`GridWorld`] by
//! replaying every entity character of every listed cell into
//! [`GridWorld::add_content`].

use log::debug;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SokoplanError};
use crate::models::CellContent;
use crate::world::GridWorld;

/// The world-document schema version this crate understands.
pub const WORLD_SCHEMA_VERSION: &str = "1.0";

/// Top-level world request document.
///
/// ```json
/// {
///   "version": "1.0",
///   "world": {
///     "rows": 2,
///     "columns": 2,
///     "cells": [ { "x": 0, "y": 0, "entities": "RD" } ]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorldRequest {
    /// Schema version; must be `"1.0"`
    pub version: String,
    /// The grid description
    pub world: WorldGrid,
}

/// Grid dimensions plus the non-empty cells.
///
/// Cells omitted from `cells` stay empty. Cell order matters when stable
/// block ids are required: blocks are numbered in replay order, and emitting
/// cells row-major is the convention callers are expected to follow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct WorldGrid {
    pub rows: usize,
    pub columns: usize,
    #[serde(default)]
    pub cells: Vec<CellEntry>,
}

/// One cell's content, as a string of one-character entity codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CellEntry {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
    /// Entity codes from {R, D, B, G, U, V}; empty means an empty cell
    #[serde(default)]
    pub entities: String,
}

impl WorldRequest {
    /// Deserializes and version-checks a world request.
    ///
    /// # Errors
    ///
    /// * [`SokoplanError::Serialization`] — the document is not valid JSON
    ///   for this schema
    /// * [`SokoplanError::UnsupportedSchemaVersion`] — the version string is
    ///   not `"1.0"`
    pub fn from_json(input: &str) -> Result<Self> {
        let request: WorldRequest = serde_json::from_str(input)?;
        if request.version != WORLD_SCHEMA_VERSION {
            return Err(SokoplanError::UnsupportedSchemaVersion {
                version: request.version,
            });
        }
        Ok(request)
    }

    /// Builds the grid world by replaying every cell's entity characters.
    ///
    /// # Errors
    ///
    /// * [`SokoplanError::InvalidDimensions`] — zero rows or columns
    /// * [`SokoplanError::OutOfBounds`] — a cell entry outside the grid
    /// * [`SokoplanError::UnknownEntityCharacter`] — an entity code outside
    ///   the R/D/B/G/U/V mapping
    pub fn into_world(self) -> Result<GridWorld> {
        debug!(
            "ingesting {}x{} world with {} cell entries",
            self.world.rows,
            self.world.columns,
            self.world.cells.len()
        );
        let mut world = GridWorld::new(self.world.rows, self.world.columns)?;
        for cell in &self.world.cells {
            for ch in cell.entities.chars() {
                world.add_content(cell.y, cell.x, CellContent::from_code(ch)?)?;
            }
        }
        Ok(world)
    }
}

/// Convenience wrapper: parse a world request and build the grid in one call.
pub fn world_from_json(input: &str) -> Result<GridWorld> {
    WorldRequest::from_json(input)?.into_world()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn test_ingest_rejects_unknown_version() {
        let err = world_from_json(r#"{"version": "2.0", "world": {"rows": 1, "columns": 1}}"#)
            .unwrap_err();
        match err {
            SokoplanError::UnsupportedSchemaVersion { version } => assert_eq!(version, "2.0"),
            other => panic!("Expected UnsupportedSchemaVersion, got {other:?}"),
        }
    }

    #[test]
    fn test_ingest_rejects_unknown_entity_character() {
        let err = world_from_json(
            r#"{"version": "1.0", "world": {"rows": 1, "columns": 1,
                "cells": [{"x": 0, "y": 0, "entities": "Z"}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SokoplanError::UnknownEntityCharacter { character: 'Z' }));
    }

    #[test]
    fn test_ingest_rejects_cell_outside_grid() {
        let err = world_from_json(
            r#"{"version": "1.0", "world": {"rows": 1, "columns": 1,
                "cells": [{"x": 1, "y": 0, "entities": "R"}]}}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SokoplanError::OutOfBounds { .. }));
    }

    #[test]
    fn test_ingest_omitted_cells_stay_empty() {
        let world = world_from_json(
            r#"{"version": "1.0", "world": {"rows": 2, "columns": 2,
                "cells": [{"x": 0, "y": 1, "entities": "R"}]}}"#,
        )
        .unwrap();
        assert!(world.is_empty(0, 0));
        assert!(world.is_empty(0, 1));
        assert!(world.is_empty(1, 1));
        assert_eq!(world.robot(), Some(Point::from_row_col(1, 0)));
    }

    #[test]
    fn test_ingest_replays_multiple_entities_per_cell() {
        let world = world_from_json(
            r#"{"version": "1.0", "world": {"rows": 1, "columns": 2,
                "cells": [{"x": 0, "y": 0, "entities": "RD"}, {"x": 1, "y": 0, "entities": "BG"}]}}"#,
        )
        .unwrap();
        assert!(world.contains(0, 0, CellContent::Robot).unwrap());
        assert!(world.contains(0, 0, CellContent::DockingStation).unwrap());
        assert!(world.contains(0, 1, CellContent::Block).unwrap());
        assert!(world.contains(0, 1, CellContent::Goal).unwrap());
        assert_eq!(world.blocks().len(), 1);
        assert_eq!(world.goals().len(), 1);
    }
}
