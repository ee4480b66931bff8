//! Error types for the sokoplan library.

use thiserror::Error;

use crate::models::Direction;

/// Comprehensive error type for all sokoplan operations.
///
/// Every variant is a local, non-retryable fault: a failure in ingestion,
/// compilation or parsing aborts the whole pipeline and is surfaced to the
/// caller. [`SokoplanError::EdgeOfGrid`] is the one exception — it is an
/// expected control-flow signal consumed internally by the problem compiler
/// when probing cell adjacency, and never escapes a public compile call.
#[derive(Error, Debug)]
pub enum SokoplanError {
    /// Grid construction with a zero dimension
    #[error("invalid grid dimensions {rows}x{cols}: both must be positive")]
    InvalidDimensions { rows: usize, cols: usize },

    /// Coordinate outside the grid
    #[error("coordinate (row {row}, col {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Neighbor lookup past a grid boundary. Expected and non-fatal; callers
    /// probing adjacency must catch this and skip the direction.
    #[error("cannot move {direction} from (row {row}, col {col}): edge of grid")]
    EdgeOfGrid {
        direction: Direction,
        row: usize,
        col: usize,
    },

    /// World ingestion encountered an entity code outside the R/D/B/G/U/V set
    #[error("unknown entity character '{character}'")]
    UnknownEntityCharacter { character: char },

    /// A direction token that is not one of the canonical DIR-* symbols
    #[error("unknown direction token '{token}'")]
    UnknownDirection { token: String },

    /// A kept solution line does not match the step grammar
    #[error("solution line '{line}' does not match the step grammar")]
    MalformedSolutionLine { line: String },

    /// A well-formed step line names an action outside the known set
    #[error("unknown action '{name}' in solution line '{line}'")]
    UnknownActionName { name: String, line: String },

    /// A versioned document carries a version string this crate cannot handle
    #[error("unsupported schema version '{version}'")]
    UnsupportedSchemaVersion { version: String },

    /// Invalid configuration passed by the caller
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Serialization/deserialization errors
    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl SokoplanError {
    /// Creates an out-of-bounds error for a coordinate in a `rows`x`cols` grid.
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::OutOfBounds { row, col, rows, cols }
    }

    /// Creates a configuration error with a message.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Creates a malformed-solution-line error naming the offending text.
    pub fn malformed_line(line: impl Into<String>) -> Self {
        Self::MalformedSolutionLine { line: line.into() }
    }
}

/// Result type alias for sokoplan operations
pub type Result<T> = std::result::Result<T, SokoplanError>;
