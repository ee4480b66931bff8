//! Compass directions and their planner-text tokens.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::SokoplanError;

/// One of the four directions the player can move in.
///
/// Each variant carries a canonical symbolic token (`DIR-LEFT`, `DIR-RIGHT`,
/// `DIR-UP`, `DIR-DOWN`) that appears verbatim in the problem text and in the
/// planner's solution lines. The wire (JSON) form is the bare variant name:
/// `"LEFT"`, `"RIGHT"`, `"UP"`, `"DOWN"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in the order adjacency facts are generated.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The canonical token used in problem and solution text.
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Left => "DIR-LEFT",
            Direction::Right => "DIR-RIGHT",
            Direction::Up => "DIR-UP",
            Direction::Down => "DIR-DOWN",
        }
    }

    /// The wire name used in JSON documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }
}

impl FromStr for Direction {
    type Err = SokoplanError;

    /// Parses a canonical token (`DIR-LEFT`, …). Case-sensitive: the planner
    /// emits the tokens exactly as they appear in the problem objects.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIR-LEFT" => Ok(Direction::Left),
            "DIR-RIGHT" => Ok(Direction::Right),
            "DIR-UP" => Ok(Direction::Up),
            "DIR-DOWN" => Ok(Direction::Down),
            _ => Err(SokoplanError::UnknownDirection { token: s.to_string() }),
        }
    }
}
