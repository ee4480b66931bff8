//! Plan parser: planner solution text → typed actions.
//!
//! The external planner writes a line-oriented solution file. Comment lines
//! start with `;`; every step line has the shape
//!
//! ```text
//! 0:   (MOVE PLAYER-01 POS-05-08 POS-04-08 DIR-LEFT) [1]
//! ```
//!
//! The parser filters the file down to step lines, then reconstructs exactly
//! one [`Action`] per surviving line — a line that cannot be reconstructed is
//! a hard error, never silently dropped.

use log::debug;
use regex::Regex;

use crate::error::{Result, SokoplanError};
use crate::models::{Action, Point};

pub mod wire;

pub use wire::PlanDocument;

/// Parses planner solution files into ordered action sequences.
#[derive(Debug)]
pub struct PlanParser {
    step_line: Regex,
}

impl PlanParser {
    /// Creates a parser with the compiled step-line grammar.
    pub fn new() -> Self {
        // `<step>: (<ACTION-NAME> <param> <param> ...) [<cost>]`
        let step_line = Regex::new(r"^\s*\d+:\s*\(([A-Z-]+)\s+([^)]+)\)\s*(\[\d+\])?$")
            .expect("step-line grammar is a valid regex");
        Self { step_line }
    }

    /// Parses a whole solution text into its ordered action sequence.
    ///
    /// Lines are trimmed, empty lines and `;` comments are dropped, and only
    /// lines beginning with a step index are kept. Parsing is total over the
    /// kept lines: each yields exactly one action or an error.
    ///
    /// # Errors
    ///
    /// * [`SokoplanError::MalformedSolutionLine`] — a kept line does not
    ///   match the step grammar or carries the wrong parameter count
    /// * [`SokoplanError::UnknownActionName`] — a recognized step line names
    ///   an action outside the known set
    /// * [`SokoplanError::UnknownDirection`] — a direction token outside the
    ///   canonical DIR-* symbols
    pub fn parse(&self, text: &str) -> Result<Vec<Action>> {
        let actions: Vec<Action> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with(';'))
            .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
            .map(|line| self.parse_step_line(line))
            .collect::<Result<_>>()?;
        debug!("parsed {} actions from solution text", actions.len());
        Ok(actions)
    }

    /// Parses one step line into an action.
    fn parse_step_line(&self, line: &str) -> Result<Action> {
        let captures = self
            .step_line
            .captures(line)
            .ok_or_else(|| SokoplanError::malformed_line(line))?;
        let name = &captures[1];
        // collapse internal whitespace runs and split into positional tokens
        let params: Vec<&str> = captures[2].split_whitespace().collect();

        match name {
            "MOVE" => {
                let [player, start, end, direction] = expect_params(&params, line)?;
                Ok(Action::Move {
                    player: player.to_string(),
                    start: parse_position(start, line)?,
                    end: parse_position(end, line)?,
                    direction: direction.parse()?,
                })
            }
            "PUSH-TO-GOAL" | "PUSH-TO-NONGOAL" | "PULL-TO-GOAL" | "PULL-TO-NONGOAL" => {
                let [player, stone, player_pos, start, end, direction] =
                    expect_params(&params, line)?;
                let player = player.to_string();
                let stone = stone.to_string();
                let player_position = parse_position(player_pos, line)?;
                let start = parse_position(start, line)?;
                let end = parse_position(end, line)?;
                let direction = direction.parse()?;
                Ok(match name {
                    "PUSH-TO-GOAL" => Action::PushToGoal {
                        player,
                        stone,
                        player_position,
                        start,
                        end,
                        direction,
                    },
                    "PUSH-TO-NONGOAL" => Action::PushToNonGoal {
                        player,
                        stone,
                        player_position,
                        start,
                        end,
                        direction,
                    },
                    "PULL-TO-GOAL" => Action::PullToGoal {
                        player,
                        stone,
                        player_position,
                        start,
                        end,
                        direction,
                    },
                    _ => Action::PullToNonGoal {
                        player,
                        stone,
                        player_position,
                        start,
                        end,
                        direction,
                    },
                })
            }
            other => Err(SokoplanError::UnknownActionName {
                name: other.to_string(),
                line: line.to_string(),
            }),
        }
    }
}

impl Default for PlanParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the positional parameter count of a step line.
fn expect_params<'a, const N: usize>(params: &[&'a str], line: &str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(params.to_vec()).map_err(|_| SokoplanError::malformed_line(line))
}

/// Converts a position token like `POS-05-08` into a [`Point`].
///
/// The two integer components following the prefix are taken as (col, row);
/// the alphabetic prefix itself is not inspected.
fn parse_position(token: &str, line: &str) -> Result<Point> {
    let mut parts = token.split('-').skip(1);
    let x = parts.next().and_then(|p| p.parse().ok());
    let y = parts.next().and_then(|p| p.parse().ok());
    match (x, y) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err(SokoplanError::malformed_line(line)),
    }
}
