//! Display implementations for the domain models.
//!
//! Kept separate from the data definitions in [`crate::models`] so the
//! models stay presentation-free. These impls back the CLI's human-readable
//! plan output; the JSON wire format lives in [`crate::solution::wire`].

use std::fmt;

use crate::models::{Action, Direction, Point};
use crate::solution::PlanDocument;

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Move { player, start, end, direction } => {
                write!(f, "{player} moves {start} -> {end} heading {direction}")
            }
            Action::PushToGoal { player, stone, start, end, direction, .. } => {
                write!(f, "{player} pushes {stone} {start} -> {end} heading {direction} (onto goal)")
            }
            Action::PushToNonGoal { player, stone, start, end, direction, .. } => {
                write!(f, "{player} pushes {stone} {start} -> {end} heading {direction}")
            }
            Action::PullToGoal { player, stone, start, end, direction, .. } => {
                write!(f, "{player} pulls {stone} {start} -> {end} heading {direction} (onto goal)")
            }
            Action::PullToNonGoal { player, stone, start, end, direction, .. } => {
                write!(f, "{player} pulls {stone} {start} -> {end} heading {direction}")
            }
        }
    }
}

impl fmt::Display for PlanDocument {
    /// Numbered step list, one action per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan (version {}, {} steps)", self.version, self.plan.len())?;
        for (index, action) in self.plan.iter().enumerate() {
            writeln!(f, "{index:3}. {action}")?;
        }
        Ok(())
    }
}
