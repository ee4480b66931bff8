//! Typed actions reconstructed from a planner solution.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::{Direction, Point};

/// One step of a solved plan.
///
/// Actions are immutable once constructed: they are produced only by the
/// plan parser and consumed by the wire serializer. The serde representation
/// is externally tagged, so each action serializes to a single-key JSON
/// object (`{"move": {…}}`, `{"push_goal": {…}}`, …) and adding a variant
/// without a serialization rule is a compile error, not a runtime fault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub enum Action {
    /// The player walks one cell.
    ///
    /// `0:   (MOVE PLAYER-01 POS-05-08 POS-04-08 DIR-LEFT) [1]`
    #[serde(rename = "move")]
    Move {
        player: String,
        #[serde(rename = "from")]
        start: Point,
        #[serde(rename = "to")]
        end: Point,
        direction: Direction,
    },

    /// The player pushes a stone onto a goal cell.
    ///
    /// `(PUSH-TO-GOAL PLAYER-01 STONE-02 POS-08-03 POS-08-04 POS-08-05 DIR-DOWN) [1]`
    #[serde(rename = "push_goal")]
    PushToGoal {
        player: String,
        #[serde(rename = "stone_position")]
        stone: String,
        player_position: Point,
        start: Point,
        end: Point,
        direction: Direction,
    },

    /// The player pushes a stone onto a non-goal cell.
    #[serde(rename = "push_non_goal")]
    PushToNonGoal {
        player: String,
        #[serde(rename = "stone_position")]
        stone: String,
        player_position: Point,
        start: Point,
        end: Point,
        direction: Direction,
    },

    /// The player pulls a stone onto a goal cell (pull-variant domain).
    #[serde(rename = "pull_goal")]
    PullToGoal {
        player: String,
        #[serde(rename = "stone_position")]
        stone: String,
        player_position: Point,
        start: Point,
        end: Point,
        direction: Direction,
    },

    /// The player pulls a stone onto a non-goal cell (pull-variant domain).
    #[serde(rename = "pull_non_goal")]
    PullToNonGoal {
        player: String,
        #[serde(rename = "stone_position")]
        stone: String,
        player_position: Point,
        start: Point,
        end: Point,
        direction: Direction,
    },
}

impl Action {
    /// The planner-text action name this variant is parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            Action::Move { .. } => "MOVE",
            Action::PushToGoal { .. } => "PUSH-TO-GOAL",
            Action::PushToNonGoal { .. } => "PUSH-TO-NONGOAL",
            Action::PullToGoal { .. } => "PULL-TO-GOAL",
            Action::PullToNonGoal { .. } => "PULL-TO-NONGOAL",
        }
    }

    /// True for the pull variants introduced by the v2 pull domain.
    ///
    /// Plans containing pull actions are stamped with wire version `1.1`.
    pub fn is_pull(&self) -> bool {
        matches!(self, Action::PullToGoal { .. } | Action::PullToNonGoal { .. })
    }
}
