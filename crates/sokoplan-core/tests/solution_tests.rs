//! Integration tests for the plan parser and the wire document.

use sokoplan_core::{Action, Direction, PlanDocument, PlanParser, Point, SokoplanError};

mod common;

#[test]
fn test_push_solution_parses_in_order() {
    let actions = PlanParser::new().parse(common::PUSH_SOLUTION).unwrap();

    assert_eq!(actions.len(), 3);
    assert_eq!(
        actions[0],
        Action::Move {
            player: "PLAYER-01".to_string(),
            start: Point::new(5, 8),
            end: Point::new(4, 8),
            direction: Direction::Left,
        }
    );
    assert_eq!(
        actions[1],
        Action::PushToNonGoal {
            player: "PLAYER-01".to_string(),
            stone: "STONE-02".to_string(),
            player_position: Point::new(8, 5),
            start: Point::new(8, 6),
            end: Point::new(8, 7),
            direction: Direction::Down,
        }
    );
    assert_eq!(actions[2].name(), "PUSH-TO-GOAL");
}

#[test]
fn test_parser_is_deterministic() {
    let parser = PlanParser::new();
    let first = parser.parse(common::PUSH_SOLUTION).unwrap();
    let second = parser.parse(common::PUSH_SOLUTION).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_kept_line_yields_exactly_one_action() {
    let kept_lines = common::PUSH_SOLUTION
        .lines()
        .map(str::trim)
        .filter(|l| l.starts_with(|c: char| c.is_ascii_digit()))
        .count();
    let actions = PlanParser::new().parse(common::PUSH_SOLUTION).unwrap();
    assert_eq!(actions.len(), kept_lines);
}

#[test]
fn test_pull_solution_parses_and_stamps_v1_1() {
    let actions = PlanParser::new().parse(common::PULL_SOLUTION).unwrap();
    assert_eq!(actions.len(), 3);
    assert!(actions[1].is_pull());

    let document = PlanDocument::from_actions(actions);
    assert_eq!(document.version, "1.1");
}

#[test]
fn test_push_solution_stamps_v1_0() {
    let actions = PlanParser::new().parse(common::PUSH_SOLUTION).unwrap();
    let document = PlanDocument::from_actions(actions);
    assert_eq!(document.version, "1.0");
}

#[test]
fn test_unknown_action_aborts_the_whole_parse() {
    let text = "0: (MOVE PLAYER-01 POS-00-00 POS-00-01 DIR-DOWN) [1]\n1: (TELEPORT PLAYER-01 POS-00-01 POS-09-09 DIR-UP) [1]\n";
    let err = PlanParser::new().parse(text).unwrap_err();
    assert!(matches!(err, SokoplanError::UnknownActionName { .. }));
}

#[test]
fn test_unknown_direction_token_fails() {
    let err = PlanParser::new()
        .parse("0: (MOVE PLAYER-01 POS-00-00 POS-00-01 DIR-NORTH) [1]")
        .unwrap_err();
    assert!(matches!(err, SokoplanError::UnknownDirection { .. }));
}

#[test]
fn test_serialized_plan_round_trips_field_for_field() {
    let actions = PlanParser::new().parse(common::PUSH_SOLUTION).unwrap();
    let document = PlanDocument::from_actions(actions.clone());

    let json = document.to_json().unwrap();
    let restored = PlanDocument::from_json(&json).unwrap();

    assert_eq!(restored.plan, actions);
    match &restored.plan[0] {
        Action::Move { player, start, end, direction } => {
            assert_eq!(player, "PLAYER-01");
            assert_eq!(*start, Point::new(5, 8));
            assert_eq!(*end, Point::new(4, 8));
            assert_eq!(*direction, Direction::Left);
        }
        other => panic!("Expected a move action, got {other:?}"),
    }
}

#[test]
fn test_empty_solution_parses_to_empty_plan() {
    let actions = PlanParser::new().parse("; no steps\n\n").unwrap();
    assert!(actions.is_empty());
    assert_eq!(PlanDocument::from_actions(actions).version, "1.0");
}
