use std::str::FromStr;

use super::*;
use crate::error::SokoplanError;

#[test]
fn test_point_row_col_aliases() {
    let p = Point::from_row_col(8, 5);
    assert_eq!(p.x, 5);
    assert_eq!(p.y, 8);
    assert_eq!(p.row(), 8);
    assert_eq!(p.col(), 5);
    assert_eq!(p, Point::new(5, 8));
}

#[test]
fn test_direction_tokens_round_trip() {
    for dir in Direction::ALL {
        assert_eq!(Direction::from_str(dir.token()).unwrap(), dir);
    }
}

#[test]
fn test_direction_parse_rejects_unknown_token() {
    let err = Direction::from_str("DIR-NORTH").unwrap_err();
    match err {
        SokoplanError::UnknownDirection { token } => assert_eq!(token, "DIR-NORTH"),
        other => panic!("Expected UnknownDirection, got {other:?}"),
    }
}

#[test]
fn test_direction_parse_is_case_sensitive() {
    assert!(Direction::from_str("dir-left").is_err());
}

#[test]
fn test_cell_content_codes_round_trip() {
    for content in [
        CellContent::Robot,
        CellContent::DockingStation,
        CellContent::Block,
        CellContent::Goal,
        CellContent::Untraversable,
        CellContent::Visited,
    ] {
        assert_eq!(CellContent::from_code(content.code()).unwrap(), content);
    }
}

#[test]
fn test_cell_content_rejects_unknown_code() {
    let err = CellContent::from_code('X').unwrap_err();
    match err {
        SokoplanError::UnknownEntityCharacter { character } => assert_eq!(character, 'X'),
        other => panic!("Expected UnknownEntityCharacter, got {other:?}"),
    }
}

#[test]
fn test_block_object_name_is_zero_padded() {
    let block = Block { id: 3, position: Point::new(1, 2) };
    assert_eq!(block.object_name(), "stone-03");

    let block = Block { id: 12, position: Point::new(0, 0) };
    assert_eq!(block.object_name(), "stone-12");
}

#[test]
fn test_action_names_match_planner_convention() {
    let action = Action::Move {
        player: "PLAYER-01".to_string(),
        start: Point::new(5, 8),
        end: Point::new(4, 8),
        direction: Direction::Left,
    };
    assert_eq!(action.name(), "MOVE");
    assert!(!action.is_pull());

    let action = Action::PullToGoal {
        player: "PLAYER-01".to_string(),
        stone: "STONE-00".to_string(),
        player_position: Point::new(3, 3),
        start: Point::new(2, 3),
        end: Point::new(1, 3),
        direction: Direction::Left,
    };
    assert_eq!(action.name(), "PULL-TO-GOAL");
    assert!(action.is_pull());
}
