//! Sokoban-variant emission: push every block onto a goal.

use crate::models::{CellContent, Direction, Point};
use crate::pddl::writer::ClauseWriter;
use crate::pddl::PLAYER_OBJECT;
use crate::world::GridWorld;

/// Location-object name for a cell, `pos-CC-RR` (zero-padded col, row).
///
/// The component order matches the plan parser's `POS-<col>-<row>` position
/// tokens, so positions in a solved plan map back to the same coordinates
/// the compiler meant.
fn location(p: Point) -> String {
    format!("pos-{:02}-{:02}", p.col(), p.row())
}

/// Emits the `:objects`, `:init` and `:goal` clauses for a sokoban problem.
pub(crate) fn emit(world: &GridWorld, w: &mut ClauseWriter) {
    let traversable = |p: &Point| world.is_traversable(p.row(), p.col());

    w.open(":objects");
    for dir in Direction::ALL {
        w.object(dir.token(), "direction");
    }
    w.object(PLAYER_OBJECT, "player");
    for cell in world.cells().filter(traversable) {
        w.object(&location(cell), "location");
    }
    for block in world.blocks() {
        w.object(&block.object_name(), "stone");
    }
    w.close();

    w.open(":init");
    for cell in world.cells().filter(traversable) {
        w.comment(&format!("cell (row {}, col {})", cell.row(), cell.col()));
        let loc = location(cell);

        if world.has(cell, CellContent::Robot) {
            w.fact("at", &[PLAYER_OBJECT, &loc]);
        } else if let Some(block) = world.block_at(cell) {
            w.fact("at", &[&block.object_name(), &loc]);
        }

        if world.has(cell, CellContent::Goal) {
            w.fact("IS-GOAL", &[&loc]);
        } else {
            w.fact("IS-NONGOAL", &[&loc]);
        }

        // a stone already resting on a goal
        if world.has(cell, CellContent::Goal) {
            if let Some(block) = world.block_at(cell) {
                w.fact("at-goal", &[&block.object_name()]);
            }
        }

        if world.is_empty(cell.row(), cell.col()) {
            w.fact("clear", &[&loc]);
        }

        for dir in Direction::ALL {
            // EdgeOfGrid is the expected signal at the rim; skip the direction
            if let Ok(next) = world.neighbor(cell.row(), cell.col(), dir) {
                if world.is_traversable(next.row(), next.col()) {
                    w.fact("adjacent", &[&loc, &location(next)]);
                }
            }
        }
    }
    w.close();

    w.open(":goal");
    w.open("and");
    for block in world.blocks() {
        w.fact("at-goal", &[&block.object_name()]);
    }
    w.close();
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_names_are_col_row_zero_padded() {
        assert_eq!(location(Point::from_row_col(8, 5)), "pos-05-08");
        assert_eq!(location(Point::from_row_col(0, 3)), "pos-03-00");
    }
}
