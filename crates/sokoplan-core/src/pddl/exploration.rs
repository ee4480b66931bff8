//! Exploration-variant emission: visit every reachable cell.

use crate::models::{CellContent, Direction, Point};
use crate::pddl::writer::ClauseWriter;
use crate::pddl::PLAYER_OBJECT;
use crate::world::GridWorld;

/// Location-object name for a cell, `cell-RR-CC` (zero-padded row, col).
fn location(p: Point) -> String {
    format!("cell-{:02}-{:02}", p.row(), p.col())
}

/// Emits the `:objects`, `:init` and `:goal` clauses for an exploration
/// problem.
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
    // no stones: cells occupied by a block simply are not clear
    w.close();

    w.open(":init");
    for cell in world.cells().filter(traversable) {
        w.comment(&format!("cell (row {}, col {})", cell.row(), cell.col()));
        let loc = location(cell);

        let is_robot = world.has(cell, CellContent::Robot);
        if is_robot {
            w.fact("at", &[PLAYER_OBJECT, &loc]);
        }
        // the start cell counts as visited, as does anything the world
        // document already marked
        if is_robot || world.has(cell, CellContent::Visited) {
            w.fact("visited", &[&loc]);
        }
        if !world.has(cell, CellContent::Block) {
            w.fact("clear", &[&loc]);
        }

        for dir in Direction::ALL {
            // EdgeOfGrid is the expected signal at the rim; skip the direction
            if let Ok(next) = world.neighbor(cell.row(), cell.col(), dir) {
                if world.is_traversable(next.row(), next.col()) {
                    w.fact("MOVE-DIR", &[&loc, &location(next), dir.token()]);
                }
            }
        }
    }
    w.close();

    // full coverage: every traversable cell not occupied by a block
    w.open(":goal");
    w.open("and");
    for cell in world.cells().filter(traversable) {
        if world.has(cell, CellContent::Block) {
            continue;
        }
        w.fact("visited", &[&location(cell)]);
    }
    w.close();
    w.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_names_are_row_col_zero_padded() {
        assert_eq!(location(Point::from_row_col(5, 8)), "cell-05-08");
        assert_eq!(location(Point::from_row_col(0, 12)), "cell-00-12");
    }
}
