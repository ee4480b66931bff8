//! Problem compiler: grid world → declarative planning-problem text.
//!
//! The compiler walks a read-only [`GridWorld`] and renders a PDDL problem
//! document for one of the two supported rule sets. Emission is a pure
//! function of the grid content: compiling the same world twice yields
//! byte-identical text.
//!
//! Predicate and object names are a byte-for-byte, case-sensitive contract
//! with the external planner's fixed domain files; this compiler renders
//! them but cannot validate them against the domain.

use log::debug;

use crate::params::{CompileProblem, Variant};
use crate::world::GridWorld;

mod exploration;
mod sokoban;
pub mod writer;

use writer::ClauseWriter;

/// The single player object shared by both variants.
pub const PLAYER_OBJECT: &str = "player-01";

/// Compiles a world into a planning-problem document.
pub fn compile(world: &GridWorld, params: &CompileProblem) -> String {
    debug!(
        "compiling {}x{} world into {} problem '{}' (domain '{}')",
        world.rows(),
        world.cols(),
        params.variant.as_str(),
        params.problem_name,
        params.domain_name
    );

    let mut w = ClauseWriter::new();
    w.open("define");
    w.line(&format!("(problem {})", params.problem_name));
    w.line(&format!("(:domain {})", params.domain_name));
    match params.variant {
        Variant::Exploration => exploration::emit(world, &mut w),
        Variant::Sokoban => sokoban::emit(world, &mut w),
    }
    w.close();
    w.finish()
}
