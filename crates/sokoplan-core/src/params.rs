//! Parameter structures shared across interfaces.
//!
//! These structures carry caller intent into the core without any
//! framework-specific derives, so the CLI (and any future surface) can wrap
//! them with its own argument parsing and convert via `Into`/field access.

use std::path::PathBuf;
use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The puzzle rule set a problem is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Visit every reachable cell
    Exploration,
    /// Push every block onto a goal
    Sokoban,
}

impl Variant {
    /// Canonical lowercase name, also the default planning-domain name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Exploration => "exploration",
            Variant::Sokoban => "sokoban",
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exploration" => Ok(Variant::Exploration),
            "sokoban" => Ok(Variant::Sokoban),
            _ => Err(format!("Invalid variant: {s}. Must be 'exploration' or 'sokoban'")),
        }
    }
}

/// Parameters for compiling a world into a problem document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompileProblem {
    /// Unique name of the problem instance, emitted in the `problem` clause
    pub problem_name: String,
    /// Name of the planning domain the problem references
    pub domain_name: String,
    /// Which rule set to compile for
    pub variant: Variant,
}

/// Configuration for the external planner invocation.
///
/// The core never reads process-wide state; whichever component invokes the
/// planner receives one of these from its caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PlannerConfig {
    /// Path to the planner executable
    pub binary: PathBuf,
    /// How many solutions the planner should produce
    pub solutions_to_find: u32,
    /// Enable the planner's local-search phase
    pub use_local_search: bool,
    /// Enable the planner's best-first phase
    pub use_best_first: bool,
    /// Filename (relative to the working directory) the planner writes the
    /// solution to
    pub solution_filename: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("lpg"),
            solutions_to_find: 1,
            use_local_search: true,
            use_best_first: true,
            solution_filename: "computed_plan.plan".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Checks that the configuration describes a runnable planner.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SokoplanError::Configuration`] when both search
    /// phases are disabled — the planner would have no strategy left.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.use_local_search && !self.use_best_first {
            return Err(crate::SokoplanError::configuration(
                "both local search and best first have been disabled",
            ));
        }
        Ok(())
    }
}
