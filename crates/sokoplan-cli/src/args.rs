use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Main command-line interface for the sokoplan planning wrapper
///
/// Sokoplan turns grid-based Sokoban-style puzzle instances into PDDL
/// problems for an external planner and turns the planner's solutions back
/// into structured plans. The CLI exposes the individual pipeline stages
/// (`compile`, `parse`) as well as the full pipeline (`solve`).
#[derive(Parser)]
#[command(version, about, name = "sokoplan")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the sokoplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a world document into a planning problem
    #[command(alias = "c")]
    Compile(CompileArgs),
    /// Parse a planner solution file into a plan document
    #[command(alias = "p")]
    Parse(ParseArgs),
    /// Run the full pipeline: compile, plan, parse
    Solve(SolveArgs),
}

/// Problem identity shared by `compile` and `solve`.
#[derive(ClapArgs)]
pub struct ProblemArgs {
    /// Puzzle variant: 'sokoban' or 'exploration'
    #[arg(long, default_value = "sokoban")]
    pub variant: String,

    /// Name of the problem instance
    #[arg(long, default_value = "grid-problem")]
    pub problem_name: String,

    /// Planning-domain name referenced by the problem. Defaults to the
    /// variant name
    #[arg(long)]
    pub domain_name: Option<String>,
}

#[derive(ClapArgs)]
pub struct CompileArgs {
    /// Path to the world JSON document
    pub world: PathBuf,

    #[command(flatten)]
    pub problem: ProblemArgs,

    /// Write the problem text to this file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

#[derive(ClapArgs)]
pub struct ParseArgs {
    /// Path to the solution file written by the planner
    pub solution: PathBuf,

    /// Print the plan as human-readable text instead of JSON
    #[arg(long)]
    pub text: bool,

    /// Pretty-print the JSON output
    #[arg(long, conflicts_with = "text")]
    pub pretty: bool,
}

#[derive(ClapArgs)]
pub struct SolveArgs {
    /// Path to the world JSON document
    pub world: PathBuf,

    #[command(flatten)]
    pub problem: ProblemArgs,

    /// Path to the planning-domain file handed to the planner
    #[arg(long)]
    pub domain_file: PathBuf,

    /// Path to the planner executable
    #[arg(long, default_value = "lpg")]
    pub planner_bin: PathBuf,

    /// Abort the planner after this many seconds and treat it as failure
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// How many solutions the planner should produce
    #[arg(long, default_value_t = 1)]
    pub solutions: u32,

    /// Disable the planner's best-first phase
    #[arg(long, conflicts_with = "only_best_first")]
    pub no_best_first: bool,

    /// Disable the planner's local-search phase
    #[arg(long)]
    pub only_best_first: bool,

    /// Keep problem/solution files in this directory instead of a scratch
    /// directory
    #[arg(long)]
    pub work_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}
