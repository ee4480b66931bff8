//! Sokoplan CLI application
//!
//! Command-line driver for the sokoplan planning wrapper: compiles world
//! documents into PDDL problems, invokes the external planner, and parses
//! its solutions back into structured plans.

mod args;
mod cli;
mod planner;

use anyhow::Result;
use args::{Args, Commands};
use clap::Parser;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { command } = Args::parse();

    info!("sokoplan started");

    match command {
        Commands::Compile(args) => cli::handle_compile(&args),
        Commands::Parse(args) => cli::handle_parse(&args),
        Commands::Solve(args) => cli::handle_solve(&args).await,
    }
}
