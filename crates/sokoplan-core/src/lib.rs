//! Core library for the sokoplan planning wrapper.
//!
//! This crate turns a grid-based Sokoban-style puzzle instance, received as a
//! JSON world document, into a declarative PDDL problem an external planner
//! can solve, and turns the planner's textual solution back into a typed,
//! serializable action sequence. It contains no I/O: every component is a
//! pure, synchronous transformation, and invoking the actual planner binary
//! is the caller's job (see the `sokoplan` CLI crate).
//!
//! # Pipeline
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌───────────────┐
//! │  Ingestion │──▶│ Grid World │──▶│ Problem text  │──▶ [external planner]
//! │ (world/)   │   │  (world/)  │   │   (pddl/)     │
//! └────────────┘   └────────────┘   └───────────────┘
//!                                    ┌───────────────┐   ┌──────────────┐
//!                  [solution file]──▶│  Plan parser  │──▶│ Wire document│
//!                                    │  (solution/)  │   │ (solution/)  │
//!                                    └───────────────┘   └──────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sokoplan_core::{compile, world_from_json, CompileProblem, Variant};
//!
//! # fn example() -> sokoplan_core::Result<()> {
//! let world = world_from_json(r#"{
//!     "version": "1.0",
//!     "world": {
//!         "rows": 2,
//!         "columns": 2,
//!         "cells": [
//!             { "x": 0, "y": 0, "entities": "R" },
//!             { "x": 1, "y": 1, "entities": "BG" }
//!         ]
//!     }
//! }"#)?;
//!
//! let problem = compile(&world, &CompileProblem {
//!     problem_name: "demo".to_string(),
//!     domain_name: "sokoban".to_string(),
//!     variant: Variant::Sokoban,
//! });
//! assert!(problem.starts_with("(define"));
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod pddl;
pub mod solution;
pub mod world;

// Re-export commonly used types
pub use error::{Result, SokoplanError};
pub use models::{Action, Block, CellContent, Direction, Point};
pub use params::{CompileProblem, PlannerConfig, Variant};
pub use pddl::compile;
pub use solution::{PlanDocument, PlanParser};
pub use world::{world_from_json, GridWorld, WorldRequest};
