//! Command handlers: wire the pipeline stages to the filesystem.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use sokoplan_core::{
    compile, world_from_json, CompileProblem, GridWorld, PlanDocument, PlanParser, PlannerConfig,
    Variant,
};

use crate::args::{CompileArgs, ParseArgs, ProblemArgs, SolveArgs};
use crate::planner::{run_planner, LpgPlanner, Planner};

/// Resolves the shared problem-identity arguments.
fn compile_spec(problem: &ProblemArgs) -> Result<CompileProblem> {
    let variant: Variant = problem.variant.parse().map_err(|e: String| anyhow!(e))?;
    Ok(CompileProblem {
        problem_name: problem.problem_name.clone(),
        domain_name: problem
            .domain_name
            .clone()
            .unwrap_or_else(|| variant.as_str().to_string()),
        variant,
    })
}

fn load_world(path: &Path) -> Result<GridWorld> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read world document '{}'", path.display()))?;
    Ok(world_from_json(&text)?)
}

fn emit_plan(document: &PlanDocument, text: bool, pretty: bool) -> Result<()> {
    if text {
        print!("{document}");
    } else if pretty {
        println!("{}", document.to_json_pretty()?);
    } else {
        println!("{}", document.to_json()?);
    }
    Ok(())
}

/// `sokoplan compile`: world document → problem text.
pub fn handle_compile(args: &CompileArgs) -> Result<()> {
    let world = load_world(&args.world)?;
    let spec = compile_spec(&args.problem)?;
    let problem = compile(&world, &spec);

    match &args.output {
        Some(path) => fs::write(path, problem)
            .with_context(|| format!("failed to write problem file '{}'", path.display()))?,
        None => print!("{problem}"),
    }
    Ok(())
}

/// `sokoplan parse`: solution file → plan document.
pub fn handle_parse(args: &ParseArgs) -> Result<()> {
    let text = fs::read_to_string(&args.solution)
        .with_context(|| format!("failed to read solution file '{}'", args.solution.display()))?;
    let actions = PlanParser::new().parse(&text)?;
    let document = PlanDocument::from_actions(actions);
    emit_plan(&document, args.text, args.pretty)
}

/// `sokoplan solve`: the full pipeline.
pub async fn handle_solve(args: &SolveArgs) -> Result<()> {
    let world = load_world(&args.world)?;
    let spec = compile_spec(&args.problem)?;
    let problem_text = compile(&world, &spec);

    // the scratch directory must outlive the planner run
    let (work_dir, _scratch): (PathBuf, Option<tempfile::TempDir>) = match &args.work_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create work directory '{}'", dir.display()))?;
            (dir.clone(), None)
        }
        None => {
            let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
            (scratch.path().to_path_buf(), Some(scratch))
        }
    };

    let problem_file = work_dir.join(format!("{}.pddl", spec.problem_name));
    fs::write(&problem_file, &problem_text)
        .with_context(|| format!("failed to write problem file '{}'", problem_file.display()))?;
    info!("problem written to {}", problem_file.display());

    let domain_file = fs::canonicalize(&args.domain_file)
        .with_context(|| format!("domain file '{}' not found", args.domain_file.display()))?;

    let planner = LpgPlanner::new(PlannerConfig {
        binary: args.planner_bin.clone(),
        solutions_to_find: args.solutions,
        use_local_search: !args.only_best_first,
        use_best_first: !args.no_best_first,
        ..Default::default()
    })?;

    let time_limit = args.timeout_secs.map(Duration::from_secs);
    let output = run_planner(&planner, &domain_file, &problem_file, &work_dir, time_limit).await?;

    if !planner.solution_found(&output) {
        bail!(
            "planner reported no solution (exit status {:?})\nstdout:\n{}\nstderr:\n{}",
            output.exit_status,
            output.stdout,
            output.stderr
        );
    }

    let solution_path = planner.solution_path(&work_dir);
    let solution_text = fs::read_to_string(&solution_path).with_context(|| {
        format!("planner reported success but left no solution at '{}'", solution_path.display())
    })?;
    info!("solution read from {}", solution_path.display());

    let actions = PlanParser::new().parse(&solution_text)?;
    let document = PlanDocument::from_actions(actions);
    emit_plan(&document, false, args.pretty)
}
