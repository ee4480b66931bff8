//! External planner adapter.
//!
//! The planner is a black box: given a domain file and a problem file it
//! either writes a solution file and reports success, or reports failure.
//! Invocation is a single blocking subprocess execution — no retries. The
//! planner's own contract has no timeout, so callers needing bounded latency
//! pass one in and expiry counts as failure.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use sokoplan_core::PlannerConfig;
use tokio::process::Command;
use tokio::time::timeout;

/// Captured result of one planner invocation.
#[derive(Debug)]
pub struct CallOutput {
    pub exit_status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// An external planning engine the pipeline can invoke.
pub trait Planner {
    /// The engine's unique name, for logs and error messages.
    fn name(&self) -> &'static str;

    /// Program and argument vector for solving `problem_file` under
    /// `domain_file`.
    fn command(&self, domain_file: &Path, problem_file: &Path) -> (PathBuf, Vec<String>);

    /// Whether the captured output reports a found solution.
    fn solution_found(&self, output: &CallOutput) -> bool;

    /// Where the planner writes its solution for a given working directory.
    fn solution_path(&self, work_dir: &Path) -> PathBuf;
}

/// The LPG planner.
pub struct LpgPlanner {
    config: PlannerConfig,
}

impl LpgPlanner {
    /// Creates an adapter for a validated configuration.
    pub fn new(config: PlannerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }
}

impl Planner for LpgPlanner {
    fn name(&self) -> &'static str {
        "LPG"
    }

    fn command(&self, domain_file: &Path, problem_file: &Path) -> (PathBuf, Vec<String>) {
        let mut args = vec![
            "-n".to_string(),
            self.config.solutions_to_find.to_string(),
            "-f".to_string(),
            problem_file.display().to_string(),
            "-o".to_string(),
            domain_file.display().to_string(),
            "-out".to_string(),
            self.config.solution_filename.clone(),
        ];
        if !self.config.use_best_first {
            args.push("-nobestfirst".to_string());
        }
        if !self.config.use_local_search {
            args.push("-onlybestfirst".to_string());
        }
        (self.config.binary.clone(), args)
    }

    fn solution_found(&self, output: &CallOutput) -> bool {
        // LPG reports success on stdout, not via the exit status
        output.stdout.contains("Solution number")
    }

    fn solution_path(&self, work_dir: &Path) -> PathBuf {
        work_dir.join(&self.config.solution_filename)
    }
}

/// A planner stand-in for tests: runs `true`, always reports success and
/// points at a prepared solution file.
#[cfg(test)]
pub struct FakePlanner {
    pub solution_file: PathBuf,
}

#[cfg(test)]
impl Planner for FakePlanner {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn command(&self, _domain_file: &Path, _problem_file: &Path) -> (PathBuf, Vec<String>) {
        (PathBuf::from("true"), Vec::new())
    }

    fn solution_found(&self, _output: &CallOutput) -> bool {
        true
    }

    fn solution_path(&self, _work_dir: &Path) -> PathBuf {
        self.solution_file.clone()
    }
}

/// Runs the planner once, blocking until it exits or the time limit fires.
pub async fn run_planner<P: Planner>(
    planner: &P,
    domain_file: &Path,
    problem_file: &Path,
    work_dir: &Path,
    time_limit: Option<Duration>,
) -> Result<CallOutput> {
    let (program, args) = planner.command(domain_file, problem_file);
    info!(
        "invoking {} planner: {} {}",
        planner.name(),
        program.display(),
        args.join(" ")
    );

    let invocation = Command::new(&program)
        .args(&args)
        .current_dir(work_dir)
        .kill_on_drop(true)
        .output();

    let output = match time_limit {
        Some(limit) => timeout(limit, invocation)
            .await
            .map_err(|_| anyhow!("planner timed out after {}s", limit.as_secs()))?,
        None => invocation.await,
    }
    .with_context(|| format!("failed to execute planner '{}'", program.display()))?;

    let result = CallOutput {
        exit_status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    debug!("planner exited with status {:?}", result.exit_status);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lpg_command_arguments() {
        let planner = LpgPlanner::new(PlannerConfig::default()).unwrap();
        let (program, args) =
            planner.command(Path::new("/tmp/domain.pddl"), Path::new("/tmp/problem.pddl"));

        assert_eq!(program, PathBuf::from("lpg"));
        assert_eq!(
            args,
            vec![
                "-n",
                "1",
                "-f",
                "/tmp/problem.pddl",
                "-o",
                "/tmp/domain.pddl",
                "-out",
                "computed_plan.plan",
            ]
        );
    }

    #[test]
    fn test_lpg_command_search_phase_flags() {
        let planner = LpgPlanner::new(PlannerConfig {
            use_best_first: false,
            ..Default::default()
        })
        .unwrap();
        let (_, args) = planner.command(Path::new("d"), Path::new("p"));
        assert!(args.contains(&"-nobestfirst".to_string()));

        let planner = LpgPlanner::new(PlannerConfig {
            use_local_search: false,
            ..Default::default()
        })
        .unwrap();
        let (_, args) = planner.command(Path::new("d"), Path::new("p"));
        assert!(args.contains(&"-onlybestfirst".to_string()));
    }

    #[test]
    fn test_lpg_rejects_config_without_search_phase() {
        let result = LpgPlanner::new(PlannerConfig {
            use_local_search: false,
            use_best_first: false,
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_lpg_detects_solution_on_stdout() {
        let planner = LpgPlanner::new(PlannerConfig::default()).unwrap();
        let found = CallOutput {
            exit_status: Some(0),
            stdout: "...\nSolution number: 1\n".to_string(),
            stderr: String::new(),
        };
        let not_found = CallOutput {
            exit_status: Some(0),
            stdout: "goals can't be reached\n".to_string(),
            stderr: String::new(),
        };
        assert!(planner.solution_found(&found));
        assert!(!planner.solution_found(&not_found));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_run_planner_with_fake_planner() {
        let work_dir = std::env::temp_dir();
        let planner = FakePlanner {
            solution_file: PathBuf::from("unused.plan"),
        };
        let output = run_planner(
            &planner,
            Path::new("domain"),
            Path::new("problem"),
            &work_dir,
            Some(Duration::from_secs(5)),
        )
        .await
        .expect("fake planner runs");

        assert_eq!(output.exit_status, Some(0));
        assert!(planner.solution_found(&output));
    }
}
