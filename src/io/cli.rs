//! Command-line interface for solving and validating N-Queens boards

use crate::algorithm::selection::RandomSelector;
use crate::algorithm::solver::{MinConflictsSolver, SolveOutcome};
use crate::algorithm::validator::{ValidationReport, Verdict, validate_or_repair};
use crate::board::Placement;
use crate::io::configuration::{
    CORRECTED_OUTPUT_NAME, DEFAULT_ATTEMPTS, DEFAULT_BOARD_SIZE, DEFAULT_MAX_STEPS,
    DEFAULT_OUTPUT_NAME,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::io::render::render_board;
use crate::io::text::{parse_placement, read_placement_file, write_placement_file};
use clap::Parser;
use log::{debug, info};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "minqueens")]
#[command(
    author,
    version,
    about = "Solve or check N-Queens boards with the min-conflicts heuristic"
)]
/// Command-line arguments for the solver
pub struct Cli {
    /// Number of queens, which is also the board width
    #[arg(short = 'n', long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Placement to check, one column per row (e.g. "1 3 0 2")
    #[arg(short, long, conflicts_with = "input")]
    pub placement: Option<String>,

    /// File holding a placement to check, one column per line
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Save the resulting placement to this file or directory
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Random seed for reproducible runs (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum repair steps per solve
    #[arg(short, long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Fresh solves to try before giving up
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Run this many independent solves and report the success rate
    #[arg(short, long, conflicts_with_all = ["placement", "input"])]
    pub trials: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// How a command-line run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// A fresh solution was found
    Solved,
    /// The supplied placement was already a solution
    Valid,
    /// The supplied placement was invalid and a replacement was found
    Repaired,
    /// Every attempt ran out of steps
    NoSolution,
    /// A batch of trials completed
    Trials {
        /// Trials that found a solution
        solved: usize,
        /// Trials run
        total: usize,
    },
}

/// Runs one command-line request, writing results to a caller-chosen sink
pub struct QueensRunner {
    cli: Cli,
    solver: MinConflictsSolver,
    selector: RandomSelector,
    progress_manager: Option<ProgressManager>,
}

impl QueensRunner {
    /// Create a runner from parsed arguments
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero step budget or zero attempts
    pub fn new(cli: Cli) -> Result<Self> {
        let solver = MinConflictsSolver::new(cli.max_steps)?;
        if cli.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &cli.attempts,
                &"at least one attempt is required",
            ));
        }

        let selector = cli
            .seed
            .map_or_else(RandomSelector::from_entropy, RandomSelector::new);
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Ok(Self {
            cli,
            solver,
            selector,
            progress_manager,
        })
    }

    /// Carry out the request described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error for malformed placements, unreadable input,
    /// unwritable output or an oversized board
    pub fn process(&mut self, out: &mut impl Write) -> Result<RunStatus> {
        let status = if let Some(trials) = self.cli.trials {
            self.run_trials(trials, out)?
        } else if let Some(candidate) = self.read_candidate()? {
            self.check_candidate(&candidate, out)?
        } else {
            writeln!(out, "Solving {} queens...", self.cli.size)?;
            match self.solve_with_attempts(self.cli.attempts)? {
                Some(solution) => {
                    writeln!(out, "Solution found!")?;
                    self.report_solution(&solution, DEFAULT_OUTPUT_NAME, out)?;
                    RunStatus::Solved
                }
                None => {
                    writeln!(out, "No solution found within the given steps.")?;
                    RunStatus::NoSolution
                }
            }
        };

        debug!("run finished: {status:?}");
        Ok(status)
    }

    fn read_candidate(&self) -> Result<Option<Placement>> {
        if let Some(ref text) = self.cli.placement {
            return parse_placement(text, self.cli.size).map(Some);
        }
        if let Some(ref path) = self.cli.input {
            return read_placement_file(path, self.cli.size).map(Some);
        }
        Ok(None)
    }

    fn check_candidate(
        &mut self,
        candidate: &Placement,
        out: &mut impl Write,
    ) -> Result<RunStatus> {
        let verdict = validate_or_repair(candidate, &self.solver, &mut self.selector)?;
        let report = verdict.report();

        writeln!(out, "Supplied placement: {candidate}")?;
        if let Some(board) = render_board(candidate, &report.conflicted_rows) {
            write!(out, "{board}")?;
        }
        Self::write_report(report, out)?;

        let repaired = match verdict {
            Verdict::Valid(_) => {
                writeln!(out, "Your placement is a solution.")?;
                return Ok(RunStatus::Valid);
            }
            Verdict::Repaired { solution, .. } => Some(solution),
            // The first attempt was spent inside validate_or_repair
            Verdict::Unrepaired { .. } => {
                self.solve_with_attempts(self.cli.attempts.saturating_sub(1))?
            }
        };

        if let Some(solution) = repaired {
            writeln!(out, "Corrected solution found!")?;
            self.report_solution(&solution, CORRECTED_OUTPUT_NAME, out)?;
            Ok(RunStatus::Repaired)
        } else {
            writeln!(out, "Could not find a corrected solution within the given steps.")?;
            Ok(RunStatus::NoSolution)
        }
    }

    fn write_report(report: &ValidationReport, out: &mut impl Write) -> Result<()> {
        writeln!(
            out,
            "Conflicting pairs: {} (raw score {})",
            report.conflicting_pairs, report.conflict_count
        )?;
        Ok(())
    }

    /// Independent solves from fresh random placements until one succeeds
    fn solve_with_attempts(&mut self, attempts: usize) -> Result<Option<Placement>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(attempts, "attempts");
        }

        let mut found = None;
        for attempt in 1..=attempts {
            let outcome = self.solver.solve(self.cli.size, &mut self.selector)?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_run(outcome.is_solved());
            }
            if let Some(placement) = outcome.into_placement() {
                info!("attempt {attempt} of {attempts} succeeded");
                found = Some(placement);
                break;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }
        Ok(found)
    }

    fn run_trials(&mut self, trials: usize, out: &mut impl Write) -> Result<RunStatus> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(trials, "trials");
        }

        let mut solved = 0;
        let mut solved_steps = 0;
        for _ in 0..trials {
            let outcome = self.solver.solve(self.cli.size, &mut self.selector)?;
            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_run(outcome.is_solved());
            }
            if let SolveOutcome::Solved { steps, .. } = outcome {
                solved += 1;
                solved_steps += steps;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let rate = if trials == 0 {
            0.0
        } else {
            100.0 * solved as f64 / trials as f64
        };
        writeln!(
            out,
            "Solved {solved}/{trials} boards of size {} ({rate:.1}%)",
            self.cli.size
        )?;
        if solved > 0 {
            writeln!(
                out,
                "Mean steps per solution: {:.1}",
                solved_steps as f64 / solved as f64
            )?;
        }

        Ok(RunStatus::Trials {
            solved,
            total: trials,
        })
    }

    fn report_solution(
        &self,
        solution: &Placement,
        default_name: &str,
        out: &mut impl Write,
    ) -> Result<()> {
        if let Some(board) = render_board(solution, &[]) {
            write!(out, "{board}")?;
        }
        writeln!(out, "{solution}")?;

        if let Some(ref target) = self.cli.output {
            let path = Self::resolve_output_path(target, default_name);
            write_placement_file(&path, solution)?;
            writeln!(out, "Saved to {}", path.display())?;
        }

        Ok(())
    }

    /// Directories receive the default file name; anything else is used as is
    pub fn resolve_output_path(target: &Path, default_name: &str) -> PathBuf {
        if target.is_dir() {
            target.join(default_name)
        } else {
            target.to_path_buf()
        }
    }
}
