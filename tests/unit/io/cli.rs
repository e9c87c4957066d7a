//! Tests for command-line parsing and request handling

#[cfg(test)]
mod tests {
    use clap::Parser;
    use minqueens::QueensError;
    use minqueens::io::cli::{Cli, QueensRunner, RunStatus};
    use minqueens::io::configuration::{
        CORRECTED_OUTPUT_NAME, DEFAULT_ATTEMPTS, DEFAULT_BOARD_SIZE, DEFAULT_MAX_STEPS,
        DEFAULT_OUTPUT_NAME,
    };
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn run(args: &[&str]) -> (minqueens::Result<RunStatus>, String) {
        let cli = Cli::parse_from(std::iter::once("program").chain(args.iter().copied()));
        let mut out = Vec::new();
        let status = QueensRunner::new(cli).and_then(|mut runner| runner.process(&mut out));
        (status, String::from_utf8(out).expect("utf-8 output"))
    }

    // Tests CLI parsing with no arguments
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.size, DEFAULT_BOARD_SIZE);
        assert_eq!(cli.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(cli.attempts, DEFAULT_ATTEMPTS);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.trials, None);
        assert_eq!(cli.placement, None);
        assert_eq!(cli.input, None);
        assert!(cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "program", "-n", "6", "-s", "9", "-m", "50", "-a", "3", "-p", "1 3 5 0 2 4", "-q",
        ]);

        assert_eq!(cli.size, 6);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.max_steps, 50);
        assert_eq!(cli.attempts, 3);
        assert_eq!(cli.placement.as_deref(), Some("1 3 5 0 2 4"));
        assert!(!cli.should_show_progress());
    }

    // Tests mutually exclusive inputs are refused by the parser
    // Verified by removing conflicts_with attributes
    #[test]
    fn test_cli_conflicting_inputs() {
        assert!(Cli::try_parse_from(["program", "-p", "0", "-i", "board.txt"]).is_err());
        assert!(Cli::try_parse_from(["program", "-t", "5", "-p", "0"]).is_err());
    }

    // Tests invalid budgets are rejected before running
    // Verified by accepting zero attempts
    #[test]
    fn test_runner_rejects_zero_budgets() {
        let (status, _) = run(&["-m", "0"]);
        assert!(matches!(status, Err(QueensError::InvalidParameter { parameter: "max_steps", .. })));

        let (status, _) = run(&["-a", "0"]);
        assert!(matches!(status, Err(QueensError::InvalidParameter { parameter: "attempts", .. })));
    }

    // Tests solving prints the board and the placement
    // Verified by skipping the placement line
    #[test]
    fn test_solve_mode() {
        let (status, out) = run(&["-n", "1", "-s", "1", "-q"]);

        assert_eq!(status.expect("solve succeeds"), RunStatus::Solved);
        assert!(out.contains("Solution found!"));
        assert!(out.contains("Q\n"));
        assert!(out.contains("[0]"));
    }

    // Tests an unsolvable board reports failure rather than a placement
    // Verified by reporting the exhausted placement
    #[test]
    fn test_solve_mode_exhausted() {
        let (status, out) = run(&["-n", "3", "-s", "1", "-m", "20", "-a", "3", "-q"]);

        assert_eq!(status.expect("run completes"), RunStatus::NoSolution);
        assert!(out.contains("No solution found"));
    }

    // Tests a correct placement is confirmed
    // Verified by always solving afresh
    #[test]
    fn test_check_valid_placement() {
        let (status, out) = run(&["-n", "4", "-p", "2 0 3 1", "-q"]);

        assert_eq!(status.expect("check succeeds"), RunStatus::Valid);
        assert!(out.contains("Conflicting pairs: 0 (raw score 0)"));
        assert!(out.contains("Your placement is a solution."));
    }

    // Tests a placement of the wrong length is an error, not a verdict
    // Verified by padding short placements
    #[test]
    fn test_check_malformed_placement() {
        let (status, out) = run(&["-n", "4", "-p", "0 1", "-q"]);

        assert!(matches!(status, Err(QueensError::MalformedPlacement { .. })));
        assert!(out.is_empty());
    }

    // Tests an invalid placement on an unsolvable board cannot be corrected
    // Verified by treating the supplied placement as a correction
    #[test]
    fn test_check_unrepairable_placement() {
        let (status, out) = run(&["-n", "3", "-p", "0 0 0", "-s", "2", "-m", "10", "-q"]);

        assert_eq!(status.expect("check completes"), RunStatus::NoSolution);
        assert!(out.contains("Conflicting pairs: 3 (raw score 6)"));
        assert!(out.contains("Q . . *"));
        assert!(out.contains("Could not find a corrected solution"));
    }

    // Tests a corrected placement is saved under the corrected name
    // Verified by using the fresh-solve name for corrections
    #[test]
    fn test_check_repairs_into_directory() {
        let dir = TempDir::new().expect("temp dir");
        let input = dir.path().join("board.txt");
        std::fs::write(&input, "0\n0\n0\n0\n0\n0\n0\n0\n").expect("writable temp dir");
        let input_arg = input.to_string_lossy().to_string();
        let dir_arg = dir.path().to_string_lossy().to_string();

        let (status, out) = run(&[
            "-n", "8", "-i", &input_arg, "-o", &dir_arg, "-s", "5", "-a", "20", "-q",
        ]);

        assert_eq!(status.expect("check succeeds"), RunStatus::Repaired);
        assert!(out.contains("Corrected solution found!"));

        let saved = std::fs::read_to_string(dir.path().join(CORRECTED_OUTPUT_NAME))
            .expect("corrected placement saved");
        assert_eq!(saved.lines().count(), 8);
    }

    // Tests trial mode counts successes over independent solves
    // Verified by stopping trials at the first success
    #[test]
    fn test_trials_mode() {
        let (status, out) = run(&["-n", "1", "-t", "5", "-s", "3", "-q"]);
        assert_eq!(
            status.expect("trials complete"),
            RunStatus::Trials { solved: 5, total: 5 }
        );
        assert!(out.contains("Solved 5/5 boards of size 1 (100.0%)"));

        let (status, _) = run(&["-n", "2", "-t", "4", "-m", "5", "-s", "3", "-q"]);
        assert_eq!(
            status.expect("trials complete"),
            RunStatus::Trials { solved: 0, total: 4 }
        );
    }

    // Tests directories receive a default name and files are used as given
    // Verified by always joining the default name
    #[test]
    fn test_resolve_output_path() {
        let dir = TempDir::new().expect("temp dir");

        assert_eq!(
            QueensRunner::resolve_output_path(dir.path(), DEFAULT_OUTPUT_NAME),
            dir.path().join(DEFAULT_OUTPUT_NAME)
        );

        let file = dir.path().join("mine.txt");
        assert_eq!(QueensRunner::resolve_output_path(&file, DEFAULT_OUTPUT_NAME), file);
        assert_eq!(
            QueensRunner::resolve_output_path(Path::new("out.txt"), DEFAULT_OUTPUT_NAME),
            PathBuf::from("out.txt")
        );
    }
}
