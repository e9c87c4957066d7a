//! CLI entry point for the min-conflicts N-Queens solver

use clap::Parser;
use minqueens::io::cli::{Cli, QueensRunner};
use minqueens::io::configuration::LOG_ENV;

fn main() -> minqueens::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();

    let cli = Cli::parse();
    let mut runner = QueensRunner::new(cli)?;
    let stdout = std::io::stdout();
    runner.process(&mut stdout.lock()).map(|_| ())
}
