//! Solver constants and runtime configuration defaults

// Step budget used when the caller does not choose one
/// Default maximum repair iterations per solve
pub const DEFAULT_MAX_STEPS: usize = 1000;

/// Board size used when none is given on the command line
pub const DEFAULT_BOARD_SIZE: usize = 8;

// Safety limit to prevent excessive allocation and O(N²) scoring blowups
/// Maximum allowed board size
pub const MAX_BOARD_SIZE: usize = 10_000;

/// Default number of independent solve attempts
pub const DEFAULT_ATTEMPTS: usize = 1;

// Output settings
/// File name used when saving a freshly solved placement
pub const DEFAULT_OUTPUT_NAME: &str = "n_queens_solution.txt";
/// File name used when saving a placement that replaced an invalid one
pub const CORRECTED_OUTPUT_NAME: &str = "corrected_n_queens_solution.txt";

// Boards wider than this are summarised instead of drawn
/// Largest board rendered square by square
pub const MAX_RENDERED_SIZE: usize = 64;

// Progress bar display settings
/// Minimum number of runs before a progress bar is shown
pub const PROGRESS_THRESHOLD: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "MINQUEENS_LOG";
