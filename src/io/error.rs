//! Error types for solver, validator and command-line operations

use std::fmt;
use std::path::PathBuf;

/// Structural defect found in a supplied placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementDefect {
    /// Placement does not hold one column per row
    WrongLength {
        /// Number of columns actually supplied
        actual: usize,
    },
    /// A row holds a column outside `[0, n)`
    OutOfRange {
        /// Row holding the offending value
        row: usize,
        /// The offending column value
        column: usize,
    },
}

impl fmt::Display for PlacementDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { actual } => write!(f, "got {actual} rows"),
            Self::OutOfRange { row, column } => {
                write!(f, "row {row} holds column {column}, which is off the board")
            }
        }
    }
}

/// Main error type for all solver operations
///
/// An exhausted search is not an error; see
/// [`SolveOutcome`](crate::algorithm::solver::SolveOutcome).
#[derive(Debug)]
pub enum QueensError {
    /// Board size outside the supported range
    InvalidSize {
        /// Requested board size
        size: usize,
        /// Largest supported board size
        max: usize,
    },

    /// Placement is structurally unusable for the declared board size
    ///
    /// Distinct from a placement that merely has conflicts.
    MalformedPlacement {
        /// Declared board size, and so the required number of rows
        expected_len: usize,
        /// What is wrong with the placement
        reason: PlacementDefect,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Placement text contained a token that is not a column number
    PlacementText {
        /// The token that failed to parse
        token: String,
        /// Parser error description
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for QueensError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size, max } => {
                write!(f, "Invalid board size {size} (supported range 0..={max})")
            }
            Self::MalformedPlacement {
                expected_len,
                reason,
            } => {
                write!(
                    f,
                    "Malformed placement for a {expected_len}x{expected_len} board: {reason}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PlacementText { token, reason } => {
                write!(f, "Could not read '{token}' as a column: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for QueensError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for solver results
pub type Result<T> = std::result::Result<T, QueensError>;

impl From<std::io::Error> for QueensError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QueensError {
    QueensError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the path and operation
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> QueensError {
    QueensError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
