//! Plain-text placement format: one column number per row
//!
//! Numbers may be separated by any whitespace, so `0 1 2 3` typed on one line
//! and a file with one number per line read the same way.

use crate::board::Placement;
use crate::io::error::{QueensError, Result, file_system_error};
use std::fs;
use std::path::Path;

/// Parse whitespace-separated column numbers for an `n`-row board
///
/// # Errors
///
/// Returns `PlacementText` for a token that is not a non-negative integer,
/// `InvalidSize` for an oversized board, or `MalformedPlacement` if the
/// numbers do not fit an `n`-row board
pub fn parse_placement(text: &str, n: usize) -> Result<Placement> {
    let columns = text
        .split_whitespace()
        .map(|token| {
            token
                .parse::<usize>()
                .map_err(|err| QueensError::PlacementText {
                    token: token.to_string(),
                    reason: err.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Placement::new(n, columns)
}

/// Format a placement with one column number per line
pub fn format_placement(placement: &Placement) -> String {
    placement
        .columns()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a placement for an `n`-row board from a text file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read, otherwise the errors of
/// [`parse_placement`]
pub fn read_placement_file(path: &Path, n: usize) -> Result<Placement> {
    let text = fs::read_to_string(path).map_err(|err| file_system_error(path, "read", err))?;
    parse_placement(&text, n)
}

/// Write a placement to a text file, one column per line
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_placement_file(path: &Path, placement: &Placement) -> Result<()> {
    let mut text = format_placement(placement);
    text.push('\n');
    fs::write(path, text).map_err(|err| file_system_error(path, "write", err))
}
