//! One queen per row: the column chosen for each row of the board

use crate::algorithm::selection::RandomSelector;
use crate::io::configuration::MAX_BOARD_SIZE;
use crate::io::error::{PlacementDefect, QueensError, Result};
use std::fmt;

/// Column of the queen in each row, indexed by row
///
/// Every value lies in `[0, n)` where `n` is the number of rows. Columns and
/// diagonals may still be shared; that is what conflict counting measures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    /// Build a placement for an `n`-row board from caller-supplied columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `n` exceeds the supported board size, or
    /// `MalformedPlacement` if `columns` does not hold exactly `n` values or
    /// any value lies outside `[0, n)`
    pub fn new(n: usize, columns: Vec<usize>) -> Result<Self> {
        if n > MAX_BOARD_SIZE {
            return Err(QueensError::InvalidSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }

        if columns.len() != n {
            return Err(QueensError::MalformedPlacement {
                expected_len: n,
                reason: PlacementDefect::WrongLength {
                    actual: columns.len(),
                },
            });
        }

        if let Some((row, &column)) = columns.iter().enumerate().find(|&(_, &c)| c >= n) {
            return Err(QueensError::MalformedPlacement {
                expected_len: n,
                reason: PlacementDefect::OutOfRange { row, column },
            });
        }

        Ok(Self { columns })
    }

    /// Independently uniform column for each of `n` rows
    pub fn random(n: usize, selector: &mut RandomSelector) -> Self {
        let columns = (0..n).filter_map(|_| selector.column(n)).collect();
        Self { columns }
    }

    /// Board size, which is also the number of rows
    pub const fn size(&self) -> usize {
        self.columns.len()
    }

    /// True for the empty 0x0 board
    pub const fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column of the queen in `row`
    pub fn column(&self, row: usize) -> Option<usize> {
        self.columns.get(row).copied()
    }

    /// All columns in row order
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Move the queen in `row` to `column`
    ///
    /// Moves that would leave the board are ignored and reported as `false`.
    pub fn set(&mut self, row: usize, column: usize) -> bool {
        if column >= self.size() {
            return false;
        }
        self.columns.get_mut(row).map(|slot| *slot = column).is_some()
    }

    /// Consume the placement, returning its columns
    pub fn into_columns(self) -> Vec<usize> {
        self.columns
    }
}

impl AsRef<[usize]> for Placement {
    fn as_ref(&self) -> &[usize] {
        &self.columns
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (row, column) in self.columns.iter().enumerate() {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{column}")?;
        }
        write!(f, "]")
    }
}
