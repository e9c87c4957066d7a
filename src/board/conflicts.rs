//! Constraint violation counting for queen placements
//!
//! Every function takes the raw column slice so a caller can score any
//! sequence of columns, not only a checked [`Placement`](super::Placement).
//! Column values outside `[0, n)` are a caller error and produce
//! meaningless counts rather than panics.

use bitvec::prelude::*;

/// True if queens at `(row_a, col_a)` and `(row_b, col_b)` attack each other
const fn attacks(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
    col_a == col_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}

/// Conflicts the queen in `row` would have if it stood in `column`
///
/// Counts every other row whose queen shares that column or a diagonal.
/// The row's own current queen is never compared against itself.
pub fn conflicts_at(columns: &[usize], row: usize, column: usize) -> usize {
    columns
        .iter()
        .enumerate()
        .filter(|&(other, &other_col)| other != row && attacks(row, column, other, other_col))
        .count()
}

/// Conflicts of the queen currently in `row`
///
/// Rows beyond the board hold no queen and have no conflicts.
pub fn conflicts_for_row(columns: &[usize], row: usize) -> usize {
    columns
        .get(row)
        .map_or(0, |&column| conflicts_at(columns, row, column))
}

/// Sum of per-row conflicts over the whole board
///
/// Each attacking pair is seen from both ends, so this score is exactly twice
/// [`conflicting_pairs`]. The solver compares candidates by this raw score;
/// use [`conflicting_pairs`] when reporting to a person.
pub fn total_conflicts(columns: &[usize]) -> usize {
    (0..columns.len())
        .map(|row| conflicts_for_row(columns, row))
        .sum()
}

/// Number of unordered queen pairs that attack each other
pub fn conflicting_pairs(columns: &[usize]) -> usize {
    columns
        .iter()
        .enumerate()
        .map(|(row, &column)| {
            columns
                .iter()
                .enumerate()
                .skip(row + 1)
                .filter(|&(other, &other_col)| attacks(row, column, other, other_col))
                .count()
        })
        .sum()
}

/// Rows whose queen is attacked by at least one other queen, in row order
pub fn conflicted_rows(columns: &[usize]) -> Vec<usize> {
    (0..columns.len())
        .filter(|&row| conflicts_for_row(columns, row) > 0)
        .collect()
}

/// True iff no two queens share a column or diagonal
///
/// Equivalent to `total_conflicts(columns) == 0` in a single pass, using one
/// occupancy bit per column and per diagonal.
pub fn is_solution(columns: &[usize]) -> bool {
    let n = columns.len();
    let diagonal_count = (2 * n).saturating_sub(1);
    let mut used_columns = bitvec![0; n];
    let mut used_diagonals = bitvec![0; diagonal_count];
    let mut used_anti_diagonals = bitvec![0; diagonal_count];

    for (row, &column) in columns.iter().enumerate() {
        if column >= n {
            // Off-board queens cannot share a tracked line; fall back to pairwise
            return total_conflicts(columns) == 0;
        }

        // row - column + (n - 1) and row + column both lie in [0, 2n - 1)
        let diagonal = row + (n - 1) - column;
        let anti_diagonal = row + column;

        let already_used = [
            used_columns.replace(column, true),
            used_diagonals.replace(diagonal, true),
            used_anti_diagonals.replace(anti_diagonal, true),
        ];
        if already_used.contains(&true) {
            return false;
        }
    }

    true
}
