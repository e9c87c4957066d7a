use crate::{
    algorithm::selection::RandomSelector,
    algorithm::solver::{MinConflictsSolver, SolveOutcome},
    board::Placement,
    board::conflicts::{conflicted_rows, conflicting_pairs, total_conflicts},
    io::error::Result,
};
use log::debug;

/// Conflict summary for a caller-supplied placement
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    /// Raw conflict score, counting each attacking pair from both ends
    pub conflict_count: usize,
    /// Number of distinct attacking pairs, suitable for display
    pub conflicting_pairs: usize,
    /// Rows whose queen is under attack
    pub conflicted_rows: Vec<usize>,
    /// True iff `conflict_count == 0`
    pub is_valid: bool,
}

/// Classify a placement as valid or invalid
pub fn validate(placement: &Placement) -> ValidationReport {
    let columns = placement.columns();
    let conflict_count = total_conflicts(columns);

    ValidationReport {
        conflict_count,
        conflicting_pairs: conflicting_pairs(columns),
        conflicted_rows: conflicted_rows(columns),
        is_valid: conflict_count == 0,
    }
}

/// Check structure first, then classify raw columns for an `n`-row board
///
/// # Errors
///
/// Returns `InvalidSize` for an oversized board or `MalformedPlacement` if the
/// columns do not form a placement for `n` rows; no conflict count is
/// produced in either case
pub fn validate_columns(n: usize, columns: &[usize]) -> Result<ValidationReport> {
    let placement = Placement::new(n, columns.to_vec())?;
    Ok(validate(&placement))
}

/// Result of validating a placement and replacing it when invalid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The supplied placement already solves the board
    Valid(ValidationReport),
    /// The supplied placement had conflicts; a fresh solution was found
    Repaired {
        /// Report on the supplied placement
        report: ValidationReport,
        /// Independent conflict-free placement of the same size
        solution: Placement,
    },
    /// The supplied placement had conflicts and the solver ran out of steps
    Unrepaired {
        /// Report on the supplied placement
        report: ValidationReport,
        /// Steps the solver spent before giving up
        steps: usize,
    },
}

impl Verdict {
    /// Report on the placement originally supplied
    pub const fn report(&self) -> &ValidationReport {
        match self {
            Self::Valid(report)
            | Self::Repaired { report, .. }
            | Self::Unrepaired { report, .. } => report,
        }
    }
}

/// Validate `placement`, solving the same board from scratch when invalid
///
/// The invalid placement is not used as a starting point; the solver always
/// begins from a fresh random placement.
///
/// # Errors
///
/// Propagates `InvalidSize` from the solver for oversized boards
pub fn validate_or_repair(
    placement: &Placement,
    solver: &MinConflictsSolver,
    selector: &mut RandomSelector,
) -> Result<Verdict> {
    let report = validate(placement);
    if report.is_valid {
        debug!("placement of size {} is valid", placement.size());
        return Ok(Verdict::Valid(report));
    }

    debug!(
        "placement of size {} has {} conflicting pairs, solving afresh",
        placement.size(),
        report.conflicting_pairs
    );

    Ok(match solver.solve(placement.size(), selector)? {
        SolveOutcome::Solved { placement, .. } => Verdict::Repaired {
            report,
            solution: placement,
        },
        SolveOutcome::Exhausted { steps, .. } => Verdict::Unrepaired { report, steps },
    })
}
