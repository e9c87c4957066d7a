use crate::{
    algorithm::selection::RandomSelector,
    board::Placement,
    board::conflicts::{conflicted_rows, conflicts_at, is_solution, total_conflicts},
    io::configuration::{DEFAULT_MAX_STEPS, MAX_BOARD_SIZE},
    io::error::{QueensError, Result, invalid_parameter},
};
use log::{debug, trace};

/// Terminal state of a min-conflicts search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every queen is conflict-free
    Solved {
        /// The conflict-free placement
        placement: Placement,
        /// Repair moves made before the solution was recognised
        steps: usize,
    },
    /// The step budget ran out first
    ///
    /// A normal result of an incomplete heuristic. The unfinished placement
    /// is deliberately not returned.
    Exhausted {
        /// Steps consumed, always the full budget
        steps: usize,
        /// Raw conflict score of the abandoned placement
        remaining_conflicts: usize,
    },
}

impl SolveOutcome {
    /// True when a solution was found
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Borrow the solution, if any
    pub const fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Solved { placement, .. } => Some(placement),
            Self::Exhausted { .. } => None,
        }
    }

    /// Take the solution, if any
    pub fn into_placement(self) -> Option<Placement> {
        match self {
            Self::Solved { placement, .. } => Some(placement),
            Self::Exhausted { .. } => None,
        }
    }

    /// Steps consumed by the search
    pub const fn steps(&self) -> usize {
        match self {
            Self::Solved { steps, .. } | Self::Exhausted { steps, .. } => *steps,
        }
    }
}

/// Randomized min-conflicts repair search for N-Queens
///
/// Starts from a uniformly random placement and repeatedly moves a randomly
/// chosen conflicted queen to a column of minimum conflict, breaking ties
/// at random. Holds no state between solves besides its step budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinConflictsSolver {
    max_steps: usize,
}

impl Default for MinConflictsSolver {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

impl MinConflictsSolver {
    /// Create a solver with the given step budget
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `max_steps` is zero
    pub fn new(max_steps: usize) -> Result<Self> {
        if max_steps == 0 {
            return Err(invalid_parameter(
                "max_steps",
                &max_steps,
                &"step budget must be positive",
            ));
        }
        Ok(Self { max_steps })
    }

    /// Maximum repair iterations per solve
    pub const fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Search for a conflict-free placement of `n` queens
    ///
    /// Each call starts over from a fresh random placement drawn from
    /// `selector`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `n` exceeds the supported board size.
    /// Running out of steps is reported as [`SolveOutcome::Exhausted`].
    pub fn solve(&self, n: usize, selector: &mut RandomSelector) -> Result<SolveOutcome> {
        if n > MAX_BOARD_SIZE {
            return Err(QueensError::InvalidSize {
                size: n,
                max: MAX_BOARD_SIZE,
            });
        }

        debug!("solving n={n} within {} steps", self.max_steps);
        let mut placement = Placement::random(n, selector);

        for step in 0..self.max_steps {
            if is_solution(placement.columns()) {
                debug!("solved n={n} after {step} steps");
                return Ok(SolveOutcome::Solved {
                    placement,
                    steps: step,
                });
            }

            let conflicted = conflicted_rows(placement.columns());
            let Some(&row) = selector.choose(&conflicted) else {
                return Ok(SolveOutcome::Solved {
                    placement,
                    steps: step,
                });
            };

            if let Some(column) = Self::min_conflict_column(&placement, row, selector) {
                trace!("step {step}: row {row} -> column {column}");
                let moved = placement.set(row, column);
                debug_assert!(moved, "row {row} rejected on-board column {column}");
            }
        }

        let remaining_conflicts = total_conflicts(placement.columns());
        debug!(
            "exhausted {} steps on n={n} with raw score {remaining_conflicts}",
            self.max_steps
        );
        Ok(SolveOutcome::Exhausted {
            steps: self.max_steps,
            remaining_conflicts,
        })
    }

    /// Column minimising the conflicts of `row`, ties broken uniformly
    fn min_conflict_column(
        placement: &Placement,
        row: usize,
        selector: &mut RandomSelector,
    ) -> Option<usize> {
        let columns = placement.columns();
        let counts: Vec<usize> = (0..placement.size())
            .map(|column| conflicts_at(columns, row, column))
            .collect();

        let min_count = counts.iter().min().copied()?;
        let best: Vec<usize> = counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count == min_count)
            .map(|(column, _)| column)
            .collect();

        selector.choose(&best).copied()
    }
}

/// Solve `n` queens with a one-off solver of budget `max_steps`
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero budget or `InvalidSize` for an
/// oversized board
pub fn solve(n: usize, max_steps: usize, selector: &mut RandomSelector) -> Result<SolveOutcome> {
    MinConflictsSolver::new(max_steps)?.solve(n, selector)
}
