use std::fmt;

use crate::board::Board;
use crate::pieces::Material;
use crate::solution::Solution;

/// Largest board edge the solver accepts. Together with the square-count
/// cap this keeps square indices in `u16` and coordinates in `i16`.
pub const MAX_DIM: u16 = 16384;

/// Largest number of squares (`u16` square indices).
pub const MAX_SQUARES: usize = 1 << 16;

/// A fully specified instance: the board and the piece multiset to place.
#[derive(Clone, Debug)]
pub struct Problem {
    pub board: Board,
    pub material: Material,
}

impl Problem {
    pub fn new(board: Board, material: Material) -> Self {
        Self { board, material }
    }

    /// Check the instance is well formed. Intended to be called by CLIs and
    /// drivers before any search work; [`crate::search::play`] calls it
    /// itself.
    ///
    /// A feasibility check is deliberately not part of this: a board with
    /// no valid placement is a normal run that reports zero solutions.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.board.rows == 0 || self.board.cols == 0 {
            return Err(SearchError::InvalidProblem {
                reason: format!(
                    "board dimensions must be positive, got {}x{}",
                    self.board.rows, self.board.cols
                ),
            });
        }

        if self.board.rows > MAX_DIM || self.board.cols > MAX_DIM {
            return Err(SearchError::InvalidProblem {
                reason: format!(
                    "board dimensions must be at most {MAX_DIM}, got {}x{}",
                    self.board.rows, self.board.cols
                ),
            });
        }

        if self.board.size() > MAX_SQUARES {
            return Err(SearchError::InvalidProblem {
                reason: format!(
                    "board has {} squares, at most {MAX_SQUARES} are supported",
                    self.board.size()
                ),
            });
        }

        let total = self.material.total();
        if total == 0 {
            return Err(SearchError::InvalidProblem {
                reason: "at least one piece is required".to_string(),
            });
        }

        if total > self.board.size() {
            return Err(SearchError::InvalidProblem {
                reason: format!(
                    "{total} pieces cannot fit on a board with {} squares",
                    self.board.size()
                ),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
/// Search budget used to bound runtime on explosive inputs.
///
/// Nodes are placement attempts; the budget is an external guard and never
/// changes results of runs that finish within it.
pub struct SearchLimits {
    pub max_nodes: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: 200_000_000,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Record every solution's placements (diagnostic; counts alone never
    /// need this).
    pub collect_solutions: bool,
    pub limits: SearchLimits,
}

/// Aggregate result of one full run, accumulated over every distinct
/// ordering of the multiset.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub num_solutions: u64,
    pub num_backtracks: u64,
    /// Distinct orderings of the multiset searched.
    pub num_orderings: u64,
    /// Placement attempts across all orderings.
    pub num_nodes: u64,
    /// Populated only when [`SearchOptions::collect_solutions`] is set.
    pub solutions: Vec<Solution>,
}

#[derive(Debug)]
/// Structured errors returned by the solver.
pub enum SearchError {
    /// The instance is malformed (bad dimensions or piece counts).
    InvalidProblem { reason: String },
    /// The node budget was exceeded; counters reflect progress so far.
    LimitExceeded {
        limit: u64,
        observed: u64,
        num_solutions: u64,
        num_backtracks: u64,
    },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidProblem { reason } => write!(f, "invalid problem: {reason}"),
            SearchError::LimitExceeded {
                limit,
                observed,
                num_solutions,
                num_backtracks,
            } => write!(
                f,
                "node budget exceeded (limit={limit}, observed={observed}); \
                 progress(solutions={num_solutions}, backtracks={num_backtracks})"
            ),
        }
    }
}

impl std::error::Error for SearchError {}
