//! Error types for LP construction and solving.

use thiserror::Error;

/// Errors that can occur while building, solving, or querying an LP.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LpError {
    /// Malformed caller input (bad tableau text, out-of-range constraint index)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The LP was solved and has no optimal solution
    #[error("No solution: {0}")]
    NoSolution(String),

    /// A solution was requested before the LP was solved
    #[error("Solution unavailable: {0}")]
    SolutionUnavailable(String),

    /// The configured pivot cap was reached before the phase terminated
    #[error("Pivot limit reached: {pivots} pivots in {phase}")]
    IterationLimit {
        /// Pivots performed in the phase that hit the cap
        pivots: usize,
        /// Which phase was running
        phase: Phase,
    },
}

/// Simplex phase, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Feasibility search on the auxiliary LP
    One,
    /// Optimization of the primal LP
    Two,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::One => write!(f, "Phase I"),
            Phase::Two => write!(f, "Phase II"),
        }
    }
}

/// Result type for LP operations.
pub type LpResult<T> = Result<T, LpError>;
