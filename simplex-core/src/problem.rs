//! Problem-level types: objective sense, solver settings, and results.
//!
//! The LP itself lives in [`crate::lp::LinearProgram`]; this module holds the
//! small value types that travel with it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::{Tolerance, DEFAULT_EPSILON};

/// Objective sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Sense {
    /// Maximize the objective (the default for a fresh LP)
    #[default]
    Maximize,
    /// Minimize the objective
    Minimize,
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Maximize => write!(f, "Maximize"),
            Sense::Minimize => write!(f, "Minimize"),
        }
    }
}

/// Solver settings and parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplexSettings {
    /// Tolerance used by every sign and equality test
    pub epsilon: f64,

    /// Maximum pivots per phase (None = iterate until termination).
    ///
    /// The entering/leaving rules do not rule out cycling on degenerate
    /// tableaus; a cap turns a would-be infinite loop into
    /// `LpError::IterationLimit`.
    pub max_pivots: Option<usize>,

    /// Print a per-pivot progress table to stdout
    pub verbose: bool,
}

impl Default for SimplexSettings {
    fn default() -> Self {
        // SIMPLEX_EPSILON overrides the comparison tolerance
        let epsilon = std::env::var("SIMPLEX_EPSILON")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|e| e.is_finite() && *e >= 0.0)
            .unwrap_or(DEFAULT_EPSILON);

        // SIMPLEX_MAX_PIVOTS=0 or unset means no cap
        let max_pivots = std::env::var("SIMPLEX_MAX_PIVOTS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0);

        Self {
            epsilon,
            max_pivots,
            verbose: false,
        }
    }
}

impl SimplexSettings {
    /// Create settings with verbose output enabled.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Self::default()
        }
    }

    /// Set the comparison tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Cap the number of pivots per phase.
    pub fn with_max_pivots(mut self, max_pivots: usize) -> Self {
        self.max_pivots = Some(max_pivots);
        self
    }

    /// Comparator built from `epsilon`.
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.epsilon)
    }
}

/// Terminal state of a solved LP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// Optimal basis reached; `solution()` is available
    Optimal,

    /// Phase II found an entering column with no positive entry
    Unbounded,

    /// Phase I could not drive the artificial objective to zero
    Infeasible,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "Optimal"),
            SolveStatus::Unbounded => write!(f, "Unbounded"),
            SolveStatus::Infeasible => write!(f, "Infeasible"),
        }
    }
}

/// Statistics from the most recent solve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveInfo {
    /// Pivots performed on the auxiliary LP (summed over Phase I runs)
    pub phase_one_pivots: usize,

    /// Pivots performed on the primal LP
    pub phase_two_pivots: usize,

    /// Wall time of the last `optimize()` call (milliseconds)
    pub solve_time_ms: u64,
}

impl SolveInfo {
    /// Total pivots across both phases.
    pub fn total_pivots(&self) -> usize {
        self.phase_one_pivots + self.phase_two_pivots
    }
}
