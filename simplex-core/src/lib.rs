//! Simplex: a two-phase dense-tableau linear programming solver
//!
//! This library solves linear programs in equality form
//!
//! ```text
//! max / min   z + c·x
//! subject to  a_i·x = b_i,   x ≥ 0
//! ```
//!
//! with the textbook two-phase simplex method on a dense tableau. It
//! provides:
//!
//! - **Tableau construction**: objective and equality rows, with `≥` / `≤`
//!   helpers that append slack / surplus columns
//! - **Phase I**: an auxiliary LP that decides feasibility and seeds a basis
//! - **Phase II**: pivoting to an optimal or unbounded terminal state
//! - **Solution decoding** from the final basis
//! - **Dual construction** by transposing the tableau
//!
//! # Tableau layout
//!
//! Row 0 is `[z, c1, …, cn]`, rows 1.. are `[b_i, a_i1, …, a_in]`. Every row
//! has the same width, and width only grows.
//!
//! # Example
//!
//! ```
//! use simplex_core::{LinearProgram, Sense, SolveStatus};
//!
//! // min 3x1 + 2x2  s.t.  2x1 + x2 + x3 = 6,  x1 + x2 + x4 = 4
//! let mut lp = LinearProgram::new();
//! lp.set_objective(Sense::Minimize, 0.0, &[3.0, 2.0, 0.0, 0.0]);
//! lp.add_constraint_eq(6.0, &[2.0, 1.0, 1.0, 0.0]);
//! lp.add_constraint_eq(4.0, &[1.0, 1.0, 0.0, 1.0]);
//!
//! assert_eq!(lp.optimize()?, SolveStatus::Optimal);
//! assert_eq!(lp.objective_value(), 10.0);
//! assert_eq!(lp.solution()?, vec![2.0, 2.0, 0.0, 0.0]);
//! # Ok::<(), simplex_core::LpError>(())
//! ```
//!
//! # Numerics
//!
//! Every sign and equality test goes through [`Tolerance`], built from
//! [`SimplexSettings::epsilon`] (default 2^-33). Pivot selection uses the
//! leftmost improving column and the first minimum ratio, which can cycle on
//! degenerate problems; [`SimplexSettings::max_pivots`] bounds each phase.

#![warn(clippy::all)]

pub mod error;
pub mod lp;
pub mod problem;
pub mod simplex;
pub mod solution;
pub mod tableau;
pub mod util;

// Re-export main types
pub use error::{LpError, LpResult, Phase};
pub use lp::LinearProgram;
pub use problem::{Sense, SimplexSettings, SolveInfo, SolveStatus};
pub use tableau::Tableau;
pub use util::{Tolerance, DEFAULT_EPSILON};
