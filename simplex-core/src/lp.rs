//! The linear program container and its solve lifecycle.
//!
//! A [`LinearProgram`] owns one [`Tableau`], the objective sense, and a
//! small tagged solve state. Mutating the LP returns it to the unsolved
//! state; [`LinearProgram::optimize`] drives it to a terminal
//! [`SolveStatus`], after which the tableau holds the final basis.

use std::str::FromStr;
use std::time::Instant;

use log::{debug, info};

use crate::error::{LpError, LpResult};
use crate::problem::{Sense, SimplexSettings, SolveInfo, SolveStatus};
use crate::simplex::{self, phase_one, pivot};
use crate::solution;
use crate::tableau::Tableau;
use crate::util::logging;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LpState {
    Unsolved,
    /// Phase I has run on its own; the verdict is kept across `optimize`
    FeasibilityChecked { feasible: bool },
    Solved(SolveStatus),
}

/// A linear program in equality form over a dense tableau.
///
/// # Example
///
/// ```
/// use simplex_core::{LinearProgram, Sense, SolveStatus};
///
/// // max 3x1 + 5x2  s.t.  5x2 = 50,  100 >= 9x1 + 2x2
/// let mut lp = LinearProgram::new();
/// lp.set_objective(Sense::Maximize, 0.0, &[3.0, 5.0]);
/// lp.add_constraint_eq(50.0, &[0.0, 5.0]);
/// lp.add_constraint_geq(100.0, &[9.0, 2.0]);
///
/// assert_eq!(lp.optimize()?, SolveStatus::Optimal);
/// let x = lp.solution()?;
/// assert!((x[1] - 10.0).abs() < 1e-9);
/// # Ok::<(), simplex_core::LpError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LinearProgram {
    tableau: Tableau,
    sense: Sense,
    state: LpState,
    settings: SimplexSettings,
    info: SolveInfo,
}

impl Default for LinearProgram {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearProgram {
    /// An empty LP (width 0, no constraints, maximize) with default settings.
    pub fn new() -> Self {
        Self::with_settings(SimplexSettings::default())
    }

    pub fn with_settings(settings: SimplexSettings) -> Self {
        Self::from_tableau(Tableau::new(), settings)
    }

    /// Build an LP from raw tableau rows, row 0 being the objective.
    /// Ragged rows are zero-padded.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self::from_tableau(Tableau::from_rows(rows), SimplexSettings::default())
    }

    pub fn from_tableau(tableau: Tableau, settings: SimplexSettings) -> Self {
        Self {
            tableau,
            sense: Sense::default(),
            state: LpState::Unsolved,
            settings,
            info: SolveInfo::default(),
        }
    }

    pub fn sense(&self) -> Sense {
        self.sense
    }

    pub fn settings(&self) -> &SimplexSettings {
        &self.settings
    }

    /// Statistics of the most recent solve (zeroed by any mutation).
    pub fn info(&self) -> &SolveInfo {
        &self.info
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Row 0 of the tableau, objective constant first.
    pub fn objective_function(&self) -> &[f64] {
        self.tableau.objective()
    }

    pub fn width(&self) -> usize {
        self.tableau.width()
    }

    pub fn num_constraints(&self) -> usize {
        self.tableau.num_constraints()
    }

    /// Constraint rows as `[b, a1, …, an]`.
    pub fn list_constraints(&self) -> &[Vec<f64>] {
        self.tableau.constraints()
    }

    fn reset(&mut self) {
        self.state = LpState::Unsolved;
        self.info = SolveInfo::default();
    }

    /// Set the objective sense and row 0 to `[z, coefficients…]`.
    pub fn set_objective(&mut self, sense: Sense, z: f64, coefficients: &[f64]) {
        self.sense = sense;
        self.tableau.set_objective(z, coefficients);
        self.reset();
    }

    /// Change the objective sense, keeping row 0.
    pub fn set_sense(&mut self, sense: Sense) {
        self.sense = sense;
        self.reset();
    }

    /// Add `b = a·x`. A negative `b` flips the sign of the whole row.
    pub fn add_constraint_eq(&mut self, b: f64, coefficients: &[f64]) {
        self.tableau
            .add_constraint_eq(b, coefficients, self.settings.tolerance());
        self.reset();
    }

    /// Add `b >= a·x` through a new slack column.
    pub fn add_constraint_geq(&mut self, b: f64, coefficients: &[f64]) {
        self.tableau
            .add_constraint_geq(b, coefficients, self.settings.tolerance());
        self.reset();
    }

    /// Add `b <= a·x` through a new surplus column.
    pub fn add_constraint_leq(&mut self, b: f64, coefficients: &[f64]) {
        self.tableau
            .add_constraint_leq(b, coefficients, self.settings.tolerance());
        self.reset();
    }

    /// Remove constraint `index` (0-based over the constraint rows).
    pub fn remove_constraint(&mut self, index: usize) -> LpResult<()> {
        self.tableau.remove_constraint(index)?;
        self.reset();
        Ok(())
    }

    pub fn clear_constraints(&mut self) {
        self.tableau.clear_constraints();
        self.reset();
    }

    /// Solve the LP with the two-phase simplex method.
    ///
    /// On an already solved LP this returns the recorded status without
    /// touching the tableau. If the pivot cap is hit the error is returned
    /// and both the solve state and the tableau are left as they were, so a
    /// retry starts from the same LP.
    pub fn optimize(&mut self) -> LpResult<SolveStatus> {
        if let LpState::Solved(status) = self.state {
            debug!("optimize: already solved ({})", status);
            return Ok(status);
        }

        let start = Instant::now();
        if self.settings.verbose {
            logging::print_banner(self.tableau.num_constraints(), self.tableau.width());
        }

        let known = match self.state {
            LpState::FeasibilityChecked { feasible } => Some(feasible),
            _ => None,
        };
        // Pivot a working copy; it replaces the tableau only on success
        let mut working = self.tableau.clone();
        let outcome = simplex::solve(&mut working, self.sense, known, &self.settings)?;
        self.tableau = working;

        self.info.phase_one_pivots += outcome.phase_one_pivots;
        self.info.phase_two_pivots = outcome.phase_two_pivots;
        self.info.solve_time_ms = start.elapsed().as_millis() as u64;
        self.state = LpState::Solved(outcome.status);

        info!(
            "{} {} LP ({} constraints, width {}): {} after {} pivots",
            self.sense,
            if outcome.feasible { "feasible" } else { "infeasible" },
            self.tableau.num_constraints(),
            self.tableau.width(),
            outcome.status,
            self.info.total_pivots()
        );
        if self.settings.verbose {
            logging::print_summary(
                outcome.status,
                self.tableau.objective_value(),
                self.info.solve_time_ms,
            );
        }

        Ok(outcome.status)
    }

    /// Whether the constraints admit a solution.
    ///
    /// The first call on an unsolved LP runs Phase I, which also rewrites the
    /// constraint rows into the Phase I basis. The verdict is cached. A
    /// pivot-cap error leaves the tableau untouched.
    pub fn feasible(&mut self) -> LpResult<bool> {
        match self.state {
            LpState::FeasibilityChecked { feasible } => Ok(feasible),
            LpState::Solved(status) => Ok(status != SolveStatus::Infeasible),
            LpState::Unsolved => {
                let outcome = phase_one::run(&mut self.tableau, &self.settings)?;
                self.info.phase_one_pivots += outcome.pivots;
                self.state = LpState::FeasibilityChecked {
                    feasible: outcome.feasible,
                };
                Ok(outcome.feasible)
            }
        }
    }

    /// Solved and optimal, or (before solving) the current row 0 already
    /// passes the optimality test. The live answer is deliberately not
    /// cached, so asking before `optimize` cannot cut Phase II short.
    pub fn is_optimal(&self) -> bool {
        match self.state {
            LpState::Solved(status) => status == SolveStatus::Optimal,
            _ => pivot::is_optimal(self.tableau.objective(), self.settings.tolerance()),
        }
    }

    /// False only once the LP has been solved and found unbounded.
    pub fn is_bounded(&self) -> bool {
        self.state != LpState::Solved(SolveStatus::Unbounded)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, LpState::Solved(_))
    }

    /// Terminal status, if solved.
    pub fn status(&self) -> Option<SolveStatus> {
        match self.state {
            LpState::Solved(status) => Some(status),
            _ => None,
        }
    }

    /// Column 0 of row 0. Meaningful after a successful `optimize`.
    pub fn objective_value(&self) -> f64 {
        self.tableau.objective_value()
    }

    /// Decision vector, one entry per variable column.
    pub fn solution(&self) -> LpResult<Vec<f64>> {
        match self.state {
            LpState::Solved(SolveStatus::Optimal) => {
                Ok(solution::decode(&self.tableau, self.settings.tolerance()))
            }
            LpState::Solved(SolveStatus::Unbounded) => {
                Err(LpError::NoSolution("LP is unbounded".to_string()))
            }
            LpState::Solved(SolveStatus::Infeasible) => {
                Err(LpError::NoSolution("LP is infeasible".to_string()))
            }
            _ => Err(LpError::SolutionUnavailable(
                "LP is unsolved; try optimizing LP first!".to_string(),
            )),
        }
    }

    /// A fresh, unsolved LP whose tableau is the transpose of this one.
    ///
    /// No sign convention is applied: the result maximizes whatever the
    /// transposed row 0 says, and the caller is responsible for having set
    /// up the primal so that this is its dual.
    pub fn dual(&self) -> LinearProgram {
        Self::from_tableau(self.tableau.transpose(), self.settings.clone())
    }
}

impl FromStr for LinearProgram {
    type Err = LpError;

    fn from_str(s: &str) -> LpResult<Self> {
        s.parse::<Tableau>()
            .map(|t| Self::from_tableau(t, SimplexSettings::default()))
    }
}
