//! Two-phase simplex over a dense tableau.
//!
//! - [`phase_one`] builds and solves the auxiliary LP, deciding feasibility
//!   and seeding the primal constraint rows with a feasible basis.
//! - [`pivot`] holds the ratio test, the pivot, and the iteration loop shared
//!   by both phases.
//! - [`solve`] sequences the two phases and applies the objective-sense sign
//!   convention.

pub mod phase_one;
pub mod pivot;

use log::debug;

use crate::error::{LpResult, Phase};
use crate::problem::{Sense, SimplexSettings, SolveStatus};
use crate::tableau::Tableau;

pub use phase_one::PhaseOneOutcome;
pub use pivot::{PivotOutcome, Step, Termination};

/// Result of a full two-phase solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverOutcome {
    pub status: SolveStatus,
    /// Feasibility verdict in force for this solve
    pub feasible: bool,
    pub phase_one_pivots: usize,
    pub phase_two_pivots: usize,
}

/// Run both phases on `tableau` in place.
///
/// Row 0 is negated before Phase I for [`Sense::Maximize`] and after Phase I
/// for [`Sense::Minimize`]; either way Phase II sees the negated objective.
/// `known_feasibility` is a verdict from an earlier Phase I run; when present
/// it overrides the verdict of the run made here (the run still happens and
/// still reseeds the basis).
pub fn solve(
    tableau: &mut Tableau,
    sense: Sense,
    known_feasibility: Option<bool>,
    settings: &SimplexSettings,
) -> LpResult<DriverOutcome> {
    if sense == Sense::Maximize {
        tableau.negate_objective();
    }

    let phase_one = phase_one::run(tableau, settings)?;
    let feasible = known_feasibility.unwrap_or(phase_one.feasible);

    if sense == Sense::Minimize {
        tableau.negate_objective();
    }

    if !feasible {
        debug!("{}: infeasible, skipping {}", Phase::One, Phase::Two);
        return Ok(DriverOutcome {
            status: SolveStatus::Infeasible,
            feasible,
            phase_one_pivots: phase_one.pivots,
            phase_two_pivots: 0,
        });
    }

    debug!(
        "{}: {} constraints, width {}",
        Phase::Two,
        tableau.num_constraints(),
        tableau.width()
    );
    let phase_two = pivot::run(tableau, settings, Phase::Two)?;
    let status = match phase_two.termination {
        Termination::Optimal => SolveStatus::Optimal,
        Termination::Unbounded => SolveStatus::Unbounded,
    };
    debug!(
        "{}: {} after {} pivots, objective {:e}",
        Phase::Two,
        status,
        phase_two.pivots,
        tableau.objective_value()
    );

    Ok(DriverOutcome {
        status,
        feasible,
        phase_one_pivots: phase_one.pivots,
        phase_two_pivots: phase_two.pivots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SimplexSettings {
        SimplexSettings::default().with_epsilon(crate::util::DEFAULT_EPSILON)
    }

    #[test]
    fn test_minimize_sense_ordering() {
        // min 3x1 + 2x2 with slack columns x3, x4
        let mut t = Tableau::from_rows(vec![
            vec![0.0, 3.0, 2.0, 0.0, 0.0],
            vec![6.0, 2.0, 1.0, 1.0, 0.0],
            vec![4.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let outcome = solve(&mut t, Sense::Minimize, None, &settings()).unwrap();

        assert_eq!(outcome.status, SolveStatus::Optimal);
        assert!(outcome.feasible);
        assert_eq!(outcome.phase_one_pivots, 2);
        assert_eq!(outcome.phase_two_pivots, 2);
        assert_eq!(t.objective(), &[10.0, 0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_infeasible_skips_phase_two() {
        let mut t = Tableau::from_rows(vec![
            vec![0.0, 1.0, 1.0],
            vec![100.0, 1.0, 1.0],
            vec![50.0, 1.0, 0.0],
            vec![40.0, 1.0, 0.0],
        ]);
        let outcome = solve(&mut t, Sense::Maximize, None, &settings()).unwrap();
        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert_eq!(outcome.phase_two_pivots, 0);
    }

    #[test]
    fn test_known_feasibility_wins() {
        let mut t = Tableau::from_rows(vec![vec![0.0, 1.0], vec![1.0, 1.0]]);
        let outcome = solve(&mut t, Sense::Maximize, Some(false), &settings()).unwrap();
        assert_eq!(outcome.status, SolveStatus::Infeasible);
        assert!(!outcome.feasible);
    }

    #[test]
    fn test_unbounded() {
        // max x1 s.t. x1 - x2 = 1
        let mut t = Tableau::from_rows(vec![vec![0.0, 1.0, 0.0], vec![1.0, 1.0, -1.0]]);
        let outcome = solve(&mut t, Sense::Maximize, None, &settings()).unwrap();
        assert_eq!(outcome.status, SolveStatus::Unbounded);
        assert!(outcome.feasible);
    }
}
