//! Phase I: feasibility search on the auxiliary LP.
//!
//! For a tableau of width n with m constraints the auxiliary LP has width
//! n + m. Its objective row is n zeros followed by m ones (minimize the sum of
//! the artificials), and constraint i gains a unit artificial column at
//! n + i. Right-hand sides are non-negative, so the artificials form a
//! feasible starting basis.

use log::debug;

use super::pivot::{self, Termination};
use crate::error::{LpResult, Phase};
use crate::problem::SimplexSettings;
use crate::tableau::Tableau;

/// Result of a Phase I run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseOneOutcome {
    /// The auxiliary objective reached zero within ε
    pub feasible: bool,
    pub pivots: usize,
}

/// Build the auxiliary tableau from the current constraint rows.
pub fn auxiliary_tableau(tableau: &Tableau) -> Tableau {
    let variables = tableau.width();
    let m = tableau.num_constraints();
    let width = variables + m;

    let mut rows = Vec::with_capacity(m + 1);

    let mut objective = vec![0.0; width];
    objective[variables..].fill(1.0);
    rows.push(objective);

    for (i, constraint) in tableau.constraints().iter().enumerate() {
        let mut row = Vec::with_capacity(width);
        row.extend_from_slice(constraint);
        row.resize(width, 0.0);
        row[variables + i] = 1.0;
        rows.push(row);
    }

    Tableau::from_rows(rows)
}

/// Subtract every constraint row from the objective row so the basic
/// artificial columns have zero reduced cost.
pub fn price_out_artificials(aux: &mut Tableau) {
    let Some((objective, constraints)) = aux.rows_mut().split_first_mut() else {
        return;
    };
    for row in constraints.iter() {
        for (o, &x) in objective.iter_mut().zip(row.iter()) {
            *o -= x;
        }
    }
}

/// Run Phase I and seed `tableau` with the resulting basis.
///
/// The solved auxiliary constraint rows, truncated to the primal width, are
/// copied back over the primal constraint rows. The objective row of
/// `tableau` is not touched.
pub fn run(tableau: &mut Tableau, settings: &SimplexSettings) -> LpResult<PhaseOneOutcome> {
    let tol = settings.tolerance();

    let mut aux = auxiliary_tableau(tableau);
    price_out_artificials(&mut aux);

    debug!(
        "{}: {} constraints, auxiliary width {}",
        Phase::One,
        aux.num_constraints(),
        aux.width()
    );

    let outcome = pivot::run(&mut aux, settings, Phase::One)?;
    if outcome.termination == Termination::Unbounded {
        // Cannot happen for exact arithmetic; the objective value still decides
        debug!("{}: auxiliary LP reported unbounded", Phase::One);
    }

    let feasible = tol.is_zero(aux.objective_value());
    debug!(
        "{}: {} pivots, auxiliary objective {:e}, feasible = {}",
        Phase::One,
        outcome.pivots,
        aux.objective_value(),
        feasible
    );

    let width = tableau.width();
    for (dst, src) in tableau.rows_mut()[1..].iter_mut().zip(aux.constraints()) {
        dst.copy_from_slice(&src[..width]);
    }

    Ok(PhaseOneOutcome {
        feasible,
        pivots: outcome.pivots,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::Tolerance;

    fn feas_sef() -> Tableau {
        Tableau::from_rows(vec![
            vec![0.0, 3.0, 2.0, 4.0, 0.0, 0.0, 0.0],
            vec![4.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0],
            vec![5.0, 2.0, 0.0, 3.0, 0.0, 1.0, 0.0],
            vec![7.0, 2.0, 1.0, 3.0, 0.0, 0.0, 1.0],
        ])
    }

    #[test]
    fn test_auxiliary_tableau_layout() {
        let aux = auxiliary_tableau(&feas_sef());
        let expected = Tableau::from_rows(vec![
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            vec![4.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            vec![5.0, 2.0, 0.0, 3.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            vec![7.0, 2.0, 1.0, 3.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(aux, expected);
    }

    #[test]
    fn test_auxiliary_tableau_does_not_alias() {
        let primal = feas_sef();
        let mut aux = auxiliary_tableau(&primal);
        aux.rows_mut()[1][0] = 99.0;
        assert_eq!(primal[1][0], 4.0);
    }

    #[test]
    fn test_price_out() {
        let mut aux = auxiliary_tableau(&Tableau::from_rows(vec![
            vec![0.0, 3.0, 2.0],
            vec![6.0, 2.0, 1.0],
            vec![4.0, 1.0, 1.0],
        ]));
        price_out_artificials(&mut aux);
        assert_eq!(aux.objective(), &[-10.0, -3.0, -2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_feasible_and_seeded() {
        let mut t = Tableau::from_rows(vec![
            vec![0.0, 3.0, 2.0, 0.0, 0.0],
            vec![6.0, 2.0, 1.0, 1.0, 0.0],
            vec![4.0, 1.0, 1.0, 0.0, 1.0],
        ]);
        let outcome = run(&mut t, &SimplexSettings::default().with_epsilon(1e-10)).unwrap();
        assert!(outcome.feasible);
        assert_eq!(outcome.pivots, 2);

        // Objective untouched, constraints carry the Phase I basis
        assert_eq!(t.objective(), &[0.0, 3.0, 2.0, 0.0, 0.0]);
        assert_eq!(t.constraints(), &[vec![2.0, 1.0, 0.0, 1.0, -1.0], vec![2.0, 0.0, 1.0, -1.0, 2.0]]);
    }

    #[test]
    fn test_contradictory_equalities_are_infeasible() {
        let mut t = Tableau::new();
        let tol = Tolerance::default();
        t.set_objective(100.0, &[1.0, 1.0]);
        t.add_constraint_eq(100.0, &[1.0, 1.0], tol);
        t.add_constraint_eq(50.0, &[1.0, 0.0], tol);
        t.add_constraint_eq(40.0, &[1.0, 0.0], tol);

        let outcome = run(&mut t, &SimplexSettings::default().with_epsilon(1e-10)).unwrap();
        assert!(!outcome.feasible);
    }

    #[test]
    fn test_no_constraints_is_feasible() {
        let mut t = Tableau::from_rows(vec![vec![0.0, 1.0, -1.0]]);
        let outcome = run(&mut t, &SimplexSettings::default()).unwrap();
        assert!(outcome.feasible);
        assert_eq!(outcome.pivots, 0);
    }
}
