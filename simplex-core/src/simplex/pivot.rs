//! Ratio test, Gauss-Jordan pivot, and the iteration loop.
//!
//! The objective row is read in "reduced cost" form: a negative entry in
//! column j ≥ 1 means bringing variable j into the basis improves the
//! objective. The tableau is optimal once no such entry remains.
//!
//! Selection rules:
//! - entering column: the leftmost column whose objective entry is < -ε
//! - leaving row: the minimum non-negative ratio `b_i / a_ij` over rows with
//!   `a_ij ≥ ε`; ties keep the lowest row index
//!
//! Neither rule is Bland's rule, so degenerate tableaus can cycle. Use
//! `SimplexSettings::max_pivots` to bound the loop.

use log::{debug, trace};

use crate::error::{LpError, LpResult, Phase};
use crate::problem::SimplexSettings;
use crate::tableau::Tableau;
use crate::util::logging;
use crate::util::matrix::scale_in_place;
use crate::util::Tolerance;

/// How a pivoting run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No objective entry below -ε remains
    Optimal,
    /// The entering column has no positive entry
    Unbounded,
}

/// Outcome of [`select`]: what the next iteration would do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The tableau is already optimal
    Optimal,

    /// Column `col` can enter but no row limits it
    Unbounded { col: usize },

    /// Pivot on (`row`, `col`); `ratio` is the winning ratio-test value
    Pivot { row: usize, col: usize, ratio: f64 },
}

/// Result of driving a tableau to termination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotOutcome {
    pub termination: Termination,
    pub pivots: usize,
}

/// Every objective coefficient (column 0 excluded) is ≥ 0 within ε.
pub fn is_optimal(objective: &[f64], tol: Tolerance) -> bool {
    objective.iter().skip(1).all(|&c| !tol.lt(c, 0.0))
}

/// Leftmost column whose objective coefficient is strictly negative.
pub fn entering_column(objective: &[f64], tol: Tolerance) -> Option<usize> {
    objective
        .iter()
        .enumerate()
        .skip(1)
        .find(|&(_, &c)| tol.lt(c, 0.0))
        .map(|(j, _)| j)
}

/// Leaving row for entering column `col`, as a tableau row index (≥ 1),
/// paired with its ratio. `None` means the column is unbounded.
pub fn ratio_test(tableau: &Tableau, col: usize, tol: Tolerance) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    let mut low = f64::MAX;

    for (i, row) in tableau.constraints().iter().enumerate() {
        let entry = row[col];
        if tol.le(entry, 0.0) {
            continue;
        }
        let ratio = row[0] / entry;
        if tol.le(0.0, ratio) && tol.lt(ratio, low) {
            best = Some((i + 1, ratio));
            low = ratio;
        }
    }

    best
}

/// Gauss-Jordan pivot on (`row`, `col`).
///
/// Scales `row` so the pivot entry becomes 1, then eliminates `col` from
/// every other row (objective included) whose entry is not zero within ε.
pub fn pivot(tableau: &mut Tableau, row: usize, col: usize, tol: Tolerance) {
    let rows = tableau.rows_mut();

    let inverse = 1.0 / rows[row][col];
    scale_in_place(inverse, &mut rows[row]);

    let pivot_row = std::mem::take(&mut rows[row]);
    for (i, r) in rows.iter_mut().enumerate() {
        if i == row {
            continue;
        }
        let factor = r[col];
        if tol.is_zero(factor) {
            continue;
        }
        for (x, &p) in r.iter_mut().zip(pivot_row.iter()) {
            *x -= factor * p;
        }
    }
    rows[row] = pivot_row;
}

/// Decide the next iteration without touching the tableau.
pub fn select(tableau: &Tableau, tol: Tolerance) -> Step {
    let Some(col) = entering_column(tableau.objective(), tol) else {
        return Step::Optimal;
    };
    match ratio_test(tableau, col, tol) {
        Some((row, ratio)) => Step::Pivot { row, col, ratio },
        None => Step::Unbounded { col },
    }
}

/// One simplex iteration: select, then pivot if a pivot was selected.
pub fn iterate(tableau: &mut Tableau, tol: Tolerance) -> Step {
    let step = select(tableau, tol);
    if let Step::Pivot { row, col, .. } = step {
        pivot(tableau, row, col, tol);
    }
    step
}

/// Pivot until the tableau is optimal or unbounded.
pub fn run(tableau: &mut Tableau, settings: &SimplexSettings, phase: Phase) -> LpResult<PivotOutcome> {
    let tol = settings.tolerance();
    let mut pivots = 0;

    if settings.verbose {
        logging::print_phase_header(&phase.to_string());
    }

    let termination = loop {
        match select(tableau, tol) {
            Step::Optimal => break Termination::Optimal,
            Step::Unbounded { col } => {
                debug!("{}: column {} has no positive entry, unbounded", phase, col);
                break Termination::Unbounded;
            }
            Step::Pivot { row, col, ratio } => {
                if settings.max_pivots.is_some_and(|max| pivots >= max) {
                    return Err(LpError::IterationLimit { pivots, phase });
                }
                pivot(tableau, row, col, tol);
                pivots += 1;

                trace!(
                    "{} pivot {}: row {} col {} ratio {:e} objective {:e}",
                    phase,
                    pivots,
                    row,
                    col,
                    ratio,
                    tableau.objective_value()
                );
                if settings.verbose {
                    logging::print_pivot(pivots, row, col, ratio, tableau.objective_value());
                }
            }
        }
    };

    if settings.verbose {
        logging::print_phase_footer(pivots);
    }

    Ok(PivotOutcome { termination, pivots })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feas_sef() -> Tableau {
        Tableau::from_rows(vec![
            vec![0.0, 3.0, 2.0, 4.0, 0.0, 0.0, 0.0],
            vec![4.0, 1.0, 1.0, 2.0, 1.0, 0.0, 0.0],
            vec![5.0, 2.0, 0.0, 3.0, 0.0, 1.0, 0.0],
            vec![7.0, 2.0, 1.0, 3.0, 0.0, 0.0, 1.0],
        ])
    }

    fn settings() -> SimplexSettings {
        SimplexSettings {
            epsilon: crate::util::DEFAULT_EPSILON,
            max_pivots: None,
            verbose: false,
        }
    }

    #[test]
    fn test_optimality_ignores_value_column() {
        let tol = Tolerance::default();
        assert!(is_optimal(&[-5.0, 0.0, 1.0], tol));
        assert!(!is_optimal(&[5.0, 0.0, -1.0], tol));
        assert!(is_optimal(&[], tol));
        assert!(is_optimal(&[0.0, -1e-12], tol));
    }

    #[test]
    fn test_entering_column_is_leftmost_negative() {
        let tol = Tolerance::default();
        assert_eq!(entering_column(&[-9.0, 1.0, -2.0, -7.0], tol), Some(2));
        assert_eq!(entering_column(&[-9.0, 1.0, 0.0], tol), None);
    }

    #[test]
    fn test_ratio_test_prefers_first_minimum() {
        let t = Tableau::from_rows(vec![
            vec![0.0, -1.0],
            vec![4.0, 2.0],
            vec![2.0, 1.0],
            vec![3.0, 0.0],
            vec![1.0, -1.0],
        ]);
        // Rows 1 and 2 tie at ratio 2; the first one wins
        assert_eq!(ratio_test(&t, 1, Tolerance::default()), Some((1, 2.0)));
    }

    #[test]
    fn test_ratio_test_accepts_zero_ratio() {
        let t = Tableau::from_rows(vec![
            vec![0.0, -1.0],
            vec![3.0, 1.0],
            vec![0.0, 2.0],
            vec![0.0, 1.0],
        ]);
        // Degenerate rows give ratio 0; the first of them wins
        assert_eq!(ratio_test(&t, 1, Tolerance::default()), Some((2, 0.0)));

        let mut t = t;
        assert_eq!(
            iterate(&mut t, Tolerance::default()),
            Step::Pivot { row: 2, col: 1, ratio: 0.0 }
        );
        // A degenerate pivot leaves the objective value where it was
        assert_eq!(t.objective_value(), 0.0);
        assert_eq!(&t[2], &[0.0, 1.0]);
    }

    #[test]
    fn test_ratio_test_unbounded_column() {
        let t = Tableau::from_rows(vec![vec![0.0, -1.0, 0.0], vec![1.0, -1.0, 1.0]]);
        assert_eq!(ratio_test(&t, 1, Tolerance::default()), None);
        assert_eq!(select(&t, Tolerance::default()), Step::Unbounded { col: 1 });
    }

    #[test]
    fn test_single_iteration() {
        let mut t = feas_sef();
        t.negate_objective();

        let step = iterate(&mut t, Tolerance::default());
        assert_eq!(step, Step::Pivot { row: 2, col: 1, ratio: 2.5 });

        let expected = Tableau::from_rows(vec![
            vec![7.5, 0.0, -2.0, 0.5, 0.0, 1.5, 0.0],
            vec![1.5, 0.0, 1.0, 0.5, 1.0, -0.5, 0.0],
            vec![2.5, 1.0, 0.0, 1.5, 0.0, 0.5, 0.0],
            vec![2.0, 0.0, 1.0, 0.0, 0.0, -1.0, 1.0],
        ]);
        assert_eq!(t, expected);
    }

    #[test]
    fn test_run_to_optimality() {
        let mut t = feas_sef();
        t.negate_objective();

        let outcome = run(&mut t, &settings(), Phase::Two).unwrap();
        assert_eq!(outcome.termination, Termination::Optimal);
        assert_eq!(outcome.pivots, 2);

        let expected = Tableau::from_rows(vec![
            vec![10.5, 0.0, 0.0, 1.5, 2.0, 0.5, 0.0],
            vec![1.5, 0.0, 1.0, 0.5, 1.0, -0.5, 0.0],
            vec![2.5, 1.0, 0.0, 1.5, 0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.0, -0.5, -1.0, -0.5, 1.0],
        ]);
        assert_eq!(t, expected);
        assert_eq!(t.objective_value(), 10.5);
    }

    #[test]
    fn test_run_unbounded_without_pivoting() {
        let mut t = Tableau::from_rows(vec![vec![0.0, -1.0, 0.0], vec![1.0, -1.0, 1.0]]);
        let before = t.clone();

        let outcome = run(&mut t, &settings(), Phase::Two).unwrap();
        assert_eq!(outcome.termination, Termination::Unbounded);
        assert_eq!(outcome.pivots, 0);
        assert_eq!(t, before);
    }

    #[test]
    fn test_pivot_cap() {
        let mut t = feas_sef();
        t.negate_objective();

        let capped = settings().with_max_pivots(1);
        let err = run(&mut t, &capped, Phase::Two).unwrap_err();
        assert_eq!(err, LpError::IterationLimit { pivots: 1, phase: Phase::Two });
    }
}
