//! Decision-vector recovery from a solved tableau.

use crate::tableau::Tableau;
use crate::util::Tolerance;

/// Value of variable `col` (tableau column, ≥ 1) at the current basis.
///
/// A non-zero reduced cost marks the column non-basic. Otherwise the first
/// constraint row holding a unit entry in `col` is taken as its basic row.
/// A zero-cost column with no unit entry also reads as 0.
pub fn variable_value(tableau: &Tableau, col: usize, tol: Tolerance) -> f64 {
    if !tol.is_zero(tableau.objective()[col]) {
        return 0.0;
    }
    tableau
        .constraints()
        .iter()
        .find(|row| tol.eq(row[col], 1.0))
        .map_or(0.0, |row| row[0])
}

/// Decode one value per variable column (width − 1 values).
pub fn decode(tableau: &Tableau, tol: Tolerance) -> Vec<f64> {
    (1..tableau.width())
        .map(|col| variable_value(tableau, col, tol))
        .collect()
}
