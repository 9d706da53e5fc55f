//! Dense simplex tableau.
//!
//! Row 0 is the objective row `[z, c1, …, cn]`; rows 1.. are constraint rows
//! `[b, a1, …, an]` encoding `a·x = b`. Column 0 therefore holds the current
//! objective value (row 0) or the right-hand side (constraint rows), and
//! columns 1.. hold variable coefficients in caller-assigned order.
//!
//! # Invariants
//!
//! - There is always at least one row (the objective).
//! - Every row has the same length, the tableau *width*.
//! - Width never shrinks. Widening pads every existing row with trailing zeros.

pub mod text;

use std::fmt;
use std::ops::Index;

use crate::error::{LpError, LpResult};
use crate::util::matrix::{pad_with_zeros, scale_in_place, transpose};
use crate::util::Tolerance;

/// Dense row-major simplex tableau.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    rows: Vec<Vec<f64>>,
}

impl Default for Tableau {
    fn default() -> Self {
        Self::new()
    }
}

impl Tableau {
    /// An empty tableau: a single objective row of width 0.
    pub fn new() -> Self {
        Self {
            rows: vec![Vec::new()],
        }
    }

    /// Build a tableau from raw rows, row 0 being the objective.
    ///
    /// Ragged rows are zero-padded to the widest row. An empty input yields
    /// [`Tableau::new`].
    pub fn from_rows(mut rows: Vec<Vec<f64>>) -> Self {
        if rows.is_empty() {
            return Self::new();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in rows.iter_mut() {
            pad_with_zeros(row, width);
        }
        Self { rows }
    }

    /// Row length shared by every row.
    #[inline]
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows including the objective.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn num_constraints(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Row 0, objective constant included.
    pub fn objective(&self) -> &[f64] {
        &self.rows[0]
    }

    /// Constraint rows (rows 1..).
    pub fn constraints(&self) -> &[Vec<f64>] {
        &self.rows[1..]
    }

    /// Current objective value, column 0 of row 0 (0 for a width-0 tableau).
    pub fn objective_value(&self) -> f64 {
        self.rows[0].first().copied().unwrap_or(0.0)
    }

    /// Mutable view of the rows. The slice cannot change the row count;
    /// callers must not change row lengths.
    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<f64>] {
        &mut self.rows
    }

    /// Replace row 0 with `[z, coefficients…]`, widening if it is now the
    /// widest row and padding it if it is narrower.
    pub fn set_objective(&mut self, z: f64, coefficients: &[f64]) {
        let width = self.width();
        let mut row = Vec::with_capacity(coefficients.len().max(width) + 1);
        row.push(z);
        row.extend_from_slice(coefficients);
        pad_with_zeros(&mut row, width);

        let new_width = row.len();
        self.rows[0] = row;
        if new_width > width {
            self.grow(new_width);
        }
    }

    /// Append the equality constraint `b = a·x`.
    ///
    /// The row is padded to the current width, then sign-flipped as a whole
    /// if `b` is negative so every right-hand side is non-negative. A row
    /// wider than the tableau widens every other row.
    pub fn add_constraint_eq(&mut self, b: f64, coefficients: &[f64], tol: Tolerance) {
        let mut row = Vec::with_capacity(coefficients.len().max(self.width()) + 1);
        row.push(b);
        row.extend_from_slice(coefficients);
        pad_with_zeros(&mut row, self.width());

        if tol.lt(b, 0.0) {
            scale_in_place(-1.0, &mut row);
        }

        let len = row.len();
        self.rows.push(row);
        if len > self.width() {
            self.grow(len);
        }
    }

    /// Append `b >= a·x` as an equality with a fresh `+1` slack column.
    pub fn add_constraint_geq(&mut self, b: f64, coefficients: &[f64], tol: Tolerance) {
        let row = self.with_extra_column(coefficients, 1.0);
        self.add_constraint_eq(b, &row, tol);
    }

    /// Append `b <= a·x` as an equality with a fresh `-1` surplus column.
    pub fn add_constraint_leq(&mut self, b: f64, coefficients: &[f64], tol: Tolerance) {
        let row = self.with_extra_column(coefficients, -1.0);
        self.add_constraint_eq(b, &row, tol);
    }

    /// Pad coefficients to the existing variable columns and append one more.
    fn with_extra_column(&self, coefficients: &[f64], value: f64) -> Vec<f64> {
        let mut row = coefficients.to_vec();
        pad_with_zeros(&mut row, self.width().saturating_sub(1));
        row.push(value);
        row
    }

    /// Delete constraint `i` (tableau row `i + 1`). Width is unchanged.
    pub fn remove_constraint(&mut self, i: usize) -> LpResult<()> {
        if i >= self.num_constraints() {
            return Err(LpError::InvalidInput(format!(
                "constraint index {} out of range (LP has {} constraints)",
                i,
                self.num_constraints()
            )));
        }
        self.rows.remove(i + 1);
        Ok(())
    }

    /// Drop every constraint row, keeping the objective and the width.
    pub fn clear_constraints(&mut self) {
        self.rows.truncate(1);
    }

    /// Negate every objective coefficient, leaving the objective value cell
    /// (column 0) as it was.
    pub fn negate_objective(&mut self) {
        let objective = &mut self.rows[0];
        scale_in_place(-1.0, objective);
        if let Some(z) = objective.first_mut() {
            *z *= -1.0;
        }
    }

    /// Transpose of the full tableau, objective row included.
    pub fn transpose(&self) -> Tableau {
        Tableau::from_rows(transpose(&self.rows))
    }

    /// Zero-pad every row to `width`.
    fn grow(&mut self, width: usize) {
        for row in self.rows.iter_mut() {
            pad_with_zeros(row, width);
        }
    }
}

impl Index<usize> for Tableau {
    type Output = [f64];

    fn index(&self, row: usize) -> &[f64] {
        &self.rows[row]
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text::format_rows(&self.rows))
    }
}
