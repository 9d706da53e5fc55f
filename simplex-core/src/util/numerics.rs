//! Epsilon-aware comparisons.
//!
//! Every sign or equality decision the simplex engine makes on a float goes
//! through a [`Tolerance`]. The predicates shift one operand by ε before
//! comparing, so a value within ε of zero is neither strictly positive nor
//! strictly negative.

use serde::{Deserialize, Serialize};

/// Default comparison tolerance, 2⁻³³.
pub const DEFAULT_EPSILON: f64 = 1.0 / 8_589_934_592.0;

/// Fixed-epsilon comparator for `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    eps: f64,
}

impl Tolerance {
    /// Create a comparator with the given epsilon.
    ///
    /// Negative or NaN values are clamped to zero. With ε = 0 the loose
    /// predicates become strict, so `eq` never holds.
    pub fn new(eps: f64) -> Self {
        let eps = if eps.is_nan() { 0.0 } else { eps.max(0.0) };
        Self { eps }
    }

    /// The epsilon this comparator was built with.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.eps
    }

    /// `a < b` by more than ε.
    #[inline]
    pub fn lt(&self, a: f64, b: f64) -> bool {
        a + self.eps < b
    }

    /// `a <= b` allowing ε of slack.
    #[inline]
    pub fn le(&self, a: f64, b: f64) -> bool {
        a - self.eps < b
    }

    /// `a > b` by more than ε.
    #[inline]
    pub fn gt(&self, a: f64, b: f64) -> bool {
        a - self.eps > b
    }

    /// `a >= b` allowing ε of slack.
    #[inline]
    pub fn ge(&self, a: f64, b: f64) -> bool {
        a + self.eps > b
    }

    /// `|a - b| < ε`.
    #[inline]
    pub fn eq(&self, a: f64, b: f64) -> bool {
        self.le(a, b) && self.ge(a, b)
    }

    #[inline]
    pub fn is_zero(&self, a: f64) -> bool {
        self.eq(a, 0.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(DEFAULT_EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_epsilon() {
        assert_eq!(DEFAULT_EPSILON, 2f64.powi(-33));
        assert_eq!(Tolerance::default().epsilon(), DEFAULT_EPSILON);
    }

    #[test]
    fn test_strict_predicates_ignore_noise() {
        let tol = Tolerance::new(1e-6);

        assert!(!tol.lt(-1e-7, 0.0));
        assert!(tol.lt(-1e-5, 0.0));
        assert!(!tol.gt(1e-7, 0.0));
        assert!(tol.gt(1e-5, 0.0));
    }

    #[test]
    fn test_loose_predicates_accept_noise() {
        let tol = Tolerance::new(1e-6);

        assert!(tol.le(1e-7, 0.0));
        assert!(!tol.le(1e-5, 0.0));
        assert!(tol.ge(-1e-7, 0.0));
        assert!(!tol.ge(-1e-5, 0.0));
    }

    #[test]
    fn test_eq() {
        let tol = Tolerance::new(1e-6);

        assert!(tol.eq(1.0, 1.0 + 5e-7));
        assert!(tol.eq(1.0, 1.0 - 5e-7));
        assert!(!tol.eq(1.0, 1.0 + 2e-6));
        assert!(tol.is_zero(-1e-9));
        assert!(!tol.is_zero(0.5));
    }

    #[test]
    fn test_zero_epsilon() {
        let tol = Tolerance::new(0.0);
        assert!(tol.lt(0.0, 1e-300));
        assert!(!tol.le(0.0, 0.0));
        assert!(!tol.eq(0.0, 0.0));

        // Invalid inputs clamp to zero
        assert_eq!(Tolerance::new(-1.0).epsilon(), 0.0);
        assert_eq!(Tolerance::new(f64::NAN).epsilon(), 0.0);
    }
}
