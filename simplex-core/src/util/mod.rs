//! Utility functions.
//!
//! Tolerant comparisons, dense matrix helpers, and verbose progress output.

pub mod logging;
pub mod matrix;
pub mod numerics;

pub use numerics::{Tolerance, DEFAULT_EPSILON};
