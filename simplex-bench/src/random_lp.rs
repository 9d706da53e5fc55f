//! Deterministic random LP generator.

use simplex_core::{LinearProgram, Sense, SimplexSettings};

/// Generate a random dense LP:
///   maximize    c^T x
///   subject to  b_i >= a_i^T x   (one slack column per row)
///               x >= 0
///
/// with c, a, b strictly positive, so x = 0 is feasible and the optimum is
/// finite.
pub fn generate_random_lp(n: usize, m: usize, seed: u64, settings: SimplexSettings) -> LinearProgram {
    // Simple LCG random number generator
    let mut rng_state = seed;
    let mut rand = || -> f64 {
        rng_state = rng_state.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((rng_state >> 33) as f64) / (u32::MAX as f64)
    };

    let c: Vec<f64> = (0..n).map(|_| rand() + 0.1).collect();

    let mut lp = LinearProgram::with_settings(settings);
    lp.set_objective(Sense::Maximize, 0.0, &c);
    for _ in 0..m {
        let a: Vec<f64> = (0..n).map(|_| rand() + 0.1).collect();
        let b = 10.0 * rand() + 1.0;
        lp.add_constraint_geq(b, &a);
    }
    lp
}
