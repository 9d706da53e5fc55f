//! Verbose progress output.
//!
//! Only used when `SimplexSettings::verbose` is set. Structured events go
//! through the `log` facade instead.

use crate::problem::SolveStatus;

const RULE_WIDTH: usize = 60;

pub fn print_banner(constraints: usize, width: usize) {
    println!("Simplex Solver");
    println!("==============");
    println!("Tableau: {} constraints, {} columns", constraints, width);
    println!();
}

pub fn print_phase_header(phase: &str) {
    println!("{}", phase);
    println!(
        "{:>6} {:>6} {:>6} {:>14} {:>18}",
        "Pivot", "Row", "Col", "Ratio", "Objective"
    );
    println!("{}", "-".repeat(RULE_WIDTH));
}

pub fn print_pivot(pivot: usize, row: usize, col: usize, ratio: f64, objective: f64) {
    println!(
        "{:6} {:6} {:6} {:14.6e} {:18.8e}",
        pivot, row, col, ratio, objective
    );
}

pub fn print_phase_footer(pivots: usize) {
    println!("{}", "-".repeat(RULE_WIDTH));
    println!("Pivots: {}", pivots);
    println!();
}

pub fn print_summary(status: SolveStatus, objective: f64, solve_time_ms: u64) {
    println!("Status: {}", status);
    println!("Objective: {:.10e}", objective);
    println!("Solve time: {} ms", solve_time_ms);
    println!();
}
