//! Result records, summary statistics, and JSON output.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use simplex_core::{Sense, SolveInfo, SolveStatus};

/// Outcome of `simplex-bench solve` on one tableau file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveReport {
    /// Input file
    pub file: String,
    pub sense: Sense,
    /// Whether the dual tableau was solved instead of the input
    pub dual: bool,
    pub width: usize,
    pub constraints: usize,
    pub status: SolveStatus,
    pub objective_value: f64,
    /// Present only for optimal LPs
    pub solution: Option<Vec<f64>>,
    pub info: SolveInfo,
}

impl SolveReport {
    pub fn print(&self) {
        println!("File:          {}", self.file);
        println!("Sense:         {}{}", self.sense, if self.dual { " (dual)" } else { "" });
        println!("Tableau:       {} constraints, width {}", self.constraints, self.width);
        println!("Status:        {}", self.status);
        if let Some(x) = &self.solution {
            println!("Objective:     {:.10e}", self.objective_value);
            for (j, v) in x.iter().enumerate() {
                println!("  x{:<10} {:.10e}", j + 1, v);
            }
        }
        println!(
            "Pivots:        {} (phase I {}, phase II {})",
            self.info.total_pivots(),
            self.info.phase_one_pivots,
            self.info.phase_two_pivots
        );
        println!("Solve time:    {} ms", self.info.solve_time_ms);
    }
}

/// Result of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Problem name
    pub name: String,
    /// Number of structural variables
    pub n: usize,
    /// Number of constraints
    pub m: usize,
    /// Solve status (None if the solve failed)
    pub status: Option<SolveStatus>,
    /// Total pivots over both phases
    pub pivots: usize,
    /// Objective value
    pub obj_val: f64,
    /// Solve time in milliseconds
    pub solve_time_ms: f64,
    /// Error message if any
    pub error: Option<String>,
}

/// Summary statistics for a benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub total: usize,
    pub optimal: usize,
    pub unbounded: usize,
    pub infeasible: usize,
    /// Solves that returned an error (pivot cap)
    pub errors: usize,
    pub total_time_ms: f64,
    /// Geometric mean of pivots over optimal runs
    pub geom_mean_pivots: f64,
}

pub fn compute_summary(results: &[BenchmarkResult]) -> BenchmarkSummary {
    let mut summary = BenchmarkSummary {
        total: results.len(),
        optimal: 0,
        unbounded: 0,
        infeasible: 0,
        errors: 0,
        total_time_ms: 0.0,
        geom_mean_pivots: 0.0,
    };
    let mut pivot_log_sum = 0.0;
    let mut pivot_count = 0;

    for r in results {
        summary.total_time_ms += r.solve_time_ms;
        match r.status {
            Some(SolveStatus::Optimal) => {
                summary.optimal += 1;
                if r.pivots > 0 {
                    pivot_log_sum += (r.pivots as f64).ln();
                    pivot_count += 1;
                }
            }
            Some(SolveStatus::Unbounded) => summary.unbounded += 1,
            Some(SolveStatus::Infeasible) => summary.infeasible += 1,
            None => summary.errors += 1,
        }
    }

    if pivot_count > 0 {
        summary.geom_mean_pivots = (pivot_log_sum / pivot_count as f64).exp();
    }
    summary
}

pub fn print_results_table(results: &[BenchmarkResult]) {
    println!(
        "\n{:<15} {:>6} {:>6} {:>10} {:>8} {:>14} {:>10}",
        "Problem", "n", "m", "Status", "Pivots", "Obj", "Time(ms)"
    );
    println!("{}", "-".repeat(75));

    for r in results {
        let status = r
            .status
            .map_or_else(|| "Error".to_string(), |s| s.to_string());
        println!(
            "{:<15} {:>6} {:>6} {:>10} {:>8} {:>14.6e} {:>10.3}",
            r.name, r.n, r.m, status, r.pivots, r.obj_val, r.solve_time_ms
        );
        if let Some(e) = &r.error {
            println!("  error: {}", e);
        }
    }
}

pub fn print_summary(summary: &BenchmarkSummary) {
    println!("\n{}", "=".repeat(60));
    println!("Random LP Benchmark Summary");
    println!("{}", "=".repeat(60));
    println!("Total problems:      {}", summary.total);
    println!(
        "Optimal:             {} ({:.1}%)",
        summary.optimal,
        100.0 * summary.optimal as f64 / summary.total.max(1) as f64
    );
    println!("Unbounded:           {}", summary.unbounded);
    println!("Infeasible:          {}", summary.infeasible);
    println!("Errors:              {}", summary.errors);
    println!("Total time:          {:.3} ms", summary.total_time_ms);
    println!("Geom mean pivots:    {:.1}", summary.geom_mean_pivots);
    println!("{}", "=".repeat(60));
}

/// Results plus summary, as written by `bench --output`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub seed: u64,
    pub results: Vec<BenchmarkResult>,
    pub summary: BenchmarkSummary,
}

impl BenchmarkReport {
    pub fn new(seed: u64, results: Vec<BenchmarkResult>) -> Self {
        let summary = compute_summary(&results);
        Self {
            seed,
            results,
            summary,
        }
    }
}

/// Write any serializable report as pretty JSON.
pub fn save_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let file = File::create(path.as_ref())
        .with_context(|| format!("Failed to create file {}", path.as_ref().display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("Failed to write JSON to {}", path.as_ref().display()))?;
    Ok(())
}
