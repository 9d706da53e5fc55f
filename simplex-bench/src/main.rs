//! Command-line solver and benchmarking CLI for simplex-core.

mod random_lp;
mod report;
mod sense_choice;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use simplex_core::{LinearProgram, SimplexSettings, SolveStatus};

use random_lp::generate_random_lp;
use report::{BenchmarkReport, BenchmarkResult, SolveReport};
use sense_choice::{apply_sense, SenseChoice};

#[derive(Parser, Debug)]
#[command(name = "simplex-bench", version, about = "Dense two-phase simplex solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve an LP stored as a comma-separated tableau
    Solve {
        /// Tableau file, one row per line, row 0 the objective
        file: PathBuf,

        /// Objective sense (default: maximize)
        #[arg(long, value_enum)]
        sense: Option<SenseChoice>,

        /// Solve the transposed (dual) tableau instead
        #[arg(long)]
        dual: bool,

        /// Comparison tolerance
        #[arg(long)]
        epsilon: Option<f64>,

        /// Pivot cap per phase
        #[arg(long)]
        max_pivots: Option<usize>,

        /// Print per-pivot progress
        #[arg(long)]
        verbose: bool,

        /// Emit a JSON report on stdout
        #[arg(long)]
        json: bool,
    },

    /// Time the solver on deterministic random LPs
    Bench {
        /// Structural variables per LP
        #[arg(long, default_value_t = 20)]
        vars: usize,

        /// Constraints per LP
        #[arg(long, default_value_t = 10)]
        constraints: usize,

        /// Seed of the first LP; run k uses seed + k
        #[arg(long, default_value_t = 12345)]
        seed: u64,

        /// Number of LPs
        #[arg(long, default_value_t = 10)]
        runs: usize,

        /// Write results as JSON to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            file,
            sense,
            dual,
            epsilon,
            max_pivots,
            verbose,
            json,
        } => {
            let mut settings = SimplexSettings::default();
            if let Some(eps) = epsilon {
                settings = settings.with_epsilon(eps);
            }
            if let Some(max) = max_pivots {
                settings = settings.with_max_pivots(max);
            }
            settings.verbose = verbose && !json;
            run_solve(&file, sense, dual, settings, json)
        }
        Command::Bench {
            vars,
            constraints,
            seed,
            runs,
            output,
        } => run_bench(vars, constraints, seed, runs, output.as_deref()),
    }
}

fn run_solve(
    file: &std::path::Path,
    sense: Option<SenseChoice>,
    dual: bool,
    settings: SimplexSettings,
    json: bool,
) -> Result<()> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let rows = simplex_core::tableau::text::parse_rows(&text)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let mut lp = LinearProgram::from_tableau(simplex_core::Tableau::from_rows(rows), settings);
    if dual {
        lp = lp.dual();
    }
    apply_sense(&mut lp, sense);
    info!(
        "loaded {} ({} constraints, width {})",
        file.display(),
        lp.num_constraints(),
        lp.width()
    );

    let status = lp
        .optimize()
        .with_context(|| format!("Failed to solve {}", file.display()))?;

    let report = SolveReport {
        file: file.display().to_string(),
        sense: lp.sense(),
        dual,
        width: lp.width(),
        constraints: lp.num_constraints(),
        status,
        objective_value: lp.objective_value(),
        solution: lp.solution().ok(),
        info: lp.info().clone(),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        report.print();
    }
    Ok(())
}

fn run_bench(
    vars: usize,
    constraints: usize,
    seed: u64,
    runs: usize,
    output: Option<&std::path::Path>,
) -> Result<()> {
    println!("Simplex Solver Benchmarks");
    println!("=========================");
    println!("Variables (n):    {}", vars);
    println!("Constraints (m):  {}", constraints);
    println!("Runs:             {}", runs);

    let mut results = Vec::with_capacity(runs);
    for k in 0..runs {
        let run_seed = seed.wrapping_add(k as u64);
        let mut lp = generate_random_lp(vars, constraints, run_seed, SimplexSettings::default());

        let start = Instant::now();
        let outcome = lp.optimize();
        let solve_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        let (status, error) = match outcome {
            Ok(status) => (Some(status), None),
            Err(e) => (None, Some(e.to_string())),
        };
        if status != Some(SolveStatus::Optimal) {
            log::warn!("run {} (seed {}): {:?} {:?}", k, run_seed, status, error);
        }

        results.push(BenchmarkResult {
            name: format!("random-{}", run_seed),
            n: vars,
            m: constraints,
            status,
            pivots: lp.info().total_pivots(),
            obj_val: lp.objective_value(),
            solve_time_ms,
            error,
        });
    }

    let report = BenchmarkReport::new(seed, results);
    report::print_results_table(&report.results);
    report::print_summary(&report.summary);

    if let Some(path) = output {
        report::save_json(&report, path)?;
        println!("Results written to {}", path.display());
    }
    Ok(())
}
