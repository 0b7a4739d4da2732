//! Console driver for the Langermann experiments.
//!
//! ```text
//! tabu_lab [solve|repeat|sweep-tabu|sweep-gradient|gramacy|surface] [seed]
//! ```
//!
//! `surface` writes the 200 × 200 Langermann heatmap grid as `x,y,f` CSV
//! rows to stdout for an external plotting tool.
//!
//! Set `RUST_LOG` to adjust verbosity (default `info`).

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use u_localopt::experiment::{
    top_k, AggregateStatistic, ExperimentRunner, GradientGrid, TabuGrid, DEFAULT_TOP_K,
};
use u_localopt::gradient::{GradientConfig, GradientRunner};
use u_localopt::objective::{sample_surface, GramacyLee, Langermann, Objective, Point};
use u_localopt::tabu::{ExhaustionPolicy, StepNeighbors, TabuConfig, TabuRunner};
use u_localopt::Result;
use u_numflow::random::create_rng;

/// Start point of the reference gradient sweep (a typical tabu result).
const GRADIENT_SWEEP_START: [f64; 2] = [2.7932, 1.6035];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "solve".to_string());
    let seed = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(seed)) => Some(seed),
        Some(Err(e)) => {
            error!(error = %e, "seed must be an unsigned integer");
            return ExitCode::FAILURE;
        }
        None => None,
    };

    let outcome = match command.as_str() {
        "solve" => solve(seed),
        "repeat" => repeat(seed),
        "sweep-tabu" => sweep_tabu(seed),
        "sweep-gradient" => sweep_gradient(),
        "gramacy" => gramacy(seed),
        "surface" => surface(),
        other => {
            error!(command = other, "unknown command");
            return ExitCode::FAILURE;
        }
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "experiment failed");
            ExitCode::FAILURE
        }
    }
}

fn seeded(config: TabuConfig, seed: Option<u64>) -> TabuConfig {
    match seed {
        Some(s) => config.with_seed(s),
        None => config,
    }
}

fn stream(seed: Option<u64>) -> impl rand::Rng {
    create_rng(seed.unwrap_or_else(rand::random))
}

/// Tabu search, then gradient refinement from the tabu best.
fn solve(seed: Option<u64>) -> Result<()> {
    let f = Langermann::default();
    let tabu = TabuRunner::run(&f, &seeded(TabuConfig::default(), seed))?;

    println!("Tabu Search");
    println!("  best point:    {:?}", tabu.best.as_slice());
    println!("  best value:    {:.6}", tabu.best_value);
    println!("  initial point: {:?}", tabu.initial_point.as_slice());
    println!("  history:       {} entries", tabu.history.len());

    let gd = GradientRunner::run(&f, &tabu.best, &GradientConfig::default())?;
    println!("Gradient Descent");
    println!("  point:         {:?}", gd.point.as_slice());
    println!("  value:         {:.6}", gd.value);

    let abs_error = (tabu.best_value - gd.value).abs();
    println!("  absolute error: {abs_error:.6e}");
    println!("  relative error: {:.4}%", abs_error / tabu.best_value.abs() * 100.0);
    Ok(())
}

/// Many independent runs with default hyperparameters.
fn repeat(seed: Option<u64>) -> Result<()> {
    let mut rng = stream(seed);
    let batch =
        ExperimentRunner::run_many(&Langermann::default(), &TabuConfig::default(), 1000, &mut rng)?;
    println!("{}", batch.summary);
    Ok(())
}

fn sweep_tabu(seed: Option<u64>) -> Result<()> {
    let mut rng = stream(seed);
    let stats = ExperimentRunner::sweep_tabu(
        &Langermann::default(),
        &TabuGrid::default(),
        &TabuConfig::default(),
        20,
        &mut rng,
    )?;
    print_top("Best Tabu Search combinations", &stats);
    Ok(())
}

fn sweep_gradient() -> Result<()> {
    let stats = ExperimentRunner::sweep_gradient(
        &Langermann::default(),
        &Point::new(GRADIENT_SWEEP_START.to_vec()),
        &GradientGrid::default(),
        &GradientConfig::default().with_max_iterations(500),
        5,
    )?;
    print_top("Best gradient descent combinations", &stats);
    Ok(())
}

/// Step-neighbor tabu search on the 1D Gramacy & Lee function.
fn gramacy(seed: Option<u64>) -> Result<()> {
    let f = GramacyLee;
    let mut rng = stream(seed);
    let start = f.domain().sample_uniform(&mut rng);
    let generator = StepNeighbors::new(0.05, f.domain());
    let config = TabuConfig::default()
        .with_num_iterations(100)
        .with_tabu_size(10)
        .with_tolerance(1e-9)
        .with_exhaustion(ExhaustionPolicy::Stop);

    let result = TabuRunner::run_from(&f, &generator, start, &config, &mut rng)?;
    info!(best_value = result.best_value, "gramacy & lee search finished");
    println!("best x = {:.5}, f(x) = {:.5}", result.best.x(), result.best_value);
    Ok(())
}

/// Heatmap data for the Langermann surface.
fn surface() -> Result<()> {
    let grid = sample_surface(&Langermann::default(), 200)?;
    let (point, value) = grid.argmin();
    info!(x = point.x(), y = point.y(), value, "grid minimum");

    println!("x,y,f");
    for (i, row) in grid.values.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            println!("{},{},{}", grid.xs[j], grid.ys[i], v);
        }
    }
    Ok(())
}

fn print_top<P: std::fmt::Display>(title: &str, stats: &[AggregateStatistic<P>]) {
    println!("{title}:");
    for s in top_k(stats, DEFAULT_TOP_K) {
        println!("  {s}");
    }
}
