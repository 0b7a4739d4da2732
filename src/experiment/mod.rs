//! Statistical evaluation harness.
//!
//! Repeats stochastic runs, summarizes their final values, and sweeps
//! hyperparameter grids with a ranked report of the best combinations.

mod grid;
mod harness;
mod stats;

pub use grid::{GradientGrid, GradientParams, TabuGrid, TabuParams};
pub use harness::{rank, top_k, AggregateStatistic, ExperimentRunner, RunBatch, DEFAULT_TOP_K};
pub use stats::Summary;
