//! Continuous local-search experimentation toolkit.
//!
//! - **Tabu Search (TS)**: trajectory search over a box domain with
//!   Gaussian-perturbation neighborhoods, a proximity-based tabu list and
//!   an aspiration criterion.
//! - **Gradient descent**: finite-difference refinement, typically started
//!   from the best Tabu Search point.
//! - **Experiment harness**: repeated-run statistics and hyperparameter
//!   sweeps ranked by mean final value.
//! - **Objectives**: the Langermann (2D) and Gramacy & Lee (1D) benchmark
//!   surfaces, plus an adapter for arbitrary closures.
//!
//! Every optimizer minimizes. Randomness is an explicit, injectable
//! stream; seeding it makes runs and whole sweeps reproducible.
//!
//! The library emits `tracing` events and never installs a subscriber.

pub mod error;
pub mod experiment;
pub mod gradient;
pub mod objective;
pub mod tabu;

pub use error::{OptError, Result};
