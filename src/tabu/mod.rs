//! Tabu Search (TS) over a continuous box domain.
//!
//! A single-solution trajectory metaheuristic. Each iteration moves to the
//! best admissible Gaussian neighbor, even when it is worse than the
//! current point; a short-term memory of recently visited points (the tabu
//! list) forbids revisiting their vicinity unless the move yields a new
//! global best (aspiration).
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod neighbors;
mod runner;

pub use config::{ExhaustionPolicy, TabuConfig};
pub use memory::{is_tabu, TabuList};
pub use neighbors::{gaussian_neighbors, GaussianNeighbors, NeighborGenerator, StepNeighbors};
pub use runner::{RunResult, TabuRunner};
