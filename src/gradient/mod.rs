//! Gradient descent with finite-difference gradients.
//!
//! A deterministic local refiner, typically started from the best point
//! of a Tabu Search run. Gradients are approximated by central
//! differences, so any [`Objective`](crate::objective::Objective) works
//! without an analytic derivative.

mod config;
mod runner;

pub use config::GradientConfig;
pub use runner::{numerical_gradient, GradientResult, GradientRunner};
