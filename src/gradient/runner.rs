//! Gradient descent loop.

use tracing::debug;

use super::config::GradientConfig;
use crate::error::Result;
use crate::objective::{Objective, Point};

/// Result of a gradient descent run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientResult {
    /// Final point.
    pub point: Point,
    /// Objective value at `point`.
    pub value: f64,
    /// Visited points with their values, one entry per iteration.
    pub history: Vec<(Point, f64)>,
    /// Iterations executed (equals `history.len()`).
    pub iterations: usize,
    /// Whether the gradient norm fell below the tolerance.
    pub converged: bool,
}

/// Central-difference gradient of `objective` at `point`.
pub fn numerical_gradient<O: Objective>(objective: &O, point: &[f64], h: f64) -> Vec<f64> {
    let mut probe = point.to_vec();
    (0..point.len())
        .map(|k| {
            probe[k] = point[k] + h;
            let forward = objective.evaluate(&probe);
            probe[k] = point[k] - h;
            let backward = objective.evaluate(&probe);
            probe[k] = point[k];
            (forward - backward) / (2.0 * h)
        })
        .collect()
}

/// Executes gradient descent.
pub struct GradientRunner;

impl GradientRunner {
    /// Runs gradient descent from `start`.
    ///
    /// Iterates `x ← x - η·∇f(x)` until the gradient norm drops below
    /// `config.tolerance` or the iteration budget is spent. Points are not
    /// clamped to the objective's domain.
    pub fn run<O: Objective>(
        objective: &O,
        start: &Point,
        config: &GradientConfig,
    ) -> Result<GradientResult> {
        config.validate()?;

        let mut current = start.as_slice().to_vec();
        let mut history = Vec::new();
        let mut converged = false;

        for i in 0..config.max_iterations {
            let grad = numerical_gradient(objective, &current, config.h);
            let grad_norm = grad.iter().map(|g| g * g).sum::<f64>().sqrt();

            let value = objective.evaluate(&current);
            history.push((Point::new(current.clone()), value));

            if i % 50 == 0 {
                debug!(iteration = i, value, grad_norm, point = ?current, "gradient descent progress");
            }

            if grad_norm < config.tolerance {
                debug!(iteration = i, "gradient small enough, stopping");
                converged = true;
                break;
            }

            for (x, g) in current.iter_mut().zip(&grad) {
                *x -= config.learning_rate * g;
            }
        }

        let value = objective.evaluate(&current);
        Ok(GradientResult {
            point: Point::new(current),
            value,
            iterations: history.len(),
            history,
            converged,
        })
    }
}
