//! Gramacy & Lee (2012) one-dimensional test function.

use std::f64::consts::PI;

use super::types::{Domain, Objective};

/// `f(x) = sin(10πx) / (2x) + (x - 1)^4` over `[0.5, 2.5]`.
///
/// Global minimum ≈ -0.869011 at x ≈ 0.548563.
#[derive(Debug, Clone, Copy, Default)]
pub struct GramacyLee;

impl Objective for GramacyLee {
    fn evaluate(&self, position: &[f64]) -> f64 {
        debug_assert_eq!(position.len(), 1, "Gramacy & Lee is one-dimensional");
        let x = position[0];
        (10.0 * PI * x).sin() / (2.0 * x) + (x - 1.0).powi(4)
    }

    fn domain(&self) -> Domain {
        Domain::new(0.5, 2.5, 1)
    }
}
