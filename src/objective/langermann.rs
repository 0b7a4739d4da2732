//! Langermann function in two dimensions.

use std::f64::consts::PI;

use super::types::{Domain, Objective};

/// Fixed parameter arrays of the Langermann function.
#[derive(Debug, Clone, PartialEq)]
pub struct LangermannParams {
    /// First coordinate of each attractor.
    pub a: [f64; 5],
    /// Second coordinate of each attractor.
    pub b: [f64; 5],
    /// Weight of each attractor.
    pub c: [f64; 5],
}

impl Default for LangermannParams {
    fn default() -> Self {
        Self {
            a: [3.0, 5.0, 2.0, 1.0, 7.0],
            b: [5.0, 2.0, 1.0, 4.0, 9.0],
            c: [1.0, 2.0, 5.0, 2.0, 3.0],
        }
    }
}

/// Langermann function over `[0, 10]^2`, in minimization form:
///
/// `f(x, y) = -Σ c_i · exp(-r_i / π) · cos(π · r_i)`, with
/// `r_i = (x - a_i)² + (y - b_i)²`.
///
/// Global minimum ≈ -5.1621 at (2.00299, 1.006).
///
/// # Examples
///
/// ```
/// use u_localopt::objective::{Langermann, Objective};
///
/// let f = Langermann::default();
/// assert!((f.evaluate(&[2.00299, 1.006]) + 5.1621).abs() < 1e-2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Langermann {
    params: LangermannParams,
}

impl Langermann {
    /// Creates the function with custom parameter arrays.
    pub fn with_params(params: LangermannParams) -> Self {
        Self { params }
    }
}

impl Objective for Langermann {
    fn evaluate(&self, position: &[f64]) -> f64 {
        debug_assert_eq!(position.len(), 2, "Langermann is two-dimensional");
        let (x, y) = (position[0], position[1]);
        let p = &self.params;

        let total: f64 = (0..5)
            .map(|i| {
                let dx = x - p.a[i];
                let dy = y - p.b[i];
                let sq = dx * dx + dy * dy;
                p.c[i] * (-sq / PI).exp() * (sq * PI).cos()
            })
            .sum();

        -total
    }

    fn domain(&self) -> Domain {
        Domain::new(0.0, 10.0, 2)
    }
}
