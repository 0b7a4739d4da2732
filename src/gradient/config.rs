//! Gradient descent configuration.

use crate::error::{OptError, Result};

/// Configuration for finite-difference gradient descent.
///
/// # Examples
///
/// ```
/// use u_localopt::gradient::GradientConfig;
///
/// let config = GradientConfig::default()
///     .with_learning_rate(0.01)
///     .with_max_iterations(500);
/// assert_eq!(config.max_iterations, 500);
/// assert!((config.h - 1e-4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientConfig {
    /// Step size η applied to the gradient.
    pub learning_rate: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Stop once the gradient norm falls below this.
    pub tolerance: f64,
    /// Finite-difference step.
    pub h: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.005,
            max_iterations: 100,
            tolerance: 1e-7,
            h: 1e-4,
        }
    }
}

impl GradientConfig {
    /// Sets the learning rate η.
    pub fn with_learning_rate(mut self, eta: f64) -> Self {
        self.learning_rate = eta;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the gradient-norm stopping tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the finite-difference step.
    pub fn with_h(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.learning_rate <= 0.0 || !self.learning_rate.is_finite() {
            return Err(OptError::invalid(format!(
                "learning_rate must be positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_iterations == 0 {
            return Err(OptError::invalid("max_iterations must be at least 1"));
        }
        if self.tolerance <= 0.0 || self.tolerance.is_nan() {
            return Err(OptError::invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.h <= 0.0 || !self.h.is_finite() {
            return Err(OptError::invalid(format!("h must be positive, got {}", self.h)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GradientConfig::default();
        assert!((config.learning_rate - 0.005).abs() < 1e-12);
        assert_eq!(config.max_iterations, 100);
        assert!((config.tolerance - 1e-7).abs() < 1e-15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(GradientConfig::default().with_learning_rate(0.0).validate().is_err());
        assert!(GradientConfig::default().with_max_iterations(0).validate().is_err());
        assert!(GradientConfig::default().with_tolerance(-1e-3).validate().is_err());
        assert!(GradientConfig::default().with_h(0.0).validate().is_err());
    }
}
