//! Tabu Search configuration.

use crate::error::{OptError, Result};

/// What to do when every neighbor is tabu and none satisfies aspiration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExhaustionPolicy {
    /// Abort the run with [`OptError::NoAcceptableCandidate`].
    #[default]
    Fail,
    /// Draw a fresh neighbor batch up to `max_attempts` more times, then
    /// fail as with [`ExhaustionPolicy::Fail`].
    Redraw {
        /// Extra batches to draw before giving up.
        max_attempts: usize,
    },
    /// End the run early and return the best point found so far. The
    /// history is then shorter than `num_iterations + 1`.
    Stop,
}

/// Configuration parameters for continuous Tabu Search.
///
/// Defaults reproduce the reference Langermann setup: 1000 iterations,
/// 50 neighbors per iteration, a tabu list of 30 points and σ = 0.8.
///
/// # Examples
///
/// ```
/// use u_localopt::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_num_iterations(300)
///     .with_num_neighbors(10)
///     .with_tabu_size(10)
///     .with_sigma(0.3);
/// assert_eq!(config.num_iterations, 300);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations. The search always consumes the full budget.
    pub num_iterations: usize,
    /// Neighbors generated per iteration.
    pub num_neighbors: usize,
    /// Capacity of the tabu list (FIFO).
    pub tabu_size: usize,
    /// Standard deviation of the Gaussian perturbation.
    pub sigma: f64,
    /// Similarity radius: a candidate closer than this to any tabu point
    /// is tabu.
    pub tolerance: f64,
    /// Resolution of an exhausted neighborhood.
    pub exhaustion: ExhaustionPolicy,
    /// Random seed (None for a fresh, non-reproducible seed).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            num_iterations: 1000,
            num_neighbors: 50,
            tabu_size: 30,
            sigma: 0.8,
            tolerance: 0.01,
            exhaustion: ExhaustionPolicy::Fail,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, n: usize) -> Self {
        self.num_iterations = n;
        self
    }

    /// Sets the number of neighbors generated per iteration.
    pub fn with_num_neighbors(mut self, n: usize) -> Self {
        self.num_neighbors = n;
        self
    }

    /// Sets the tabu list capacity.
    pub fn with_tabu_size(mut self, n: usize) -> Self {
        self.tabu_size = n;
        self
    }

    /// Sets the Gaussian perturbation σ.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the tabu similarity radius.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the exhaustion policy.
    pub fn with_exhaustion(mut self, policy: ExhaustionPolicy) -> Self {
        self.exhaustion = policy;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_iterations == 0 {
            return Err(OptError::invalid("num_iterations must be at least 1"));
        }
        if self.num_neighbors == 0 {
            return Err(OptError::invalid("num_neighbors must be at least 1"));
        }
        if self.tabu_size == 0 {
            return Err(OptError::invalid("tabu_size must be at least 1"));
        }
        if self.sigma <= 0.0 || !self.sigma.is_finite() {
            return Err(OptError::invalid(format!(
                "sigma must be positive and finite, got {}",
                self.sigma
            )));
        }
        if self.tolerance < 0.0 || self.tolerance.is_nan() {
            return Err(OptError::invalid(format!(
                "tolerance must be non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.num_iterations, 1000);
        assert_eq!(config.num_neighbors, 50);
        assert_eq!(config.tabu_size, 30);
        assert!((config.sigma - 0.8).abs() < 1e-12);
        assert!((config.tolerance - 0.01).abs() < 1e-12);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Fail);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_num_iterations(500)
            .with_num_neighbors(30)
            .with_tabu_size(10)
            .with_sigma(0.5)
            .with_tolerance(0.05)
            .with_exhaustion(ExhaustionPolicy::Redraw { max_attempts: 3 })
            .with_seed(123);

        assert_eq!(config.num_iterations, 500);
        assert_eq!(config.num_neighbors, 30);
        assert_eq!(config.tabu_size, 10);
        assert!((config.sigma - 0.5).abs() < 1e-12);
        assert!((config.tolerance - 0.05).abs() < 1e-12);
        assert_eq!(config.exhaustion, ExhaustionPolicy::Redraw { max_attempts: 3 });
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_ok() {
        assert!(TabuConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        assert!(TabuConfig::default().with_num_iterations(0).validate().is_err());
        assert!(TabuConfig::default().with_num_neighbors(0).validate().is_err());
        assert!(TabuConfig::default().with_tabu_size(0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_sigma() {
        for sigma in [0.0, -0.3, f64::NAN, f64::INFINITY] {
            let err = TabuConfig::default().with_sigma(sigma).validate();
            assert!(
                matches!(err, Err(OptError::InvalidConfiguration(_))),
                "sigma {sigma} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_negative_tolerance() {
        assert!(TabuConfig::default().with_tolerance(-1.0).validate().is_err());
    }
}
