//! Sample statistics over repeated runs.

use std::fmt;

use u_numflow::stats;

use crate::error::{OptError, Result};

/// Descriptive statistics of a sample of final objective values.
///
/// `std` is the population standard deviation (divides by `n`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Sample size.
    pub count: usize,
}

impl Summary {
    /// Summarizes a non-empty sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::experiment::Summary;
    ///
    /// let s = Summary::from_sample(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(s.mean, 2.0);
    /// assert!((s.std - 0.816496580927726).abs() < 1e-12);
    /// ```
    pub fn from_sample(sample: &[f64]) -> Result<Self> {
        let empty = || OptError::invalid("cannot summarize an empty sample");
        let mean = stats::mean(sample).ok_or_else(empty)?;
        let std = stats::population_std_dev(sample).ok_or_else(empty)?;
        let min = stats::min(sample).ok_or_else(empty)?;
        let max = stats::max(sample).ok_or_else(empty)?;

        Ok(Self {
            mean,
            std,
            min,
            max,
            count: sample.len(),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} mean={:.6} std={:.4e} min={:.6} max={:.6}",
            self.count, self.mean, self.std, self.min, self.max
        )
    }
}
