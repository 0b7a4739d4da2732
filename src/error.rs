//! Error type shared by every optimizer and the experiment harness.

use thiserror::Error;

/// Errors raised by optimizer runs and experiment sweeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptError {
    /// A configuration value violates the caller contract.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Every generated neighbor was tabu and none improved the global best.
    #[error("no acceptable candidate at iteration {iteration}: every neighbor is tabu and none beats the best value")]
    NoAcceptableCandidate {
        /// Zero-based iteration at which the neighborhood was exhausted.
        iteration: usize,
    },

    /// A single run inside a sweep failed; the sweep was aborted.
    #[error("run failed for {params}: {source}")]
    RunFailed {
        /// Human-readable hyperparameter combination.
        params: String,
        /// Underlying failure.
        #[source]
        source: Box<OptError>,
    },
}

impl OptError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        OptError::InvalidConfiguration(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, OptError>;
