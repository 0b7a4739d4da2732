//! Hyperparameter grids and their Cartesian products.
//!
//! Combinations are produced lazily in nested-loop order: the first
//! value list is the outermost loop.

use std::fmt;

use crate::error::{OptError, Result};
use crate::gradient::GradientConfig;
use crate::tabu::TabuConfig;

/// One Tabu Search hyperparameter combination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuParams {
    /// Iteration budget.
    pub num_iterations: usize,
    /// Neighbors generated per iteration.
    pub num_neighbors: usize,
    /// Tabu list capacity.
    pub tabu_size: usize,
    /// Gaussian perturbation σ.
    pub sigma: f64,
}

impl TabuParams {
    /// Overrides the swept fields of `base`.
    pub fn apply(&self, base: &TabuConfig) -> TabuConfig {
        base.clone()
            .with_num_iterations(self.num_iterations)
            .with_num_neighbors(self.num_neighbors)
            .with_tabu_size(self.tabu_size)
            .with_sigma(self.sigma)
    }
}

impl fmt::Display for TabuParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "iters={}, neighbors={}, tabu={}, sigma={}",
            self.num_iterations, self.num_neighbors, self.tabu_size, self.sigma
        )
    }
}

/// Value lists for a Tabu Search sweep.
///
/// The default grid has 3 × 3 × 3 × 4 = 108 combinations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuGrid {
    /// Iteration budgets (outermost loop).
    pub num_iterations: Vec<usize>,
    /// Neighbor counts.
    pub num_neighbors: Vec<usize>,
    /// Tabu list capacities.
    pub tabu_sizes: Vec<usize>,
    /// Perturbation σ values (innermost loop).
    pub sigmas: Vec<f64>,
}

impl Default for TabuGrid {
    fn default() -> Self {
        Self {
            num_iterations: vec![300, 500, 1000],
            num_neighbors: vec![10, 30, 50],
            tabu_sizes: vec![10, 30, 50],
            sigmas: vec![0.1, 0.3, 0.5, 0.8],
        }
    }
}

impl TabuGrid {
    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.num_iterations.len() * self.num_neighbors.len() * self.tabu_sizes.len() * self.sigmas.len()
    }

    /// Returns `true` if any value list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rejects grids with an empty value list.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(OptError::invalid("every tabu grid value list must be non-empty"));
        }
        Ok(())
    }

    /// Lazy Cartesian product of the value lists.
    pub fn combinations(&self) -> impl Iterator<Item = TabuParams> + '_ {
        self.num_iterations.iter().flat_map(move |&num_iterations| {
            self.num_neighbors.iter().flat_map(move |&num_neighbors| {
                self.tabu_sizes.iter().flat_map(move |&tabu_size| {
                    self.sigmas.iter().map(move |&sigma| TabuParams {
                        num_iterations,
                        num_neighbors,
                        tabu_size,
                        sigma,
                    })
                })
            })
        })
    }
}

/// One gradient descent hyperparameter combination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientParams {
    /// Learning rate η.
    pub learning_rate: f64,
    /// Gradient-norm stopping tolerance.
    pub tolerance: f64,
    /// Finite-difference step.
    pub h: f64,
}

impl GradientParams {
    /// Overrides the swept fields of `base`.
    pub fn apply(&self, base: &GradientConfig) -> GradientConfig {
        base.clone()
            .with_learning_rate(self.learning_rate)
            .with_tolerance(self.tolerance)
            .with_h(self.h)
    }
}

impl fmt::Display for GradientParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "eta={}, tol={:e}, h={:e}",
            self.learning_rate, self.tolerance, self.h
        )
    }
}

/// Value lists for a gradient descent sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientGrid {
    /// Learning rates (outermost loop).
    pub learning_rates: Vec<f64>,
    /// Stopping tolerances.
    pub tolerances: Vec<f64>,
    /// Finite-difference steps (innermost loop).
    pub hs: Vec<f64>,
}

impl Default for GradientGrid {
    fn default() -> Self {
        Self {
            learning_rates: vec![0.001, 0.005, 0.01, 0.02],
            tolerances: vec![1e-3, 1e-5, 1e-7],
            hs: vec![1e-4, 1e-5, 1e-6],
        }
    }
}

impl GradientGrid {
    /// Number of combinations.
    pub fn len(&self) -> usize {
        self.learning_rates.len() * self.tolerances.len() * self.hs.len()
    }

    /// Returns `true` if any value list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rejects grids with an empty value list.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(OptError::invalid(
                "every gradient grid value list must be non-empty",
            ));
        }
        Ok(())
    }

    /// Lazy Cartesian product of the value lists.
    pub fn combinations(&self) -> impl Iterator<Item = GradientParams> + '_ {
        self.learning_rates.iter().flat_map(move |&learning_rate| {
            self.tolerances.iter().flat_map(move |&tolerance| {
                self.hs.iter().map(move |&h| GradientParams {
                    learning_rate,
                    tolerance,
                    h,
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tabu_grid_size() {
        let grid = TabuGrid::default();
        assert_eq!(grid.len(), 108);
        assert_eq!(grid.combinations().count(), 108);
    }

    #[test]
    fn test_tabu_grid_nested_loop_order() {
        let grid = TabuGrid {
            num_iterations: vec![1, 2],
            num_neighbors: vec![3],
            tabu_sizes: vec![4],
            sigmas: vec![0.1, 0.2],
        };
        let combos: Vec<(usize, f64)> = grid
            .combinations()
            .map(|p| (p.num_iterations, p.sigma))
            .collect();
        assert_eq!(combos, vec![(1, 0.1), (1, 0.2), (2, 0.1), (2, 0.2)]);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let grid = TabuGrid {
            sigmas: vec![],
            ..TabuGrid::default()
        };
        assert!(grid.is_empty());
        assert_eq!(grid.combinations().count(), 0);
        assert!(grid.validate().is_err());
    }

    #[test]
    fn test_tabu_params_apply_keeps_base_fields() {
        let base = TabuConfig::default().with_tolerance(0.05).with_seed(9);
        let params = TabuParams {
            num_iterations: 300,
            num_neighbors: 10,
            tabu_size: 50,
            sigma: 0.1,
        };
        let config = params.apply(&base);
        assert_eq!(config.num_iterations, 300);
        assert_eq!(config.tabu_size, 50);
        assert!((config.tolerance - 0.05).abs() < 1e-12);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_tabu_params_display() {
        let params = TabuParams {
            num_iterations: 500,
            num_neighbors: 30,
            tabu_size: 10,
            sigma: 0.3,
        };
        assert_eq!(params.to_string(), "iters=500, neighbors=30, tabu=10, sigma=0.3");
    }

    #[test]
    fn test_default_gradient_grid() {
        let grid = GradientGrid::default();
        assert_eq!(grid.len(), 36);
        let first = grid.combinations().next().unwrap();
        assert_eq!(
            first,
            GradientParams {
                learning_rate: 0.001,
                tolerance: 1e-3,
                h: 1e-4
            }
        );
    }
}
