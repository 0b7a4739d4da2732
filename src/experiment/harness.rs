//! Repeated-run sampling and hyperparameter sweeps.
//!
//! Runs execute sequentially and consume one random stream in order, so a
//! seeded stream makes a whole sweep reproducible. A failed run aborts
//! the sweep with [`OptError::RunFailed`] naming the combination.

use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use super::grid::{GradientGrid, GradientParams, TabuGrid, TabuParams};
use super::stats::Summary;
use crate::error::{OptError, Result};
use crate::gradient::{GradientConfig, GradientRunner};
use crate::objective::{Objective, Point};
use crate::tabu::{RunResult, TabuConfig, TabuRunner};

/// Number of combinations reported by convention.
pub const DEFAULT_TOP_K: usize = 5;

/// Every run of a repeated Tabu Search experiment plus its summary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunBatch {
    /// Individual runs in execution order.
    pub results: Vec<RunResult>,
    /// Statistics of the runs' `best_value`s.
    pub summary: Summary,
}

/// Aggregate outcome of one hyperparameter combination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AggregateStatistic<P> {
    /// The hyperparameter combination.
    pub params: P,
    /// Mean final value across repetitions.
    pub mean_value: f64,
    /// Population standard deviation of the final values.
    pub std_value: f64,
    /// Mean iterations executed; only for optimizers that can stop early.
    pub mean_iterations: Option<f64>,
}

impl<P: fmt::Display> fmt::Display for AggregateStatistic<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | mean f: {:.6}, std: {:.4e}",
            self.params, self.mean_value, self.std_value
        )?;
        if let Some(iters) = self.mean_iterations {
            write!(f, ", iters: {iters:.1}")?;
        }
        Ok(())
    }
}

/// Sorts statistics ascending by `mean_value` (lower is better).
///
/// The sort is stable, so ties keep grid order.
pub fn rank<P>(stats: &mut [AggregateStatistic<P>]) {
    stats.sort_by(|a, b| a.mean_value.total_cmp(&b.mean_value));
}

/// The first `k` entries of a ranked slice.
pub fn top_k<P>(stats: &[AggregateStatistic<P>], k: usize) -> &[AggregateStatistic<P>] {
    &stats[..k.min(stats.len())]
}

fn check_repetitions(repetitions: usize) -> Result<()> {
    if repetitions == 0 {
        return Err(OptError::invalid("repetitions must be at least 1"));
    }
    Ok(())
}

/// Runs every combination `repetitions` times and ranks the outcomes.
///
/// `run` returns the final value of one run and, when the optimizer can
/// stop early, its iteration count.
fn sweep_with<P, I, F>(combos: I, repetitions: usize, mut run: F) -> Result<Vec<AggregateStatistic<P>>>
where
    P: fmt::Display,
    I: IntoIterator<Item = P>,
    F: FnMut(&P) -> Result<(f64, Option<usize>)>,
{
    check_repetitions(repetitions)?;

    let mut stats = Vec::new();
    for params in combos {
        info!(%params, "testing combination");

        let mut values = Vec::with_capacity(repetitions);
        let mut iterations = Vec::with_capacity(repetitions);
        for _ in 0..repetitions {
            let (value, iters) = run(&params).map_err(|e| {
                warn!(%params, error = %e, "run failed, aborting sweep");
                OptError::RunFailed {
                    params: params.to_string(),
                    source: Box::new(e),
                }
            })?;
            values.push(value);
            if let Some(n) = iters {
                iterations.push(n as f64);
            }
        }

        let summary = Summary::from_sample(&values)?;
        let mean_iterations = if iterations.is_empty() {
            None
        } else {
            Some(Summary::from_sample(&iterations)?.mean)
        };
        debug!(%params, mean = summary.mean, std = summary.std, "combination done");

        stats.push(AggregateStatistic {
            params,
            mean_value: summary.mean,
            std_value: summary.std,
            mean_iterations,
        });
    }

    rank(&mut stats);
    Ok(stats)
}

/// Drives repeated optimizer runs.
pub struct ExperimentRunner;

impl ExperimentRunner {
    /// Runs Tabu Search `repetitions` times, each from an independent
    /// uniform start drawn from `rng`.
    ///
    /// `config.seed` is ignored; the stream is supplied by the caller.
    pub fn run_many<O, R>(
        objective: &O,
        config: &TabuConfig,
        repetitions: usize,
        rng: &mut R,
    ) -> Result<RunBatch>
    where
        O: Objective,
        R: Rng,
    {
        check_repetitions(repetitions)?;

        let params = TabuParams {
            num_iterations: config.num_iterations,
            num_neighbors: config.num_neighbors,
            tabu_size: config.tabu_size,
            sigma: config.sigma,
        };

        let mut results = Vec::with_capacity(repetitions);
        for run in 0..repetitions {
            let result = TabuRunner::run_with_rng(objective, config, rng).map_err(|e| {
                warn!(%params, run = run + 1, error = %e, "run failed");
                OptError::RunFailed {
                    params: params.to_string(),
                    source: Box::new(e),
                }
            })?;
            debug!(run = run + 1, best_value = result.best_value, "run finished");
            results.push(result);
        }

        let values: Vec<f64> = results.iter().map(|r| r.best_value).collect();
        let summary = Summary::from_sample(&values)?;
        Ok(RunBatch { results, summary })
    }

    /// Sweeps Tabu Search hyperparameters over `grid`.
    ///
    /// Fields not covered by the grid (tolerance, exhaustion policy) come
    /// from `base`. Results are ranked ascending by mean best value.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::experiment::{ExperimentRunner, TabuGrid};
    /// use u_localopt::objective::Langermann;
    /// use u_localopt::tabu::TabuConfig;
    /// use u_numflow::random::create_rng;
    ///
    /// let grid = TabuGrid {
    ///     num_iterations: vec![20],
    ///     num_neighbors: vec![5, 10],
    ///     tabu_sizes: vec![5],
    ///     sigmas: vec![0.3, 0.8],
    /// };
    /// let mut rng = create_rng(42);
    /// let stats = ExperimentRunner::sweep_tabu(
    ///     &Langermann::default(),
    ///     &grid,
    ///     &TabuConfig::default(),
    ///     3,
    ///     &mut rng,
    /// )
    /// .unwrap();
    /// assert_eq!(stats.len(), 4);
    /// assert!(stats[0].mean_value <= stats[3].mean_value);
    /// ```
    pub fn sweep_tabu<O, R>(
        objective: &O,
        grid: &TabuGrid,
        base: &TabuConfig,
        repetitions: usize,
        rng: &mut R,
    ) -> Result<Vec<AggregateStatistic<TabuParams>>>
    where
        O: Objective,
        R: Rng,
    {
        grid.validate()?;
        sweep_with(grid.combinations(), repetitions, |params: &TabuParams| {
            let config = params.apply(base);
            let result = TabuRunner::run_with_rng(objective, &config, rng)?;
            Ok((result.best_value, None))
        })
    }

    /// Sweeps gradient descent hyperparameters over `grid`, every run
    /// starting from `start`.
    ///
    /// The iteration budget comes from `base`. Gradient descent is
    /// deterministic, so repetitions of one combination agree.
    pub fn sweep_gradient<O: Objective>(
        objective: &O,
        start: &Point,
        grid: &GradientGrid,
        base: &GradientConfig,
        repetitions: usize,
    ) -> Result<Vec<AggregateStatistic<GradientParams>>> {
        grid.validate()?;
        sweep_with(grid.combinations(), repetitions, |params: &GradientParams| {
            let config = params.apply(base);
            let result = GradientRunner::run(objective, start, &config)?;
            Ok((result.value, Some(result.iterations)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Domain, FnObjective, Langermann};
    use u_numflow::random::create_rng;

    fn small_grid() -> TabuGrid {
        TabuGrid {
            num_iterations: vec![30],
            num_neighbors: vec![5, 15],
            tabu_sizes: vec![5],
            sigmas: vec![0.1, 0.8],
        }
    }

    fn stat(mean_value: f64) -> AggregateStatistic<&'static str> {
        AggregateStatistic {
            params: "p",
            mean_value,
            std_value: 0.0,
            mean_iterations: None,
        }
    }

    #[test]
    fn test_run_many_summary() {
        let config = TabuConfig::default()
            .with_num_iterations(30)
            .with_num_neighbors(10);
        let mut rng = create_rng(42);
        let batch =
            ExperimentRunner::run_many(&Langermann::default(), &config, 8, &mut rng).unwrap();

        assert_eq!(batch.results.len(), 8);
        assert_eq!(batch.summary.count, 8);
        let values: Vec<f64> = batch.results.iter().map(|r| r.best_value).collect();
        assert_eq!(batch.summary, Summary::from_sample(&values).unwrap());
        // Independent starts.
        assert_ne!(batch.results[0].initial_point, batch.results[1].initial_point);
    }

    #[test]
    fn test_run_many_rejects_zero_repetitions() {
        let mut rng = create_rng(1);
        let result =
            ExperimentRunner::run_many(&Langermann::default(), &TabuConfig::default(), 0, &mut rng);
        assert!(matches!(result, Err(OptError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_run_many_failure_names_config() {
        let flat = FnObjective::new(Domain::new(0.0, 10.0, 2), |_: &[f64]| 0.0);
        let config = TabuConfig::default()
            .with_num_iterations(5)
            .with_num_neighbors(1)
            .with_tabu_size(3)
            .with_sigma(1e-9);
        let mut rng = create_rng(3);
        let err = ExperimentRunner::run_many(&flat, &config, 2, &mut rng).unwrap_err();

        match err {
            OptError::RunFailed { params, source } => {
                assert_eq!(params, "iters=5, neighbors=1, tabu=3, sigma=0.000000001");
                assert_eq!(*source, OptError::NoAcceptableCandidate { iteration: 0 });
            }
            other => panic!("expected RunFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_sweep_tabu_ranked_ascending() {
        let mut rng = create_rng(7);
        let stats = ExperimentRunner::sweep_tabu(
            &Langermann::default(),
            &small_grid(),
            &TabuConfig::default(),
            4,
            &mut rng,
        )
        .unwrap();

        assert_eq!(stats.len(), 4);
        for w in stats.windows(2) {
            assert!(w[0].mean_value <= w[1].mean_value);
        }
        assert!(stats.iter().all(|s| s.mean_iterations.is_none()));
        assert!(stats.iter().all(|s| s.std_value >= 0.0));
    }

    #[test]
    fn test_sweep_tabu_reproducible_with_seeded_stream() {
        let run = |seed| {
            let mut rng = create_rng(seed);
            ExperimentRunner::sweep_tabu(
                &Langermann::default(),
                &small_grid(),
                &TabuConfig::default(),
                2,
                &mut rng,
            )
            .unwrap()
        };
        assert_eq!(run(99), run(99));
    }

    #[test]
    fn test_sweep_aborts_naming_combination() {
        // A flat surface with a vanishing sigma exhausts the neighborhood.
        let flat = FnObjective::new(Domain::new(0.0, 10.0, 2), |_: &[f64]| 0.0);
        let grid = TabuGrid {
            num_iterations: vec![5],
            num_neighbors: vec![1],
            tabu_sizes: vec![3],
            sigmas: vec![1e-9],
        };
        let mut rng = create_rng(3);
        let err = ExperimentRunner::sweep_tabu(&flat, &grid, &TabuConfig::default(), 2, &mut rng)
            .unwrap_err();

        match err {
            OptError::RunFailed { params, source } => {
                assert_eq!(params, "iters=5, neighbors=1, tabu=3, sigma=0.000000001");
                assert_eq!(*source, OptError::NoAcceptableCandidate { iteration: 0 });
            }
            other => panic!("expected RunFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_sweep_invalid_combination_reported() {
        let grid = TabuGrid {
            sigmas: vec![0.0],
            ..small_grid()
        };
        let mut rng = create_rng(3);
        let err = ExperimentRunner::sweep_tabu(
            &Langermann::default(),
            &grid,
            &TabuConfig::default(),
            1,
            &mut rng,
        )
        .unwrap_err();
        assert!(
            matches!(&err, OptError::RunFailed { source, .. } if matches!(**source, OptError::InvalidConfiguration(_))),
            "got {err:?}"
        );
    }

    #[test]
    fn test_sweep_gradient_reports_iterations() {
        let grid = GradientGrid {
            learning_rates: vec![0.001, 0.005],
            tolerances: vec![1e-3],
            hs: vec![1e-4],
        };
        let base = GradientConfig::default().with_max_iterations(200);
        let stats = ExperimentRunner::sweep_gradient(
            &Langermann::default(),
            &Point::xy(2.7932, 1.6035),
            &grid,
            &base,
            3,
        )
        .unwrap();

        assert_eq!(stats.len(), 2);
        for s in &stats {
            // Deterministic optimizer: repetitions agree exactly.
            assert_eq!(s.std_value, 0.0);
            let iters = s.mean_iterations.unwrap();
            assert!(iters >= 1.0 && iters <= 200.0);
        }
        assert!(stats[0].mean_value <= stats[1].mean_value);
    }

    #[test]
    fn test_rank_and_top_k() {
        let mut stats = vec![stat(3.0), stat(-1.0), stat(2.0), stat(-4.0)];
        rank(&mut stats);
        let means: Vec<f64> = stats.iter().map(|s| s.mean_value).collect();
        assert_eq!(means, vec![-4.0, -1.0, 2.0, 3.0]);

        assert_eq!(top_k(&stats, 2).len(), 2);
        assert_eq!(top_k(&stats, DEFAULT_TOP_K).len(), 4);
    }

    #[test]
    fn test_aggregate_display() {
        let s = AggregateStatistic {
            params: GradientParams {
                learning_rate: 0.01,
                tolerance: 1e-5,
                h: 1e-6,
            },
            mean_value: -5.162126,
            std_value: 0.0,
            mean_iterations: Some(42.0),
        };
        let text = s.to_string();
        assert!(text.starts_with("eta=0.01, tol=1e-5, h=1e-6 |"), "got {text}");
        assert!(text.ends_with("iters: 42.0"), "got {text}");
    }
}
