//! Tabu Search execution engine over a continuous box domain.
//!
//! # Algorithm
//!
//! 1. Draw the starting point uniformly in the domain; it seeds the tabu
//!    list and the best-value history
//! 2. At each iteration:
//!    a. Generate `num_neighbors` Gaussian perturbations of the current point
//!    b. Scan them in generation order: a non-tabu candidate replaces the
//!       running choice when it beats the running choice; a tabu candidate
//!       replaces it only when it beats the global best (aspiration)
//!    c. Move to the chosen candidate, even if it is worse than the current
//!       point, and push it onto the tabu list
//!    d. Update the global best and append it to the history
//! 3. Terminate after exactly `num_iterations` iterations
//!
//! There is no stagnation stop: the full iteration budget is always spent
//! unless the neighborhood is exhausted under [`ExhaustionPolicy::Stop`].
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use rand::Rng;
use tracing::{debug, trace, warn};
use u_numflow::random::create_rng;

use super::config::{ExhaustionPolicy, TabuConfig};
use super::memory::TabuList;
use super::neighbors::{GaussianNeighbors, NeighborGenerator};
use crate::error::{OptError, Result};
use crate::objective::{Objective, Point};

/// Result of a Tabu Search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunResult {
    /// Best point found.
    pub best: Point,
    /// Objective value at `best`.
    pub best_value: f64,
    /// Best value so far, one entry per iteration plus the initial value.
    pub history: Vec<f64>,
    /// Starting point of the run.
    pub initial_point: Point,
}

/// Mutable state of one run. Never shared between runs.
struct SearchState {
    current: Point,
    current_value: f64,
    best: Point,
    best_value: f64,
    history: Vec<f64>,
}

impl SearchState {
    fn new(start: Point, value: f64, num_iterations: usize) -> Self {
        let mut history = Vec::with_capacity(num_iterations + 1);
        history.push(value);
        Self {
            current: start.clone(),
            current_value: value,
            best: start,
            best_value: value,
            history,
        }
    }

    fn advance(&mut self, next: Point, value: f64) {
        self.current = next;
        self.current_value = value;
        if self.current_value < self.best_value {
            self.best = self.current.clone();
            self.best_value = self.current_value;
        }
        self.history.push(self.best_value);
    }
}

/// Picks the accepted candidate from a scored batch.
///
/// A non-tabu candidate competes with the running choice; a tabu candidate
/// must beat `best_value`. Returns `None` when every candidate is tabu and
/// none beats `best_value`.
fn select_candidate(
    scored: Vec<(Point, f64)>,
    tabu: &TabuList,
    best_value: f64,
) -> Option<(Point, f64)> {
    let mut selected = None;
    let mut selected_value = f64::INFINITY;

    for (point, value) in scored {
        let accept = if tabu.contains(&point) {
            value < best_value
        } else {
            value < selected_value
        };
        if accept {
            selected_value = value;
            selected = Some((point, value));
        }
    }

    selected
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search with a random stream derived from `config.seed`.
    ///
    /// Without a seed the stream is freshly seeded and runs are not
    /// reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localopt::objective::Langermann;
    /// use u_localopt::tabu::{TabuConfig, TabuRunner};
    ///
    /// let config = TabuConfig::default()
    ///     .with_num_iterations(50)
    ///     .with_num_neighbors(10)
    ///     .with_seed(42);
    /// let result = TabuRunner::run(&Langermann::default(), &config).unwrap();
    /// assert_eq!(result.history.len(), 51);
    /// ```
    pub fn run<O: Objective>(objective: &O, config: &TabuConfig) -> Result<RunResult> {
        let mut rng = match config.seed {
            Some(s) => create_rng(s),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(objective, config, &mut rng)
    }

    /// Runs Tabu Search on an injected random stream.
    ///
    /// The starting point is drawn uniformly from the objective's domain
    /// and neighbors are Gaussian perturbations with `config.sigma`.
    pub fn run_with_rng<O, R>(objective: &O, config: &TabuConfig, rng: &mut R) -> Result<RunResult>
    where
        O: Objective,
        R: Rng,
    {
        config.validate()?;
        let domain = objective.domain();
        domain.validate()?;

        let start = domain.sample_uniform(rng);
        let generator = GaussianNeighbors::new(config.sigma, domain);
        Self::run_from(objective, &generator, start, config, rng)
    }

    /// Runs Tabu Search from an explicit starting point with any neighbor
    /// generator.
    pub fn run_from<O, G, R>(
        objective: &O,
        generator: &G,
        start: Point,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<RunResult>
    where
        O: Objective,
        G: NeighborGenerator,
        R: Rng,
    {
        config.validate()?;

        let initial_point = start.clone();
        let start_value = objective.evaluate(start.as_slice());
        debug!(
            start = ?initial_point.as_slice(),
            start_value,
            iterations = config.num_iterations,
            neighbors = config.num_neighbors,
            "tabu search started"
        );

        let mut tabu = TabuList::new(config.tabu_size, config.tolerance);
        tabu.push(start.clone());
        let mut state = SearchState::new(start, start_value, config.num_iterations);

        'search: for iteration in 0..config.num_iterations {
            let mut redraws = 0;
            let (next, next_value) = loop {
                let scored: Vec<(Point, f64)> = generator
                    .generate(&state.current, config.num_neighbors, rng)
                    .into_iter()
                    .map(|p| {
                        let v = objective.evaluate(p.as_slice());
                        (p, v)
                    })
                    .collect();

                if let Some(chosen) = select_candidate(scored, &tabu, state.best_value) {
                    break chosen;
                }

                match config.exhaustion {
                    ExhaustionPolicy::Redraw { max_attempts } if redraws < max_attempts => {
                        redraws += 1;
                        warn!(iteration, redraws, "neighborhood exhausted, redrawing");
                    }
                    ExhaustionPolicy::Stop => {
                        debug!(iteration, "neighborhood exhausted, stopping early");
                        break 'search;
                    }
                    _ => return Err(OptError::NoAcceptableCandidate { iteration }),
                }
            };

            tabu.push(next.clone());
            state.advance(next, next_value);
            trace!(
                iteration,
                current_value = state.current_value,
                best_value = state.best_value,
                tabu_len = tabu.len()
            );
        }

        debug!(best_value = state.best_value, best = ?state.best.as_slice(), "tabu search finished");

        Ok(RunResult {
            best: state.best,
            best_value: state.best_value,
            history: state.history,
            initial_point,
        })
    }
}
