//! Neighbor generation around a current point.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::objective::{Domain, Point};

/// Produces candidate points around a current point.
pub trait NeighborGenerator {
    /// Generates a batch of candidates around `position`.
    ///
    /// `count` is the requested batch size; generators with a fixed
    /// stencil may ignore it.
    fn generate<R: Rng>(&self, position: &Point, count: usize, rng: &mut R) -> Vec<Point>;
}

/// Bounded Gaussian perturbation.
///
/// Each coordinate is drawn from `Normal(position_k, σ)` independently and
/// clamped into the domain. No rejection sampling: clamping can produce
/// duplicate boundary points.
#[derive(Debug, Clone, Copy)]
pub struct GaussianNeighbors {
    /// Standard deviation of the perturbation.
    pub sigma: f64,
    /// Box the candidates are clamped into.
    pub domain: Domain,
}

impl GaussianNeighbors {
    /// Creates a generator.
    pub fn new(sigma: f64, domain: Domain) -> Self {
        Self { sigma, domain }
    }
}

impl NeighborGenerator for GaussianNeighbors {
    fn generate<R: Rng>(&self, position: &Point, count: usize, rng: &mut R) -> Vec<Point> {
        gaussian_neighbors(position, count, self.sigma, &self.domain, rng)
    }
}

/// Draws exactly `count` clamped Gaussian perturbations of `position`.
pub fn gaussian_neighbors<R: Rng>(
    position: &Point,
    count: usize,
    sigma: f64,
    domain: &Domain,
    rng: &mut R,
) -> Vec<Point> {
    (0..count)
        .map(|_| {
            let coords: Vec<f64> = position
                .as_slice()
                .iter()
                .map(|&mean| {
                    let z: f64 = rng.sample(StandardNormal);
                    domain.clamp(mean + sigma * z)
                })
                .collect();
            Point::new(coords)
        })
        .collect()
}

/// Fixed ±step stencil along every axis, clamped into the domain.
///
/// For a 1D point `x` this yields `[x + step, x - step]`.
#[derive(Debug, Clone, Copy)]
pub struct StepNeighbors {
    /// Move length along each axis.
    pub step: f64,
    /// Box the candidates are clamped into.
    pub domain: Domain,
}

impl StepNeighbors {
    /// Creates a generator.
    pub fn new(step: f64, domain: Domain) -> Self {
        Self { step, domain }
    }
}

impl NeighborGenerator for StepNeighbors {
    fn generate<R: Rng>(&self, position: &Point, _count: usize, _rng: &mut R) -> Vec<Point> {
        let base = position.as_slice();
        let mut out = Vec::with_capacity(2 * base.len());
        for k in 0..base.len() {
            for delta in [self.step, -self.step] {
                let mut coords = base.to_vec();
                coords[k] = self.domain.clamp(coords[k] + delta);
                out.push(Point::new(coords));
            }
        }
        out
    }
}
