//! Core types for continuous objectives.

use rand::Rng;

use crate::error::{OptError, Result};

/// An immutable point in the search space.
///
/// New points are always new values; optimizers never mutate a point in
/// place once it has been produced.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    coords: Vec<f64>,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(coords: Vec<f64>) -> Self {
        Self { coords }
    }

    /// Shorthand for a 2D point.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { coords: vec![x, y] }
    }

    /// Number of coordinates.
    pub fn dim(&self) -> usize {
        self.coords.len()
    }

    /// Coordinates as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.coords
    }

    /// First coordinate.
    pub fn x(&self) -> f64 {
        self.coords[0]
    }

    /// Second coordinate.
    ///
    /// # Panics
    ///
    /// Panics on a 1D point.
    pub fn y(&self) -> f64 {
        self.coords[1]
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        self.coords
            .iter()
            .zip(&other.coords)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }
}

/// Box domain `[lo, hi]^dim`, identical bounds on every coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Domain {
    /// Lower bound (inclusive).
    pub lo: f64,
    /// Upper bound (inclusive).
    pub hi: f64,
    /// Number of coordinates.
    pub dim: usize,
}

impl Domain {
    /// Creates a domain.
    pub fn new(lo: f64, hi: f64, dim: usize) -> Self {
        Self { lo, hi, dim }
    }

    /// Clamps a single coordinate into `[lo, hi]`.
    pub fn clamp(&self, v: f64) -> f64 {
        self.lo.max(self.hi.min(v))
    }

    /// Returns `true` if every coordinate lies in `[lo, hi]`.
    pub fn contains(&self, point: &Point) -> bool {
        point.dim() == self.dim
            && point
                .as_slice()
                .iter()
                .all(|&v| v >= self.lo && v <= self.hi)
    }

    /// Samples a point uniformly, independently per coordinate.
    pub fn sample_uniform<R: Rng>(&self, rng: &mut R) -> Point {
        Point::new(
            (0..self.dim)
                .map(|_| rng.random_range(self.lo..=self.hi))
                .collect(),
        )
    }

    /// Validates the bounds.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(OptError::invalid("domain dimension must be at least 1"));
        }
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(OptError::invalid("domain bounds must be finite"));
        }
        if self.lo > self.hi {
            return Err(OptError::invalid(format!(
                "domain lower bound {} exceeds upper bound {}",
                self.lo, self.hi
            )));
        }
        Ok(())
    }
}

/// A scalar function to minimize over a box domain.
///
/// Implementations must be pure: the same input always yields the same
/// value and evaluation has no side effects.
pub trait Objective: Send + Sync {
    /// Evaluates the function at `position` (lower is better).
    fn evaluate(&self, position: &[f64]) -> f64;

    /// The box domain the function is searched over.
    fn domain(&self) -> Domain;
}

/// Adapts a closure into an [`Objective`] with an explicit domain.
///
/// # Examples
///
/// ```
/// use u_localopt::objective::{Domain, FnObjective, Objective};
///
/// let sphere = FnObjective::new(Domain::new(-5.0, 5.0, 2), |x: &[f64]| {
///     x.iter().map(|v| v * v).sum()
/// });
/// assert_eq!(sphere.evaluate(&[1.0, 2.0]), 5.0);
/// ```
pub struct FnObjective<F> {
    domain: Domain,
    f: F,
}

impl<F> FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    /// Wraps `f` over `domain`.
    pub fn new(domain: Domain, f: F) -> Self {
        Self { domain, f }
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    fn evaluate(&self, position: &[f64]) -> f64 {
        (self.f)(position)
    }

    fn domain(&self) -> Domain {
        self.domain
    }
}
