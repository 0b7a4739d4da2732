//! Regular-grid sampling of objectives for heatmaps, surfaces and curves.
//!
//! Rendering is left to the consumer; these helpers only produce the data.

use super::types::{Objective, Point};
use crate::error::{OptError, Result};

/// `n` evenly spaced values from `lo` to `hi`, both inclusive.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { hi } else { lo + step * i as f64 })
                .collect()
        }
    }
}

/// Objective values of a 2D function on a regular grid.
///
/// `values[i][j]` is `f(xs[j], ys[i])`: rows follow `y`, columns follow `x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceGrid {
    /// Column coordinates.
    pub xs: Vec<f64>,
    /// Row coordinates.
    pub ys: Vec<f64>,
    /// Row-major objective values.
    pub values: Vec<Vec<f64>>,
}

impl SurfaceGrid {
    /// Lowest grid node and its value.
    pub fn argmin(&self) -> (Point, f64) {
        let mut best = (Point::xy(self.xs[0], self.ys[0]), self.values[0][0]);
        for (i, row) in self.values.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                if v < best.1 {
                    best = (Point::xy(self.xs[j], self.ys[i]), v);
                }
            }
        }
        best
    }
}

/// Objective values of a 1D function on a regular grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Curve {
    /// Sample positions.
    pub xs: Vec<f64>,
    /// Objective value at each position.
    pub values: Vec<f64>,
}

fn check_resolution(resolution: usize) -> Result<()> {
    if resolution < 2 {
        return Err(OptError::invalid(format!(
            "grid resolution must be at least 2, got {resolution}"
        )));
    }
    Ok(())
}

/// Samples a 2D objective on a `resolution × resolution` grid spanning
/// its domain.
///
/// # Examples
///
/// ```
/// use u_localopt::objective::{sample_surface, Langermann};
///
/// let grid = sample_surface(&Langermann::default(), 50).unwrap();
/// assert_eq!(grid.values.len(), 50);
/// assert_eq!(grid.xs[49], 10.0);
/// ```
pub fn sample_surface<O: Objective>(objective: &O, resolution: usize) -> Result<SurfaceGrid> {
    check_resolution(resolution)?;
    let domain = objective.domain();
    domain.validate()?;
    if domain.dim != 2 {
        return Err(OptError::invalid(format!(
            "surface sampling needs a 2D objective, got dimension {}",
            domain.dim
        )));
    }

    let xs = linspace(domain.lo, domain.hi, resolution);
    let ys = xs.clone();
    let values = ys
        .iter()
        .map(|&y| xs.iter().map(|&x| objective.evaluate(&[x, y])).collect())
        .collect();

    Ok(SurfaceGrid { xs, ys, values })
}

/// Samples a 1D objective at `resolution` points spanning its domain.
pub fn sample_curve<O: Objective>(objective: &O, resolution: usize) -> Result<Curve> {
    check_resolution(resolution)?;
    let domain = objective.domain();
    domain.validate()?;
    if domain.dim != 1 {
        return Err(OptError::invalid(format!(
            "curve sampling needs a 1D objective, got dimension {}",
            domain.dim
        )));
    }

    let xs = linspace(domain.lo, domain.hi, resolution);
    let values = xs.iter().map(|&x| objective.evaluate(&[x])).collect();
    Ok(Curve { xs, values })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{Domain, FnObjective, GramacyLee, Langermann};

    #[test]
    fn test_linspace_endpoints() {
        let v = linspace(0.5, 2.5, 5);
        assert_eq!(v, vec![0.5, 1.0, 1.5, 2.0, 2.5]);
        assert_eq!(linspace(0.0, 10.0, 200)[199], 10.0);
        assert_eq!(linspace(3.0, 4.0, 1), vec![3.0]);
        assert!(linspace(3.0, 4.0, 0).is_empty());
    }

    #[test]
    fn test_surface_layout_rows_follow_y() {
        let f = FnObjective::new(Domain::new(0.0, 2.0, 2), |p: &[f64]| p[0] + 10.0 * p[1]);
        let grid = sample_surface(&f, 3).unwrap();
        assert_eq!(grid.xs, vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.values[0], vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.values[2][1], 21.0);
    }

    #[test]
    fn test_langermann_heatmap_minimum_near_known_optimum() {
        let f = Langermann::default();
        let grid = sample_surface(&f, 201).unwrap();
        let (point, value) = grid.argmin();
        assert!(point.distance(&Point::xy(2.00299, 1.006)) < 0.1, "argmin at {point:?}");
        assert!(value < -5.0, "grid minimum {value}");
    }

    #[test]
    fn test_gramacy_lee_curve() {
        let curve = sample_curve(&GramacyLee, 1000).unwrap();
        assert_eq!(curve.xs.len(), 1000);
        assert_eq!(curve.xs[0], 0.5);
        assert_eq!(curve.xs[999], 2.5);
        let min = curve.values.iter().cloned().fold(f64::INFINITY, f64::min);
        assert!((min - (-0.869011)).abs() < 1e-3, "curve minimum {min}");
    }

    #[test]
    fn test_dimension_and_resolution_checked() {
        assert!(sample_surface(&GramacyLee, 10).is_err());
        assert!(sample_curve(&Langermann::default(), 10).is_err());
        assert!(sample_surface(&Langermann::default(), 1).is_err());
    }
}
