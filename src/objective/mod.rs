//! Objective functions and the continuous search domain.
//!
//! Optimizers in this crate are written against the [`Objective`]
//! capability only: evaluate a point, report the box domain. Two classic
//! benchmark surfaces are provided, along with regular-grid sampling for
//! heatmaps and curves.
//!
//! # References
//!
//! - Langermann function: Molga, M. & Smutnicki, C. (2005),
//!   "Test functions for optimization needs".
//! - Gramacy, R. B. & Lee, H. K. H. (2012), "Cases for the nugget in
//!   modeling computer experiments", *Statistics and Computing* 22, 713-722.

mod gramacy_lee;
mod langermann;
mod surface;
mod types;

pub use gramacy_lee::GramacyLee;
pub use langermann::{Langermann, LangermannParams};
pub use surface::{linspace, sample_curve, sample_surface, Curve, SurfaceGrid};
pub use types::{Domain, FnObjective, Objective, Point};
