//! Sampling of 2D B-spline curves.
//!
//! Curves are built on a clamped uniform knot vector, so they start at the
//! first control point and end at the last one, and are evaluated with
//! de Boor's algorithm.

mod abstract_curve;
mod bspline_curve;
mod config;
mod deboor;
mod error;
mod knot_vector;
mod sampled_curve;
mod sketch;

use nalgebra_glm::DVec2;
use smallvec::SmallVec;

/// Working buffer for de Boor's recursion, which holds `degree + 1` points.
/// Cubic curves (and anything up to degree 7) stay on the stack.
type Scratch = SmallVec<[DVec2; 8]>;

pub use crate::abstract_curve::AbstractCurve;
pub use crate::bspline_curve::BsplineCurve;
pub use crate::config::{DegeneratePolicy, EvalConfig, DEFAULT_DEGREE, DEFAULT_SAMPLES};
pub use crate::deboor::{deboor_point, deboor_point_with_policy};
pub use crate::error::{Error, InvalidInput};
pub use crate::knot_vector::KnotVector;
pub use crate::sampled_curve::{evaluate_curve, evaluate_curve_with, linspace};
pub use crate::sketch::Sketch;
