use log::debug;
use nalgebra_glm::DVec2;

use crate::{AbstractCurve, BsplineCurve, Error, EvalConfig, InvalidInput};

/// Returns `count` evenly spaced values from `min` to `max`, inclusive.
///
/// The last value is exactly `max` (not `min` plus accumulated steps), so
/// sampling a curve always lands on the end of its domain.
pub fn linspace(min: f64, max: f64, count: usize) -> impl ExactSizeIterator<Item = f64> + Clone {
    let steps = count.saturating_sub(1).max(1) as f64;
    (0..count).map(move |i| match i {
        0 => min,
        i if i + 1 == count => max,
        i => (min + (max - min) * i as f64 / steps).min(max),
    })
}

/// Samples the clamped B-spline of the given degree through `control_points`.
///
/// Uses [`EvalConfig::default`] with the given degree; see
/// [`evaluate_curve_with`] for details.
pub fn evaluate_curve(control_points: &[DVec2], degree: usize) -> Result<Vec<DVec2>, Error> {
    evaluate_curve_with(control_points, &EvalConfig::default().with_degree(degree))
}

/// Samples the clamped uniform B-spline defined by `control_points`.
///
/// The result has exactly `config.samples` points, the first equal to the
/// first control point and the last equal to the last one.  With fewer than
/// `config.degree + 1` control points the curve is underdetermined, and the
/// control points are returned unchanged.
pub fn evaluate_curve_with(
    control_points: &[DVec2],
    config: &EvalConfig,
) -> Result<Vec<DVec2>, Error> {
    config.validate()?;
    if let Some(index) = control_points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(InvalidInput::NonFinitePoint { index }.into());
    }

    if control_points.len() < config.degree + 1 {
        debug!(
            "Passing through {} control points (degree {} needs {})",
            control_points.len(),
            config.degree,
            config.degree + 1
        );
        return Ok(control_points.to_vec());
    }

    let curve = BsplineCurve::clamped(control_points.to_vec(), config.degree)?
        .with_policy(config.degenerate);
    debug!(
        "Sampling {} points from {} control points at degree {}",
        config.samples,
        control_points.len(),
        config.degree
    );
    sample(&curve, config.samples)
}

#[cfg(feature = "rayon")]
fn sample<C: AbstractCurve + Sync>(curve: &C, count: usize) -> Result<Vec<DVec2>, Error> {
    use rayon::prelude::*;

    let (t_min, t_max) = curve.domain();
    let ts: Vec<f64> = linspace(t_min, t_max, count).collect();
    ts.into_par_iter().map(|t| curve.point(t)).collect()
}

#[cfg(not(feature = "rayon"))]
fn sample<C: AbstractCurve>(curve: &C, count: usize) -> Result<Vec<DVec2>, Error> {
    curve.sample(count)
}
