use log::debug;
use nalgebra_glm::DVec2;

use crate::{DegeneratePolicy, Error, InvalidInput, KnotVector, Scratch};

/// Evaluates the curve at `t` with de Boor's algorithm, using the default
/// [`DegeneratePolicy`] for the current build.
pub fn deboor_point(
    degree: usize,
    control_points: &[DVec2],
    knots: &KnotVector,
    t: f64,
) -> Result<DVec2, Error> {
    deboor_point_with_policy(degree, control_points, knots, t, DegeneratePolicy::default())
}

/// Evaluates the curve at `t` with de Boor's algorithm.
///
/// `knots` must have `control_points.len() + degree + 1` entries and `t`
/// must lie within `knots.domain(degree)`.
pub fn deboor_point_with_policy(
    degree: usize,
    control_points: &[DVec2],
    knots: &KnotVector,
    t: f64,
    policy: DegeneratePolicy,
) -> Result<DVec2, Error> {
    let p = degree;
    let m = control_points.len();
    if p == 0 {
        return Err(InvalidInput::ZeroDegree.into());
    }
    if m < p + 1 {
        return Err(InvalidInput::TooFewPoints { degree: p, got: m }.into());
    }
    if knots.len() != m + p + 1 {
        return Err(InvalidInput::KnotCount {
            expected: m + p + 1,
            got: knots.len(),
        }
        .into());
    }
    let (min, max) = knots.domain(p)?;
    if !(min..=max).contains(&t) {
        return Err(Error::OutOfDomain { t, min, max });
    }

    let i = knots.find_span(t, p)?;
    if i < p || i >= m {
        return Err(Error::SpanOutOfRange { span: i, points: m });
    }

    // d[j] starts out as p[i - p + j]
    let mut d: Scratch = control_points[i - p..=i].iter().copied().collect();

    for r in 1..=p {
        for j in (r..=p).rev() {
            let lo = knots[i - p + j];
            let hi = knots[j + i - r + 1];
            let alpha = if hi - lo == 0.0 {
                match policy {
                    DegeneratePolicy::Report => {
                        return Err(Error::DegenerateGeometry { span: i, lo, hi })
                    }
                    DegeneratePolicy::Clamp => {
                        debug!("Clamping degenerate knot interval [{lo}, {hi}] at t = {t}");
                        0.0
                    }
                }
            } else {
                (t - lo) / (hi - lo)
            };
            d[j] = (1.0 - alpha) * d[j - 1] + alpha * d[j];
        }
    }
    Ok(d[p])
}
