use nalgebra_glm::DVec2;

use crate::{
    abstract_curve::AbstractCurve, deboor::deboor_point_with_policy, DegeneratePolicy, Error,
    InvalidInput, KnotVector,
};

/// A 2D B-spline with an explicit knot vector
#[derive(Clone, Debug, PartialEq)]
pub struct BsplineCurve {
    control_points: Vec<DVec2>,
    degree: usize,
    knots: KnotVector,
    domain: (f64, f64),
    policy: DegeneratePolicy,
}

impl BsplineCurve {
    pub fn new(
        control_points: Vec<DVec2>,
        degree: usize,
        knots: KnotVector,
    ) -> Result<Self, Error> {
        if degree == 0 {
            return Err(InvalidInput::ZeroDegree.into());
        }
        let m = control_points.len();
        if m < degree + 1 {
            return Err(InvalidInput::TooFewPoints { degree, got: m }.into());
        }
        if knots.len() != m + degree + 1 {
            return Err(InvalidInput::KnotCount {
                expected: m + degree + 1,
                got: knots.len(),
            }
            .into());
        }
        if let Some(index) = control_points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(InvalidInput::NonFinitePoint { index }.into());
        }
        let domain = knots.domain(degree)?;
        Ok(Self {
            control_points,
            degree,
            knots,
            domain,
            policy: DegeneratePolicy::default(),
        })
    }

    /// Builds a curve on the clamped uniform knot vector, which starts at
    /// the first control point and ends at the last one.
    pub fn clamped(control_points: Vec<DVec2>, degree: usize) -> Result<Self, Error> {
        let knots = KnotVector::clamped_uniform(control_points.len(), degree)?;
        Self::new(control_points, degree, knots)
    }

    pub fn with_policy(self, policy: DegeneratePolicy) -> Self {
        Self { policy, ..self }
    }

    pub fn control_points(&self) -> &[DVec2] {
        &self.control_points
    }
    pub fn degree(&self) -> usize {
        self.degree
    }
    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }
}

impl AbstractCurve for BsplineCurve {
    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn point(&self, t: f64) -> Result<DVec2, Error> {
        deboor_point_with_policy(
            self.degree,
            &self.control_points,
            &self.knots,
            t,
            self.policy,
        )
    }
}
