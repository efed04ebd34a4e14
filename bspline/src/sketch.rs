use log::debug;
use nalgebra_glm::DVec2;

use crate::{evaluate_curve_with, Error, EvalConfig, InvalidInput};

/// Control points placed one at a time, with the curve through them kept
/// up to date.
///
/// The curve is recomputed from scratch on every insertion; nothing is
/// cached between evaluations besides the latest result.
#[derive(Clone, Debug, Default)]
pub struct Sketch {
    config: EvalConfig,
    points: Vec<DVec2>,
    curve: Vec<DVec2>,
}

impl Sketch {
    pub fn new(config: EvalConfig) -> Self {
        Self {
            config,
            points: vec![],
            curve: vec![],
        }
    }

    /// Appends a control point and refreshes the curve.
    ///
    /// The curve stays empty until there are at least two points.  On error,
    /// the sketch is left unchanged.
    pub fn add_point(&mut self, p: DVec2) -> Result<(), Error> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(InvalidInput::NonFinitePoint {
                index: self.points.len(),
            }
            .into());
        }
        self.points.push(p);
        if self.points.len() >= 2 {
            match evaluate_curve_with(&self.points, &self.config) {
                Ok(curve) => self.curve = curve,
                Err(e) => {
                    self.points.pop();
                    return Err(e);
                }
            }
        }
        debug!(
            "Sketch has {} points, {} curve points",
            self.points.len(),
            self.curve.len()
        );
        Ok(())
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.curve.clear();
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn curve(&self) -> &[DVec2] {
        &self.curve
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }
}
