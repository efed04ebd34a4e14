use nalgebra_glm::DVec2;

use crate::{linspace, Error, InvalidInput};

/// A parametric 2D curve with a closed parameter domain
pub trait AbstractCurve {
    /// Returns `(t_min, t_max)`
    fn domain(&self) -> (f64, f64);

    /// Evaluates the curve at a parameter inside [`domain`](Self::domain)
    fn point(&self, t: f64) -> Result<DVec2, Error>;

    /// Evaluates `count` evenly spaced parameters across the whole domain,
    /// including both ends.
    fn sample(&self, count: usize) -> Result<Vec<DVec2>, Error> {
        if count < 2 {
            return Err(InvalidInput::TooFewSamples(count).into());
        }
        let (t_min, t_max) = self.domain();
        linspace(t_min, t_max, count).map(|t| self.point(t)).collect()
    }
}
