use crate::{Error, InvalidInput};

/// Cubic, matching the interactive editor this crate grew out of
pub const DEFAULT_DEGREE: usize = 3;

/// Number of points in a sampled curve
pub const DEFAULT_SAMPLES: usize = 100;

/// What to do when de Boor's recursion divides by a zero-length knot interval.
///
/// Clamped knot vectors built by [`KnotVector::clamped_uniform`] never hit
/// this for in-domain parameters, but hand-built knot vectors with repeated
/// interior knots can.
///
/// [`KnotVector::clamped_uniform`]: crate::KnotVector::clamped_uniform
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Use `alpha = 0`, keeping the left-hand point of the blend
    Clamp,
    /// Fail with [`Error::DegenerateGeometry`]
    Report,
}

impl Default for DegeneratePolicy {
    /// Loud in debug builds, silent in release builds
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Report
        } else {
            Self::Clamp
        }
    }
}

/// Parameters for [`evaluate_curve_with`](crate::evaluate_curve_with)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    pub degree: usize,
    pub samples: usize,
    pub degenerate: DegeneratePolicy,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            degree: DEFAULT_DEGREE,
            samples: DEFAULT_SAMPLES,
            degenerate: DegeneratePolicy::default(),
        }
    }
}

impl EvalConfig {
    pub fn with_degree(self, degree: usize) -> Self {
        Self { degree, ..self }
    }

    pub fn with_samples(self, samples: usize) -> Self {
        Self { samples, ..self }
    }

    pub fn with_policy(self, degenerate: DegeneratePolicy) -> Self {
        Self { degenerate, ..self }
    }

    /// Checks the settings that don't depend on the control points
    pub fn validate(&self) -> Result<(), Error> {
        if self.degree == 0 {
            return Err(InvalidInput::ZeroDegree.into());
        }
        if self.samples < 2 {
            return Err(InvalidInput::TooFewSamples(self.samples).into());
        }
        Ok(())
    }
}
