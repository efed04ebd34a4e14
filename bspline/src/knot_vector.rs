use crate::{Error, InvalidInput};

/// A non-decreasing sequence of finite knots
#[derive(Clone, Debug, PartialEq)]
pub struct KnotVector(Vec<f64>);

impl std::ops::Deref for KnotVector {
    type Target = [f64];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl KnotVector {
    pub fn new(knots: Vec<f64>) -> Result<Self, Error> {
        if let Some(index) = knots.iter().position(|k| !k.is_finite()) {
            return Err(InvalidInput::NonFiniteKnot { index }.into());
        }
        if let Some(i) = knots.windows(2).position(|w| w[1] < w[0]) {
            return Err(InvalidInput::DecreasingKnots { index: i + 1 }.into());
        }
        Ok(Self(knots))
    }

    /// Builds the clamped uniform knot vector for `count` control points.
    ///
    /// The result has `count + degree + 1` knots: `degree` zeros, then
    /// `0, 1, ..., count - degree`, then `degree` more copies of the last
    /// value.  Both ends therefore have multiplicity `degree + 1`, which
    /// pins the curve to the first and last control points.
    pub fn clamped_uniform(count: usize, degree: usize) -> Result<Self, Error> {
        if degree == 0 {
            return Err(InvalidInput::ZeroDegree.into());
        }
        if count < degree + 1 {
            return Err(InvalidInput::TooFewPoints { degree, got: count }.into());
        }
        let last = count - degree;
        let mut out = Vec::with_capacity(count + degree + 1);
        out.resize(degree, 0.0);
        out.extend((0..=last).map(|i| i as f64));
        out.resize(count + degree + 1, last as f64);
        Ok(Self(out))
    }

    /// Checks that there are enough knots for at least `p + 1` control
    /// points at degree `p`.
    fn check_len(&self, p: usize) -> Result<(), Error> {
        if self.0.len() < 2 * p + 2 {
            return Err(InvalidInput::TooFewKnots {
                degree: p,
                got: self.0.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Returns the parameter range `[knots[p], knots[len - p - 1]]`
    pub fn domain(&self, p: usize) -> Result<(f64, f64), Error> {
        self.check_len(p)?;
        Ok((self.0[p], self.0[self.0.len() - p - 1]))
    }

    /// Finds the first span `i` with `knots[i] <= t < knots[i + 1]`.
    ///
    /// Parameters at or past the upper end of the domain map to the last
    /// span the domain covers, `len - p - 2`, whether or not the knot vector
    /// is clamped there.  Below the domain, the scan never returns a span
    /// under `p`.  Callers are expected to check `t` against
    /// [`domain`](Self::domain) first.
    pub fn find_span(&self, t: f64, p: usize) -> Result<usize, Error> {
        self.check_len(p)?;
        let last = self.0.len() - p - 2;
        if t >= self.0[last + 1] {
            return Ok(last);
        }
        Ok(self
            .0
            .windows(2)
            .position(|w| w[0] <= t && t < w[1])
            .unwrap_or(last))
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}
