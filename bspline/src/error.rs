use thiserror::Error;

/// Errors produced while building or evaluating a curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A blending step hit a zero-length knot interval
    #[error("degenerate knot interval [{lo}, {hi}] while blending span {span}")]
    DegenerateGeometry { span: usize, lo: f64, hi: f64 },

    /// The knot span search picked a span whose control points don't exist
    #[error("knot span {span} needs control points past the {points} given")]
    SpanOutOfRange { span: usize, points: usize },

    #[error("parameter {t} is outside of the curve domain [{min}, {max}]")]
    OutOfDomain { t: f64, min: f64, max: f64 },
}

/// Reasons why inputs are rejected before any evaluation happens
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("control point {index} is not finite")]
    NonFinitePoint { index: usize },

    #[error("knot {index} is not finite")]
    NonFiniteKnot { index: usize },

    #[error("knot {index} is smaller than the knot before it")]
    DecreasingKnots { index: usize },

    #[error("expected {expected} knots, got {got}")]
    KnotCount { expected: usize, got: usize },

    #[error("degree {degree} needs at least {} knots, got {got}", 2 * .degree + 2)]
    TooFewKnots { degree: usize, got: usize },

    #[error("degree must be at least 1")]
    ZeroDegree,

    #[error("degree {degree} needs at least {} control points, got {got}", .degree + 1)]
    TooFewPoints { degree: usize, got: usize },

    #[error("at least 2 samples are needed, got {0}")]
    TooFewSamples(usize),
}
