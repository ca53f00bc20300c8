//! Error type shared by all fallible evaluators.
//!
//! Two families exist: structurally malformed input (`ErrorKind::InvalidInput`)
//! and well-formed input that breaks the arithmetic (`ErrorKind::DegenerateInput`).
//! Out-of-range parameters are never an error, curves simply extrapolate.
use thiserror::Error;

/// Broad classification of a [`CurveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    DegenerateInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// An evaluator received an empty control point sequence.
    #[error("no control points given")]
    EmptyControlPoints,
    /// The curve type needs more control points than were supplied.
    #[error("expected at least {expected} control points, got {found}")]
    TooFewControlPoints { expected: usize, found: usize },
    /// A fixed capacity container cannot hold all supplied control points.
    #[error("capacity for {capacity} control points exceeded by {found}")]
    TooManyControlPoints { capacity: usize, found: usize },
    /// Two interpolation nodes share an x-coordinate.
    #[error("control points {first} and {second} share an x-coordinate")]
    DuplicateAbscissa { first: usize, second: usize },
    /// The result overflowed to infinity or NaN.
    #[error("evaluation produced a non-finite value")]
    NonFinite,
}

impl CurveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::EmptyControlPoints
            | CurveError::TooFewControlPoints { .. }
            | CurveError::TooManyControlPoints { .. } => ErrorKind::InvalidInput,
            CurveError::DuplicateAbscissa { .. } | CurveError::NonFinite => {
                ErrorKind::DegenerateInput
            }
        }
    }
}

pub type Result<T> = core::result::Result<T, CurveError>;
