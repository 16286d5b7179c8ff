//! Error types

use thiserror::Error;

use crate::types::Scalar;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EccError {
    #[error("p must be a prime number greater than 2 of format 4n + 3, got {p}")]
    InvalidCurveParameters { p: Scalar },

    #[error("no point of y^2 = x^3 + {a}x + {b} (mod {p}) qualifies as a generator")]
    EmptyCandidateSet { p: Scalar, a: Scalar, b: Scalar },

    #[error("cannot multiply a point by {0}: scalar must be positive")]
    InvalidScalar(Scalar),

    #[error("arithmetic invariant violated: {0} has no inverse modulo {1}")]
    ArithmeticInvariantViolation(Scalar, Scalar),
}

pub type Result<T> = std::result::Result<T, EccError>;
