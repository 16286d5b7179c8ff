//! Common types and constants

use std::fmt;

use crate::crypto::CurvePoint;

/// Integer representation for field elements, coefficients and key material.
///
/// Products are always formed in `i128` and reduced before narrowing back.
pub type Scalar = i64;

/// Curve used when no parameters are given: y^2 = x^3 + x + 6 over GF(11).
#[derive(Clone)]
pub struct DefaultCurve;

impl DefaultCurve {
    pub const P: Scalar = 11;
    pub const A: Scalar = 1;
    pub const B: Scalar = 6;

    /// (2, 4) lies on the default curve: 4^2 = 5 = 2^3 + 2 + 6 (mod 11).
    pub const MESSAGE: (Scalar, Scalar) = (2, 4);
}

/// Plaintext, given directly as a point chosen by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Message {
    pub x: Scalar,
    pub y: Scalar,
}

impl Message {
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// (-1, -1) denotes the identity, mirroring [`Message::from_point`].
    pub fn to_point(self) -> CurvePoint {
        if self.x == -1 && self.y == -1 {
            return CurvePoint::Identity;
        }
        CurvePoint::affine(self.x, self.y)
    }

    /// The identity has no coordinates; it is reported as (-1, -1).
    pub(crate) fn from_point(point: CurvePoint) -> Self {
        match point {
            CurvePoint::Affine { x, y } => Self { x, y },
            CurvePoint::Identity => Self { x: -1, y: -1 },
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Ciphertext pair produced by one encryption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipheredMessage {
    pub c1: CurvePoint,
    pub c2: CurvePoint,
}
