//! Elliptic curve point operations

use std::fmt;

use log::trace;

use super::field::PrimeField;
use crate::error::{EccError, Result};
use crate::types::Scalar;

/// Point on a short Weierstrass curve, or the point at infinity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    /// Neutral element of the group
    Identity,
    Affine { x: Scalar, y: Scalar },
}

impl CurvePoint {
    pub fn affine(x: Scalar, y: Scalar) -> Self {
        CurvePoint::Affine { x, y }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, CurvePoint::Identity)
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Identity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// Curve y^2 = x^3 + ax + b over GF(p)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Curve {
    field: PrimeField,
    a: Scalar,
    b: Scalar,
}

impl Curve {
    /// Create a curve; `p` must be a prime of the form 4n + 3.
    pub fn new(p: Scalar, a: Scalar, b: Scalar) -> Result<Self> {
        let field = PrimeField::new(p)?;
        Ok(Self {
            a: field.reduce(a as i128),
            b: field.reduce(b as i128),
            field,
        })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    pub fn p(&self) -> Scalar {
        self.field.modulus()
    }

    pub fn a(&self) -> Scalar {
        self.a
    }

    pub fn b(&self) -> Scalar {
        self.b
    }

    /// Right-hand side x^3 + ax + b mod p
    pub fn rhs(&self, x: Scalar) -> Scalar {
        let f = &self.field;
        let x = f.reduce(x as i128);
        let x_cubed = f.mul(f.mul(x, x), x);
        f.add(f.add(x_cubed, f.mul(self.a, x)), self.b)
    }

    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match *point {
            CurvePoint::Identity => true,
            CurvePoint::Affine { x, y } => {
                let p = self.p();
                (0..p).contains(&x) && (0..p).contains(&y) && self.field.mul(y, y) == self.rhs(x)
            }
        }
    }

    /// Reduce affine coordinates into `[0, p)`.
    pub fn normalize(&self, point: &CurvePoint) -> CurvePoint {
        match *point {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => {
                CurvePoint::affine(self.field.reduce(x as i128), self.field.reduce(y as i128))
            }
        }
    }

    pub fn negate(&self, point: &CurvePoint) -> CurvePoint {
        match self.normalize(point) {
            CurvePoint::Identity => CurvePoint::Identity,
            CurvePoint::Affine { x, y } => CurvePoint::affine(x, self.field.neg(y)),
        }
    }

    /// Slope of the chord through two affine points, or of the tangent when
    /// they coincide.
    fn slope(&self, (x1, y1): (Scalar, Scalar), (x2, y2): (Scalar, Scalar)) -> Result<Scalar> {
        let f = &self.field;
        if x1 == x2 && y1 == y2 {
            // s = (3x^2 + a) / 2y
            let numerator = f.add(f.mul(3, f.mul(x1, x1)), self.a);
            let denominator = f.add(y1, y1);
            Ok(f.mul(numerator, f.mod_inverse(denominator)?))
        } else {
            // s = (y2 - y1) / (x2 - x1)
            let numerator = f.sub(y2, y1);
            let denominator = f.sub(x2, x1);
            Ok(f.mul(numerator, f.mod_inverse(denominator)?))
        }
    }

    /// Group law. Fails only for affine inputs sharing an x coordinate that
    /// are neither equal nor inverses, which cannot happen on the curve.
    pub fn add(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        let f = &self.field;
        let ((x1, y1), (x2, y2)) = match (self.normalize(p1), self.normalize(p2)) {
            (CurvePoint::Identity, q) => return Ok(q),
            (p, CurvePoint::Identity) => return Ok(p),
            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                ((x1, y1), (x2, y2))
            }
        };

        if x1 == x2 && y1 == f.neg(y2) {
            return Ok(CurvePoint::Identity);
        }

        let s = self.slope((x1, y1), (x2, y2))?;

        // x3 = s^2 - x1 - x2
        let x3 = f.sub(f.sub(f.mul(s, s), x1), x2);
        // y3 = -(y1 + s * (x3 - x1))
        let y3 = f.neg(f.add(y1, f.mul(s, f.sub(x3, x1))));

        Ok(CurvePoint::affine(x3, y3))
    }

    pub fn sub(&self, p1: &CurvePoint, p2: &CurvePoint) -> Result<CurvePoint> {
        self.add(p1, &self.negate(p2))
    }

    /// Scalar multiplication using double-and-add algorithm
    pub fn mul(&self, scalar: Scalar, point: &CurvePoint) -> Result<CurvePoint> {
        if scalar <= 0 {
            return Err(EccError::InvalidScalar(scalar));
        }
        let point = self.normalize(point);
        if scalar == 1 || point.is_identity() {
            return Ok(point);
        }

        let mut result = CurvePoint::Identity;
        let mut addend = point;
        let mut k = scalar;

        while k > 0 {
            if k & 1 == 1 {
                result = self.add(&result, &addend)?;
            }
            k >>= 1;
            if k > 0 {
                addend = self.add(&addend, &addend)?;
            }
        }

        trace!("{} * {} = {}", scalar, point, result);
        Ok(result)
    }
}
