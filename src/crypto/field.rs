//! Arithmetic in GF(p) for small primes p ≡ 3 (mod 4)

use num_integer::{Integer, Roots};

use crate::error::{EccError, Result};
use crate::types::Scalar;

/// Check that `p` is a prime of the form 4n + 3.
pub fn is_suitable_prime(p: Scalar) -> bool {
    if p % 4 != 3 {
        return false;
    }
    if p < 2 {
        return false;
    }
    let root = p.sqrt();
    !(2..=root).any(|d| p % d == 0)
}

/// Prime field of order `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    p: Scalar,
}

impl PrimeField {
    pub fn new(p: Scalar) -> Result<Self> {
        if !is_suitable_prime(p) {
            return Err(EccError::InvalidCurveParameters { p });
        }
        Ok(Self { p })
    }

    pub fn modulus(&self) -> Scalar {
        self.p
    }

    /// Reduce into `[0, p)`, negative inputs included.
    pub fn reduce(&self, x: i128) -> Scalar {
        // The result is below p, so narrowing cannot truncate.
        x.mod_floor(&(self.p as i128)) as Scalar
    }

    pub fn add(&self, a: Scalar, b: Scalar) -> Scalar {
        self.reduce(a as i128 + b as i128)
    }

    pub fn sub(&self, a: Scalar, b: Scalar) -> Scalar {
        self.reduce(a as i128 - b as i128)
    }

    pub fn mul(&self, a: Scalar, b: Scalar) -> Scalar {
        self.reduce(a as i128 * b as i128)
    }

    pub fn neg(&self, a: Scalar) -> Scalar {
        self.reduce(-(a as i128))
    }

    /// Multiplicative inverse via the extended Euclidean algorithm.
    ///
    /// Keeps `s * value ≡ r (mod p)` for each remainder `r`; once a remainder
    /// of 1 appears its coefficient is the inverse. Hitting a zero remainder
    /// first means `value` shares a factor with `p`, which for a prime
    /// modulus only happens when `value ≡ 0`.
    pub fn mod_inverse(&self, value: Scalar) -> Result<Scalar> {
        let (mut r0, mut r1) = (self.p as i128, self.reduce(value as i128) as i128);
        let (mut s0, mut s1) = (0i128, 1i128);

        while r1 != 1 {
            if r1 == 0 {
                return Err(EccError::ArithmeticInvariantViolation(value, self.p));
            }
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (s0, s1) = (s1, self.reduce(s0 - q * s1) as i128);
        }

        Ok(self.reduce(s1))
    }

    /// `base^exponent mod p` by square-and-multiply.
    ///
    /// The exponent is reduced modulo `p - 1` first (Fermat's little theorem),
    /// which is only valid for a nonzero base; a zero base short-circuits.
    pub fn power(&self, base: Scalar, exponent: Scalar) -> Scalar {
        if exponent == 0 {
            return 1;
        }
        let base = self.reduce(base as i128);
        if base == 0 {
            return 0;
        }

        let mut exp = exponent.mod_floor(&(self.p - 1));
        let mut square = base;
        let mut result = 1;
        while exp > 0 {
            if exp & 1 == 1 {
                result = self.mul(result, square);
            }
            square = self.mul(square, square);
            exp >>= 1;
        }
        result
    }

    /// Euler's criterion: `value^((p - 1) / 2) ≡ 1 (mod p)`.
    pub fn is_quadratic_residue(&self, value: Scalar) -> bool {
        self.power(value, (self.p - 1) / 2) == 1
    }

    /// Square root of a residue. Only valid because p ≡ 3 (mod 4).
    pub fn sqrt(&self, value: Scalar) -> Scalar {
        self.power(value, (self.p + 1) / 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gf(p: Scalar) -> PrimeField {
        PrimeField::new(p).unwrap()
    }

    #[test]
    fn test_suitable_primes() {
        for p in [3, 7, 11, 19, 23, 10007] {
            assert!(is_suitable_prime(p), "{} should be accepted", p);
        }
        for p in [13, 17, 9, 2, 1, 0, -1, -5, 15, 27, 35] {
            assert!(!is_suitable_prime(p), "{} should be rejected", p);
        }
    }

    #[test]
    fn test_field_rejects_unsuitable_modulus() {
        assert_eq!(
            PrimeField::new(13),
            Err(EccError::InvalidCurveParameters { p: 13 })
        );
    }

    #[test]
    fn test_reduce_negative() {
        let f = gf(11);
        assert_eq!(f.reduce(-1), 10);
        assert_eq!(f.reduce(-11), 0);
        assert_eq!(f.reduce(-23), 10);
        assert_eq!(f.reduce(25), 3);
        assert_eq!(f.neg(0), 0);
        assert_eq!(f.neg(4), 7);
    }

    #[test]
    fn test_mod_inverse() {
        let f = gf(11);
        for v in 1..11 {
            let inv = f.mod_inverse(v).unwrap();
            assert_eq!(f.mul(v, inv), 1, "inverse of {}", v);
        }
        assert_eq!(f.mod_inverse(-1).unwrap(), 10);
        assert_eq!(f.mod_inverse(12).unwrap(), 1);
    }

    #[test]
    fn test_mod_inverse_of_zero_fails() {
        let f = gf(11);
        assert_eq!(
            f.mod_inverse(22),
            Err(EccError::ArithmeticInvariantViolation(22, 11))
        );
    }

    #[test]
    fn test_power() {
        let f = gf(11);
        assert_eq!(f.power(5, 0), 1);
        assert_eq!(f.power(0, 0), 1);
        assert_eq!(f.power(0, 3), 0);
        assert_eq!(f.power(2, 1), 2);
        assert_eq!(f.power(2, 5), 10);
        assert_eq!(f.power(2, 10), 1);
        assert_eq!(f.power(2, 13), 8);
        assert_eq!(f.power(-2, 3), 3);
        assert_eq!(f.mul(f.power(3, -1), 3), 1);
    }

    #[test]
    fn test_quadratic_residues_mod_11() {
        let f = gf(11);
        let residues: Vec<Scalar> = (0..11).filter(|&v| f.is_quadratic_residue(v)).collect();
        assert_eq!(residues, vec![1, 3, 4, 5, 9]);
        for v in [0, 2, 6, 7, 8, 10] {
            assert!(!f.is_quadratic_residue(v));
        }
    }

    #[test]
    fn test_sqrt_of_residues() {
        let f = gf(10007);
        for v in 1..200 {
            if f.is_quadratic_residue(v) {
                let r = f.sqrt(v);
                assert_eq!(f.mul(r, r), v);
            }
        }
    }
}
