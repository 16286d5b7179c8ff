//! Cryptographic operations module

pub mod curve;
pub mod field;

pub use curve::{Curve, CurvePoint};
pub use field::{is_suitable_prime, PrimeField};
