//! ecc_elgamal - toy elliptic-curve ElGamal cryptosystem
//!
//! Curves y^2 = x^3 + ax + b over small prime fields GF(p) with p ≡ 3 (mod 4).
//! For teaching only: arithmetic is on `i64` and nothing is constant time.

pub mod crypto;
pub mod ecc;
pub mod error;
pub mod keygen;
pub mod types;

pub use crypto::{is_suitable_prime, Curve, CurvePoint, PrimeField};
pub use ecc::Ecc;
pub use error::{EccError, Result};
pub use keygen::{choose_generator, curve_points, draw_scalar, generate_keys, KeyPair};
pub use types::{CipheredMessage, DefaultCurve, Message, Scalar};
