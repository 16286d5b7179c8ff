//! Key generation module

pub mod generator;

pub use generator::{choose_generator, curve_points};

use log::{debug, trace};
use rand::Rng;

use crate::crypto::{Curve, CurvePoint, PrimeField};
use crate::error::Result;
use crate::types::Scalar;

/// Draw a scalar in `[1, p - 1]` as the product of two uniform draws from
/// `[2, p - 1]`, reduced mod p.
///
/// The distribution is not uniform. Generator selection, private keys and
/// ephemeral keys all share it.
pub fn draw_scalar<R: Rng + ?Sized>(rng: &mut R, field: &PrimeField) -> Scalar {
    let p = field.modulus();
    let r1 = rng.gen_range(2..=p - 1);
    let r2 = rng.gen_range(2..=p - 1);
    field.mul(r1, r2)
}

/// Private scalar together with its public multiple of the generator.
#[derive(Clone)]
pub struct KeyPair {
    private: Scalar,
    public: CurvePoint,
}

impl KeyPair {
    pub fn public_key(&self) -> &CurvePoint {
        &self.public
    }

    pub(crate) fn private_key(&self) -> Scalar {
        self.private
    }
}

/// Generate a key pair for `generator` on `curve`.
pub fn generate_keys<R: Rng + ?Sized>(
    curve: &Curve,
    generator: &CurvePoint,
    rng: &mut R,
) -> Result<KeyPair> {
    let private = draw_scalar(rng, curve.field());
    let public = curve.mul(private, generator)?;

    trace!("Private Key: {}", private);
    debug!("Public Key: {}", public);

    Ok(KeyPair { private, public })
}
