//! ElGamal-style encryption of curve points

use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::crypto::{Curve, CurvePoint};
use crate::error::Result;
use crate::keygen::{choose_generator, draw_scalar, generate_keys, KeyPair};
use crate::types::{CipheredMessage, Message, Scalar};

/// Cryptosystem over one curve with its own generator, key pair and
/// randomness source.
///
/// The only public way to decrypt is [`Ecc::decrypt_backdoor`].
pub struct Ecc<R = ThreadRng> {
    curve: Curve,
    generator: CurvePoint,
    keys: KeyPair,
    rng: R,
}

impl Ecc<ThreadRng> {
    /// Set up y^2 = x^3 + ax + b over GF(p) with the thread-local RNG.
    pub fn new(p: Scalar, a: Scalar, b: Scalar) -> Result<Self> {
        Self::with_rng(p, a, b, rand::thread_rng())
    }
}

impl<R: Rng> Ecc<R> {
    /// Set up the curve, pick a generator and generate keys, drawing all
    /// randomness from `rng`.
    pub fn with_rng(p: Scalar, a: Scalar, b: Scalar, mut rng: R) -> Result<Self> {
        let curve = Curve::new(p, a, b)?;
        let generator = choose_generator(&curve, &mut rng)?;
        let keys = generate_keys(&curve, &generator, &mut rng)?;

        info!(
            "Curve y^2 = x^3 + {}x + {} (mod {}), generator {}, public key {}",
            curve.a(),
            curve.b(),
            curve.p(),
            generator,
            keys.public_key()
        );

        Ok(Self {
            curve,
            generator,
            keys,
            rng,
        })
    }

    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn generator(&self) -> &CurvePoint {
        &self.generator
    }

    pub fn public_key(&self) -> &CurvePoint {
        self.keys.public_key()
    }

    /// Wrap coordinates as a message, reduced mod p. The point is not
    /// checked against the curve; off-curve messages do not survive a round
    /// trip. (-1, -1) stays the identity.
    pub fn create_message(&self, x: Scalar, y: Scalar) -> Message {
        if x == -1 && y == -1 {
            return Message::new(x, y);
        }
        let f = self.curve.field();
        Message::new(f.reduce(x as i128), f.reduce(y as i128))
    }

    /// C1 = kG, C2 = M + kK for a fresh ephemeral k.
    pub fn encrypt(&mut self, message: &Message) -> Result<CipheredMessage> {
        let k = draw_scalar(&mut self.rng, self.curve.field());
        debug!("K : {}", k);

        let c1 = self.curve.mul(k, &self.generator)?;
        let mask = self.curve.mul(k, self.keys.public_key())?;
        let c2 = self.curve.add(&message.to_point(), &mask)?;

        debug!("C1: {}", c1);
        debug!("C2: {}", c2);
        Ok(CipheredMessage { c1, c2 })
    }

    /// M = C2 - dC1, since dC1 = dkG = kK.
    fn decrypt(&self, ciphered: &CipheredMessage) -> Result<Message> {
        let shared = self.curve.mul(self.keys.private_key(), &ciphered.c1)?;
        let point = self.curve.sub(&ciphered.c2, &shared)?;
        Ok(Message::from_point(point))
    }

    /// Decrypt with the private key held by this instance.
    pub fn decrypt_backdoor(&self, ciphered: &CipheredMessage) -> Result<Message> {
        self.decrypt(ciphered)
    }
}
