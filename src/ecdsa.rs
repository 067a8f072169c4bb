use elliptic_curve::{ops::Invert, scalar::IsHigh, Field, Group};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};
use subtle::ConditionallySelectable;

use crate::compat::{self, PsuwCurve};
use crate::serde::{deserialize_scalar, serialize_scalar};

/// Represents an ECDSA signature.
///
/// Raw ECDSA is malleable: for any valid `(r, s)`, the pair `(r, -s)` also
/// satisfies the verification equation. Every signature produced by this
/// crate therefore has its second scalar normalized to the lower half of the
/// scalar range, and the protocol rejects signatures that aren't normalized
/// instead of fixing them up.
#[derive(Clone, Copy, Serialize, Deserialize)]
pub struct Signature<C: PsuwCurve> {
    /// The first scalar, derived from the x coordinate of the nonce point.
    #[serde(
        serialize_with = "serialize_scalar::<C, _>",
        deserialize_with = "deserialize_scalar::<C, _>"
    )]
    pub r: C::Scalar,
    /// The second scalar, normalized to be in the lower range.
    #[serde(
        serialize_with = "serialize_scalar::<C, _>",
        deserialize_with = "deserialize_scalar::<C, _>"
    )]
    pub s: C::Scalar,
}

impl<C: PsuwCurve> Signature<C> {
    /// Sign a message with a private key, drawing a fresh nonce from `rng`.
    ///
    /// The message is hashed to a scalar with the curve's associated digest.
    /// The resulting signature is always canonical.
    pub fn sign(rng: &mut impl CryptoRngCore, private_key: &C::Scalar, msg: &[u8]) -> Self {
        let m = C::scalar_hash(msg);
        loop {
            let k = C::Scalar::random(&mut *rng);
            if k.is_zero().into() {
                continue;
            }
            let big_r: C::AffinePoint = (C::ProjectivePoint::generator() * k).into();
            let r = compat::x_coordinate::<C>(&big_r);
            if r.is_zero().into() {
                continue;
            }
            let k_inv = Field::invert(&k).unwrap();
            let mut s = k_inv * (m + r * private_key);
            if s.is_zero().into() {
                continue;
            }
            s.conditional_assign(&(-s), s.is_high());
            return Self { r, s };
        }
    }

    /// Verify this signature against a public key and message.
    ///
    /// This checks the raw ECDSA equation only: the canonical and
    /// non-canonical form of a signature both pass. Canonicality is the
    /// protocol's concern, via [`Self::is_canonical`].
    #[must_use]
    pub fn verify(&self, public_key: &C::AffinePoint, msg: &[u8]) -> bool {
        if self.r.is_zero().into() || self.s.is_zero().into() {
            return false;
        }
        let s_inv = self.s.invert_vartime().unwrap();
        let m = C::scalar_hash(msg);
        let reproduced = (C::ProjectivePoint::generator() * (m * s_inv))
            + (C::ProjectivePoint::from(*public_key) * (self.r * s_inv));
        compat::x_coordinate::<C>(&reproduced.into()) == self.r
    }

    /// Check that the second scalar is in the lower half of the range.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        !bool::from(self.s.is_high())
    }
}
