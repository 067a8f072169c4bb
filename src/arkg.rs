use elliptic_curve::{Field, Group};
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::compat::PsuwCurve;
use crate::crypto::hash_to_scalar;
use crate::serde::{deserialize_affine_point, serialize_affine_point};
use crate::ProtocolError;

const KDF_LABEL: &[u8] = b"psuw v0.1.0 arkg kdf";

/// A scheme for deriving key pairs remotely, from public keys alone.
///
/// This is the ARKG primitive. [`derive_public_key`] produces a fresh public
/// key and a credential from a base public key; [`derive_secret_key`]
/// reconstructs the matching secret key from the base *secret* key and that
/// credential. The two halves run on different machines, at different times,
/// and neither needs anything secret from the other's side.
///
/// Implementations must preserve the invariant the whole protocol hangs off
/// of: deriving a secret key from `sk` and a credential must land exactly on
/// the public key that `derive_public_key` returned from the matching `pk`
/// when it created that credential.
///
/// [`derive_public_key`]: KeyDerivation::derive_public_key
/// [`derive_secret_key`]: KeyDerivation::derive_secret_key
pub trait KeyDerivation<C: PsuwCurve> {
    /// Auxiliary data linking a derived public key to the base key pair.
    ///
    /// Credentials carry no secret material, but must reach the holder of
    /// the base secret key for the derived secret key to be recoverable.
    type Credential;

    /// Derive a fresh public key, and the credential to reconstruct its
    /// secret half, from a base public key.
    ///
    /// `info` binds arbitrary context into the derivation. The proxy
    /// signature protocol passes an empty string here, deriving from the
    /// key alone.
    fn derive_public_key(
        &self,
        rng: &mut impl CryptoRngCore,
        public_key: &C::AffinePoint,
        info: &[u8],
    ) -> Result<(C::AffinePoint, Self::Credential), ProtocolError>;

    /// Reconstruct the secret key matching a derived public key.
    ///
    /// Fails with [`ProtocolError::DerivationFailed`] when the credential
    /// was not created for this secret key's public counterpart, or has
    /// been corrupted.
    fn derive_secret_key(
        &self,
        private_key: &C::Scalar,
        credential: &Self::Credential,
    ) -> Result<C::Scalar, ProtocolError>;
}

/// The credential produced by [`Arkg`].
#[derive(Clone, Serialize, Deserialize)]
pub struct ArkgCredential<C: PsuwCurve> {
    /// The ephemeral Diffie-Hellman point the blinding factor is derived from.
    #[serde(
        serialize_with = "serialize_affine_point::<C, _>",
        deserialize_with = "deserialize_affine_point::<C, _>"
    )]
    pub big_e: C::AffinePoint,
    /// The public key this credential derives, kept for key confirmation.
    #[serde(
        serialize_with = "serialize_affine_point::<C, _>",
        deserialize_with = "deserialize_affine_point::<C, _>"
    )]
    pub derived_public_key: C::AffinePoint,
    /// The context string the derivation was bound to.
    pub info: Vec<u8>,
}

/// Asynchronous remote key generation via additive EC-point blinding.
///
/// Derivation picks an ephemeral scalar `e`, runs Diffie-Hellman against the
/// base public key, hashes the result into a blinding factor `t`, and
/// returns `pk + t * G`. The credential holds `E = e * G`: with it, the base
/// secret key recomputes the same Diffie-Hellman point, and hence `t`, and
/// the derived secret key is just `sk + t`.
#[derive(Debug, Clone, Copy)]
pub struct Arkg;

impl<C: PsuwCurve> KeyDerivation<C> for Arkg {
    type Credential = ArkgCredential<C>;

    fn derive_public_key(
        &self,
        rng: &mut impl CryptoRngCore,
        public_key: &C::AffinePoint,
        info: &[u8],
    ) -> Result<(C::AffinePoint, ArkgCredential<C>), ProtocolError> {
        let base: C::ProjectivePoint = (*public_key).into();
        loop {
            let e = C::Scalar::random(&mut *rng);
            if e.is_zero().into() {
                continue;
            }
            let big_e: C::AffinePoint = (C::ProjectivePoint::generator() * e).into();
            let shared: C::AffinePoint = (base * e).into();
            let t = blinding_factor::<C>(&big_e, &shared, info);
            if t.is_zero().into() {
                continue;
            }
            let derived = base + C::ProjectivePoint::generator() * t;
            if derived.is_identity().into() {
                continue;
            }
            let derived_public_key: C::AffinePoint = derived.into();
            let credential = ArkgCredential {
                big_e,
                derived_public_key,
                info: info.to_vec(),
            };
            return Ok((derived_public_key, credential));
        }
    }

    fn derive_secret_key(
        &self,
        private_key: &C::Scalar,
        credential: &ArkgCredential<C>,
    ) -> Result<C::Scalar, ProtocolError> {
        let shared: C::AffinePoint =
            (C::ProjectivePoint::from(credential.big_e) * *private_key).into();
        let t = blinding_factor::<C>(&credential.big_e, &shared, &credential.info);
        let derived = *private_key + t;

        // Key confirmation: a credential made for a different key pair, or a
        // corrupted one, lands on a different point here.
        let expected: C::ProjectivePoint = credential.derived_public_key.into();
        if C::ProjectivePoint::generator() * derived != expected {
            return Err(ProtocolError::DerivationFailed);
        }
        Ok(derived)
    }
}

fn blinding_factor<C: PsuwCurve>(
    big_e: &C::AffinePoint,
    shared: &C::AffinePoint,
    info: &[u8],
) -> C::Scalar {
    hash_to_scalar::<C, _>(
        KDF_LABEL,
        &(
            C::NAME,
            C::encode_point(big_e),
            C::encode_point(shared),
            info,
        ),
    )
}
