use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::arkg::KeyDerivation;
use crate::compat::PsuwCurve;
use crate::ecdsa::Signature;
use crate::serde::{deserialize_affine_point, serialize_affine_point};
use crate::ProtocolError;

/// A warrant, authorizing whoever can reconstruct the derived secret key to
/// sign on the delegator's behalf.
///
/// The endorsement is the delegator's own signature over the canonical
/// encoding of the derived public key. A warrant is immutable once created,
/// carries no secret material, and is safe to publish. It stays valid for
/// any number of proxy signatures: no expiry or revocation is modeled.
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct Warrant<C: PsuwCurve> {
    /// The public key the proxy will sign under.
    #[serde(
        serialize_with = "serialize_affine_point::<C, _>",
        deserialize_with = "deserialize_affine_point::<C, _>"
    )]
    pub derived_public_key: C::AffinePoint,
    /// The delegator's signature endorsing that key.
    pub endorsement: Signature<C>,
}

/// Create a warrant for a proxy, from the proxy's public key alone.
///
/// This runs on the delegator. The returned warrant and credential both need
/// to reach the proxy, out-of-band; nothing secret of the proxy is consumed,
/// and nothing secret of the delegator leaks into the result.
///
/// The derivation is keyed by the proxy's public key only, with an empty
/// context string. No policy scope or expiry is bound into the derived key.
pub fn delegate<C: PsuwCurve, K: KeyDerivation<C>>(
    rng: &mut impl CryptoRngCore,
    derivation: &K,
    sk_delegator: &C::Scalar,
    pk_proxy: &C::AffinePoint,
) -> Result<(Warrant<C>, K::Credential), ProtocolError> {
    let (derived_public_key, credential) = derivation.derive_public_key(rng, pk_proxy, b"")?;
    let endorsement = Signature::sign(rng, sk_delegator, &C::encode_point(&derived_public_key));
    let warrant = Warrant {
        derived_public_key,
        endorsement,
    };
    Ok((warrant, credential))
}
