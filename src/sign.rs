use elliptic_curve::Group;
use rand_core::CryptoRngCore;
use serde::{Deserialize, Serialize};

use crate::arkg::KeyDerivation;
use crate::compat::PsuwCurve;
use crate::delegate::Warrant;
use crate::ecdsa::Signature;
use crate::ProtocolError;

/// A proxy signature: the proxy's signature on a message, bundled with the
/// warrant that authorizes it.
///
/// This is self-contained. A verifier needs the delegator's public key, the
/// message, and nothing else.
#[derive(Clone, Serialize, Deserialize)]
#[serde(bound(serialize = "", deserialize = ""))]
pub struct ProxySignature<C: PsuwCurve> {
    /// The signature on the message, under the warrant's derived key.
    pub signature: Signature<C>,
    /// The warrant this signature was produced under.
    pub warrant: Warrant<C>,
}

/// Sign a message on the delegator's behalf.
///
/// This runs on the proxy, with the warrant and credential it received from
/// the delegator. Three steps, each of which fails closed:
///
/// 1. Validate the warrant's endorsement against the delegator's public key.
///    A warrant that doesn't verify yields [`ProtocolError::InvalidWarrant`]
///    before anything is derived or signed. A malformed warrant is an
///    ordinary error, not a reason to crash a long-running signer.
/// 2. Reconstruct the derived secret key from the credential, and check that
///    it lands on the key the warrant endorses. A credential that wasn't
///    made for this proxy's key pair, or that belongs to a different warrant,
///    yields [`ProtocolError::DerivationFailed`].
/// 3. Sign the message under the derived key.
///
/// On success the embedded warrant is endorsement-valid, and the signature
/// is canonical and verifies under the warrant's derived public key.
pub fn psign<C: PsuwCurve, K: KeyDerivation<C>>(
    rng: &mut impl CryptoRngCore,
    derivation: &K,
    sk_proxy: &C::Scalar,
    pk_delegator: &C::AffinePoint,
    warrant: &Warrant<C>,
    credential: &K::Credential,
    msg: &[u8],
) -> Result<ProxySignature<C>, ProtocolError> {
    let content = C::encode_point(&warrant.derived_public_key);
    if !warrant.endorsement.verify(pk_delegator, &content) {
        return Err(ProtocolError::InvalidWarrant);
    }

    let derived_sk = derivation.derive_secret_key(sk_proxy, credential)?;
    // A credential paired with the wrong warrant derives a key the
    // endorsement doesn't cover; the signature would never verify.
    let endorsed: C::ProjectivePoint = warrant.derived_public_key.into();
    if C::ProjectivePoint::generator() * derived_sk != endorsed {
        return Err(ProtocolError::DerivationFailed);
    }

    let signature = Signature::sign(rng, &derived_sk, msg);
    Ok(ProxySignature {
        signature,
        warrant: warrant.clone(),
    })
}
