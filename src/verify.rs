use crate::compat::PsuwCurve;
use crate::sign::ProxySignature;

/// Verify a proxy signature on a message, given the delegator's public key.
///
/// Deterministic, side-effect free, and total: every well-typed input maps
/// to `true` or `false`, never an error. Three checks, all of which must
/// hold:
///
/// 1. Both the endorsement and the proxy's signature are canonical. A
///    non-canonical signature is rejected outright, never normalized: its
///    low-s twin would otherwise be a second, distinct-looking signature for
///    the same message.
/// 2. The endorsement verifies, under the delegator's key, over the
///    canonical encoding of the derived public key.
/// 3. The proxy's signature verifies, under the derived key, over the
///    message.
#[must_use]
pub fn pverify<C: PsuwCurve>(
    pk_delegator: &C::AffinePoint,
    proxy_signature: &ProxySignature<C>,
    msg: &[u8],
) -> bool {
    let warrant = &proxy_signature.warrant;
    if !warrant.endorsement.is_canonical() || !proxy_signature.signature.is_canonical() {
        return false;
    }
    let content = C::encode_point(&warrant.derived_public_key);
    warrant.endorsement.verify(pk_delegator, &content)
        && proxy_signature
            .signature
            .verify(&warrant.derived_public_key, msg)
}

#[cfg(test)]
mod test {
    use k256::Secp256k1;
    use rand_core::OsRng;

    use super::*;
    use crate::arkg::Arkg;
    use crate::delegate::delegate;
    use crate::keys::keygen;
    use crate::sign::psign;

    fn setup(msg: &[u8]) -> (crate::KeyPair<Secp256k1>, ProxySignature<Secp256k1>) {
        let delegator = keygen::<Secp256k1>(&mut OsRng);
        let proxy = keygen::<Secp256k1>(&mut OsRng);
        let (warrant, credential) = delegate(
            &mut OsRng,
            &Arkg,
            &delegator.private_key,
            &proxy.public_key,
        )
        .unwrap();
        let sig = psign(
            &mut OsRng,
            &Arkg,
            &proxy.private_key,
            &delegator.public_key,
            &warrant,
            &credential,
            msg,
        )
        .unwrap();
        (delegator, sig)
    }

    #[test]
    fn test_round_trip() {
        let (delegator, sig) = setup(b"hello");
        assert!(pverify(&delegator.public_key, &sig, b"hello"));
        assert!(!pverify(&delegator.public_key, &sig, b"goodbye"));
    }

    #[test]
    fn test_wrong_delegator_rejected() {
        let (_, sig) = setup(b"hello");
        let stranger = keygen::<Secp256k1>(&mut OsRng);
        assert!(!pverify(&stranger.public_key, &sig, b"hello"));
    }

    #[test]
    fn test_non_canonical_signature_rejected() {
        let (delegator, mut sig) = setup(b"hello");

        // The high-s twin still satisfies the raw ECDSA equation...
        sig.signature.s = -sig.signature.s;
        assert!(sig
            .signature
            .verify(&sig.warrant.derived_public_key, b"hello"));
        // ...but is not a valid proxy signature.
        assert!(!pverify(&delegator.public_key, &sig, b"hello"));
    }

    #[test]
    fn test_non_canonical_endorsement_rejected() {
        let (delegator, mut sig) = setup(b"hello");

        sig.warrant.endorsement.s = -sig.warrant.endorsement.s;
        let content = Secp256k1::encode_point(&sig.warrant.derived_public_key);
        assert!(sig.warrant.endorsement.verify(&delegator.public_key, &content));
        assert!(!pverify(&delegator.public_key, &sig, b"hello"));
    }

    #[test]
    fn test_swapped_warrant_rejected() {
        let (delegator, sig) = setup(b"hello");
        let (_, other_sig) = setup(b"hello");

        // A signature under one warrant, presented with another.
        let frankenstein = ProxySignature {
            signature: sig.signature,
            warrant: other_sig.warrant,
        };
        assert!(!pverify(&delegator.public_key, &frankenstein, b"hello"));
    }
}
