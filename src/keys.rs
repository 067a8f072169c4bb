use core::fmt;

use elliptic_curve::{Field, Group};
use rand_core::CryptoRngCore;

use crate::compat::PsuwCurve;

/// Represents the long-lived key pair of one protocol actor.
///
/// Both the delegator and the proxy hold one of these. The private scalar
/// never needs to leave the actor that generated it: delegation works
/// entirely through derived public keys and credentials.
#[derive(Clone, Copy)]
pub struct KeyPair<C: PsuwCurve> {
    pub private_key: C::Scalar,
    pub public_key: C::AffinePoint,
}

impl<C: PsuwCurve> fmt::Debug for KeyPair<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &C::encode_point(&self.public_key))
            .finish()
    }
}

/// Generate a fresh key pair.
pub fn keygen<C: PsuwCurve>(rng: &mut impl CryptoRngCore) -> KeyPair<C> {
    loop {
        let private_key = C::Scalar::random(&mut *rng);
        if private_key.is_zero().into() {
            continue;
        }
        let public_key = (C::ProjectivePoint::generator() * private_key).into();
        return KeyPair {
            private_key,
            public_key,
        };
    }
}

#[cfg(test)]
mod test {
    use k256::{ProjectivePoint, Secp256k1};
    use rand_core::OsRng;

    use super::*;

    #[test]
    fn test_keygen() {
        let keys = keygen::<Secp256k1>(&mut OsRng);
        assert_eq!(
            ProjectivePoint::from(keys.public_key),
            ProjectivePoint::GENERATOR * keys.private_key
        );

        let other = keygen::<Secp256k1>(&mut OsRng);
        assert_ne!(keys.public_key, other.public_key);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let keys = keygen::<Secp256k1>(&mut OsRng);
        let out = format!("{:?}", keys);
        assert!(out.contains("<redacted>"));
    }
}
