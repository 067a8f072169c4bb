//! PSUW is a warrant-based proxy-signature scheme (and implementation),
//! built on top of asynchronous remote key generation (ARKG) and plain
//! ECDSA.
//!
//! A *delegator* authorizes a *proxy* to sign messages on its behalf,
//! without either party ever learning the other's secret key. Instead of
//! handing over key material, the delegator derives a fresh public key from
//! the proxy's public key, endorses it with an ordinary signature, and sends
//! the result, the *warrant*, to the proxy, together with a *credential*.
//! Only the proxy, holding its own secret key, can turn the credential into
//! the secret key matching the warrant, and it only does so at the moment it
//! actually signs.
//!
//! # Warning
//!
//! This is experimental cryptographic software.
//!
//! - The protocol does not have a formal proof of security.
//! - This library has not undergone any form of audit.
//!
//! # Design
//!
//! The protocol consists of three operations:
//!
//! - [`delegate`] runs on the delegator, producing a [`Warrant`] and a
//!   credential from the proxy's public key.
//! - [`psign`] runs on the proxy. It first checks the warrant's endorsement
//!   against the delegator's public key, then reconstructs the derived
//!   secret key from the credential, and finally signs the message with it.
//! - [`pverify`] runs anywhere. Given only the delegator's public key, a
//!   [`ProxySignature`] and the message, it checks that both embedded
//!   signatures are canonical, that the endorsement verifies, and that the
//!   proxy's signature verifies under the warrant's derived key.
//!
//! All signatures this crate produces are in canonical low-s form, and
//! [`pverify`] rejects any signature that isn't, closing the usual ECDSA
//! malleability channel: the high-s twin of a valid signature still
//! satisfies the raw ECDSA equation, but never verifies here.
//!
//! The key derivation step is abstracted behind the [`KeyDerivation`] trait,
//! with [`Arkg`] providing the standard instantiation via additive EC-point
//! blinding. Any other derivation (HKDF-based, say) can be substituted, as
//! long as deriving the secret key from a credential reproduces exactly the
//! public key that was derived when the credential was created.
//!
//! # Generic Curves
//!
//! The library is generic over curves, through the [`PsuwCurve`] trait,
//! which can be implemented for any curve from the RustCrypto
//! [elliptic-curves](https://github.com/RustCrypto/elliptic-curves) suite.
//!
//! Implementations for some existing curves are provided behind features:
//!
//! | Curve | Feature |
//! |-------|---------|
//! |Secp256k1|`k256`|
//! |NistP256|`p256`|
//!
//! # Example
//!
//! ```ignore
//! use k256::Secp256k1;
//! use psuw::{delegate, keygen, psign, pverify, Arkg};
//! use rand_core::OsRng;
//!
//! let delegator = keygen::<Secp256k1>(&mut OsRng);
//! let proxy = keygen::<Secp256k1>(&mut OsRng);
//!
//! // Delegator side: warrant and credential travel to the proxy out-of-band.
//! let (warrant, credential) =
//!     delegate(&mut OsRng, &Arkg, &delegator.private_key, &proxy.public_key)?;
//!
//! // Proxy side.
//! let sig = psign(
//!     &mut OsRng,
//!     &Arkg,
//!     &proxy.private_key,
//!     &delegator.public_key,
//!     &warrant,
//!     &credential,
//!     b"hello",
//! )?;
//!
//! // Anyone can verify with just the delegator's public key.
//! assert!(pverify(&delegator.public_key, &sig, b"hello"));
//! ```
use core::fmt;
use std::error;

mod arkg;
mod compat;
mod crypto;
mod delegate;
mod ecdsa;
mod keys;
mod serde;
mod sign;
mod verify;

pub use self::arkg::{Arkg, ArkgCredential, KeyDerivation};
pub use self::compat::PsuwCurve;
pub use self::delegate::{delegate, Warrant};
pub use self::ecdsa::Signature;
pub use self::keys::{keygen, KeyPair};
pub use self::sign::{psign, ProxySignature};
pub use self::verify::pverify;

/// Represents an error which can happen when running the protocol.
///
/// Verification failure of a finished proxy signature is *not* an error:
/// [`pverify`] just returns `false`. Errors only arise while producing
/// values, and they're all recoverable at the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A byte string failed to decode as a point on the curve.
    InvalidKey,
    /// A warrant's endorsement failed to verify during signing.
    ///
    /// The usual remedy is to request a fresh warrant from the delegator.
    InvalidWarrant,
    /// A credential did not match the secret key it was used with.
    DerivationFailed,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidKey => write!(f, "invalid key encoding"),
            ProtocolError::InvalidWarrant => {
                write!(f, "warrant endorsement failed to verify")
            }
            ProtocolError::DerivationFailed => {
                write!(f, "credential does not match this key pair")
            }
        }
    }
}

impl error::Error for ProtocolError {}
