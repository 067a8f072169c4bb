use elliptic_curve::{ops::Reduce, point::AffineCoordinates, Curve, CurveArithmetic, PrimeCurve};
use serde::{Deserializer, Serializer};

use crate::ProtocolError;

#[cfg(any(feature = "k256", test))]
mod k256_impl;
#[cfg(any(feature = "p256", test))]
mod p256_impl;

/// Represents a curve suitable for use in this protocol.
///
/// This is the trait that any curve usable in this library must implement.
/// This library does provide a few feature-gated implementations for curves
/// itself, beyond that you'll need to implement this trait yourself.
///
/// The bulk of the trait are the bounds requiring a curve according
/// to RustCrypto's traits.
///
/// Beyond that, we also require a name for domain separation, a way to hash
/// messages into scalars, and a deterministic, reversible byte encoding of
/// points. The encoding matters more than usual here: the delegator signs
/// the *encoding* of the derived public key, so the proxy and any verifier
/// must reproduce those bytes exactly, or endorsements will spuriously fail.
pub trait PsuwCurve: PrimeCurve + CurveArithmetic {
    const NAME: &'static [u8];

    /// Hash an arbitrary message in order to produce a scalar.
    fn scalar_hash(msg: &[u8]) -> Self::Scalar;

    /// Encode a point to bytes, deterministically.
    fn encode_point(point: &Self::AffinePoint) -> Vec<u8>;

    /// Decode a point from the bytes produced by [`Self::encode_point`].
    fn decode_point(bytes: &[u8]) -> Result<Self::AffinePoint, ProtocolError>;

    /// Serialize a point with serde.
    fn serialize_point<S: Serializer>(
        point: &Self::AffinePoint,
        serializer: S,
    ) -> Result<S::Ok, S::Error>;

    /// Deserialize a point with serde.
    fn deserialize_point<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self::AffinePoint, D::Error>;
}

/// Get the x coordinate of a point, as a scalar
pub(crate) fn x_coordinate<C: PsuwCurve>(point: &C::AffinePoint) -> C::Scalar {
    <C::Scalar as Reduce<<C as Curve>::Uint>>::reduce_bytes(&point.x())
}
