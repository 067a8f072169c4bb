use super::*;

use digest::{Digest, FixedOutput};
use ecdsa::hazmat::DigestPrimitive;
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{FieldBytes, NistP256, Scalar};
use serde::{Deserialize, Serialize};

impl PsuwCurve for NistP256 {
    const NAME: &'static [u8] = b"NistP256";

    fn scalar_hash(msg: &[u8]) -> Self::Scalar {
        let digest = <NistP256 as DigestPrimitive>::Digest::new_with_prefix(msg);
        let m_bytes: FieldBytes = digest.finalize_fixed();
        <Scalar as Reduce<<NistP256 as Curve>::Uint>>::reduce_bytes(&m_bytes)
    }

    fn encode_point(point: &Self::AffinePoint) -> Vec<u8> {
        point.to_encoded_point(true).as_bytes().to_vec()
    }

    fn decode_point(bytes: &[u8]) -> Result<Self::AffinePoint, ProtocolError> {
        let encoded =
            p256::EncodedPoint::from_bytes(bytes).map_err(|_| ProtocolError::InvalidKey)?;
        Option::from(Self::AffinePoint::from_encoded_point(&encoded))
            .ok_or(ProtocolError::InvalidKey)
    }

    fn serialize_point<S: Serializer>(
        point: &Self::AffinePoint,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        point.serialize(serializer)
    }

    fn deserialize_point<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self::AffinePoint, D::Error> {
        Self::AffinePoint::deserialize(deserializer)
    }
}
