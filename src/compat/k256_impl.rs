use super::*;

use digest::{Digest, FixedOutput};
use ecdsa::hazmat::DigestPrimitive;
use elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{FieldBytes, Scalar, Secp256k1};
use serde::{Deserialize, Serialize};

impl PsuwCurve for Secp256k1 {
    const NAME: &'static [u8] = b"Secp256k1";

    fn scalar_hash(msg: &[u8]) -> Self::Scalar {
        let digest = <Secp256k1 as DigestPrimitive>::Digest::new_with_prefix(msg);
        let m_bytes: FieldBytes = digest.finalize_fixed();
        <Scalar as Reduce<<Secp256k1 as Curve>::Uint>>::reduce_bytes(&m_bytes)
    }

    fn encode_point(point: &Self::AffinePoint) -> Vec<u8> {
        point.to_encoded_point(true).as_bytes().to_vec()
    }

    fn decode_point(bytes: &[u8]) -> Result<Self::AffinePoint, ProtocolError> {
        let encoded =
            k256::EncodedPoint::from_bytes(bytes).map_err(|_| ProtocolError::InvalidKey)?;
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

#[cfg(test)]
mod test {
    use elliptic_curve::Group;
    use k256::{ProjectivePoint, Secp256k1};
    use rand_core::OsRng;

    use super::super::PsuwCurve;
    use crate::ProtocolError;

    #[test]
    fn test_point_encoding_round_trips() {
        let point = ProjectivePoint::random(&mut OsRng).to_affine();
        let bytes = Secp256k1::encode_point(&point);
        // SEC1 compressed: tag byte plus the x coordinate.
        assert_eq!(bytes.len(), 33);
        let decoded = Secp256k1::decode_point(&bytes).unwrap();
        assert_eq!(decoded, point);
    }

    #[test]
    fn test_decoding_garbage_fails() {
        assert_eq!(
            Secp256k1::decode_point(b"not a point"),
            Err(ProtocolError::InvalidKey)
        );
        // A compressed prefix with an x coordinate off the curve.
        let mut bytes = vec![0x02];
        bytes.extend_from_slice(&[0xff; 32]);
        assert_eq!(
            Secp256k1::decode_point(&bytes),
            Err(ProtocolError::InvalidKey)
        );
    }
}
