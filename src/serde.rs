use std::io::Write;

use elliptic_curve::ScalarPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::compat::PsuwCurve;

/// Encode an arbitrary serializable value into a writer.
pub(crate) fn encode_writer<T: Serialize + ?Sized, W: Write>(writer: &mut W, val: &T) {
    rmp_serde::encode::write(writer, val).expect("failed to encode value")
}

/// Serialize a scalar, through its primitive representation.
pub(crate) fn serialize_scalar<C: PsuwCurve, S: Serializer>(
    scalar: &C::Scalar,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let primitive: ScalarPrimitive<C> = (*scalar).into();
    primitive.serialize(serializer)
}

/// Deserialize a scalar, through its primitive representation.
pub(crate) fn deserialize_scalar<'de, C: PsuwCurve, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<C::Scalar, D::Error> {
    let primitive = ScalarPrimitive::<C>::deserialize(deserializer)?;
    Ok(primitive.into())
}

/// Serialize a single affine point.
pub(crate) fn serialize_affine_point<C: PsuwCurve, S: Serializer>(
    point: &C::AffinePoint,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    C::serialize_point(point, serializer)
}

/// Deserialize a single affine point.
pub(crate) fn deserialize_affine_point<'de, C: PsuwCurve, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<C::AffinePoint, D::Error> {
    C::deserialize_point(deserializer)
}
