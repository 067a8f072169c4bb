use std::io::Write;

use ck_meow::Meow;
use elliptic_curve::{ops::Reduce, Curve, FieldBytes};
use serde::Serialize;

use crate::compat::PsuwCurve;
use crate::serde::encode_writer;

struct MeowWriter<'a>(&'a mut Meow);

impl<'a> Write for MeowWriter<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.ad(buf, true);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Hash an arbitrary serializable value to a scalar, under some label.
///
/// Different labels give independent hash functions.
pub(crate) fn hash_to_scalar<C: PsuwCurve, T: Serialize + ?Sized>(
    label: &'static [u8],
    val: &T,
) -> C::Scalar {
    let mut meow = Meow::new(label);

    meow.ad(&[], false);
    encode_writer(&mut MeowWriter(&mut meow), val);

    let mut out = FieldBytes::<C>::default();
    meow.prf(out.as_mut_slice(), false);
    <C::Scalar as Reduce<<C as Curve>::Uint>>::reduce_bytes(&out)
}

#[cfg(test)]
mod test {
    use k256::{Scalar, Secp256k1};

    use super::*;

    #[test]
    fn test_hashing_is_deterministic() {
        let a: Scalar = hash_to_scalar::<Secp256k1, _>(b"test label", b"payload".as_slice());
        let b: Scalar = hash_to_scalar::<Secp256k1, _>(b"test label", b"payload".as_slice());
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels_and_values_separate_hashes() {
        let a: Scalar = hash_to_scalar::<Secp256k1, _>(b"label A", b"payload".as_slice());
        let b: Scalar = hash_to_scalar::<Secp256k1, _>(b"label B", b"payload".as_slice());
        let c: Scalar = hash_to_scalar::<Secp256k1, _>(b"label A", b"other".as_slice());
        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
