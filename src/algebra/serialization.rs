//! Canonical, fixed-size byte encodings for `Point` and `Scalar` (§6 of `SPEC_FULL.md`).

use crate::algebra::{Point, Scalar};
use crate::constants::{POINT_NUM_BYTES, SCALAR_NUM_BYTES};
use crate::error::PvssError;
use group::GroupEncoding;

/// Encodes a point as its 48-byte compressed representation.
pub fn point_to_bytes(p: &Point) -> [u8; POINT_NUM_BYTES] {
    p.to_compressed()
}

/// Decodes a point from its 48-byte compressed representation.
pub fn point_from_bytes(field: &'static str, bytes: &[u8]) -> Result<Point, PvssError> {
    let arr: [u8; POINT_NUM_BYTES] =
        bytes
            .try_into()
            .map_err(|_| PvssError::LengthMismatch {
                field,
                expected: POINT_NUM_BYTES,
                actual: bytes.len(),
            })?;

    Option::from(Point::from_bytes(&arr)).ok_or(PvssError::InvalidPoint { field })
}

/// Encodes a scalar as its 32-byte canonical representation.
pub fn scalar_to_bytes(s: &Scalar) -> [u8; SCALAR_NUM_BYTES] {
    use ff::PrimeField;
    s.to_repr()
}

/// Decodes a scalar from its 32-byte canonical representation.
pub fn scalar_from_bytes(field: &'static str, bytes: &[u8]) -> Result<Scalar, PvssError> {
    use ff::PrimeField;

    let arr: [u8; SCALAR_NUM_BYTES] =
        bytes
            .try_into()
            .map_err(|_| PvssError::LengthMismatch {
                field,
                expected: SCALAR_NUM_BYTES,
                actual: bytes.len(),
            })?;

    Option::from(Scalar::from_repr(arr.into())).ok_or(PvssError::InvalidScalar { field })
}
