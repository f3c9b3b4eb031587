//! Conversions between `blstrs::Scalar` and `num_bigint::BigUint`, needed to reduce wide hash
//! output modulo the scalar field order (`ff` does not expose a "reduce from wide bytes"
//! operation, so we do the reduction ourselves, the same way the reference PVSS implementation's
//! Rust port did).

use crate::algebra::Scalar;
use ff::PrimeField;
use num_bigint::BigUint;
use num_integer::Integer;

/// Returns the order of the scalar field as a `BigUint`.
pub(crate) fn scalar_field_order() -> BigUint {
    // `Scalar::MODULUS` is the field modulus formatted as a `0x`-prefixed hex string.
    let hex = Scalar::MODULUS.trim_start_matches("0x");
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("scalar field modulus is valid hex")
}

/// Reduces a wide (64-byte little-endian) hash digest modulo the scalar field order and returns
/// the result as a `Scalar`. Shared by [`crate::algebra::hash_points_to_scalar`] and
/// [`crate::utils::fiat_shamir::FiatShamirTranscript::challenge_scalar`], which otherwise squeeze
/// their challenge bytes from different hash constructions (a one-shot SHA3-512 versus a Merlin
/// transcript) but need the same wide-reduction step to land in the field.
pub(crate) fn wide_bytes_to_scalar(bytes: &[u8; 64]) -> Scalar {
    let bignum = BigUint::from_bytes_le(bytes);
    let remainder = bignum.mod_floor(&crate::constants::SCALAR_FIELD_ORDER);
    biguint_to_scalar(&remainder)
}

/// Converts a `BigUint` known to be reduced modulo the scalar field order into a `Scalar`.
pub(crate) fn biguint_to_scalar(n: &BigUint) -> Scalar {
    let mut bytes = n.to_bytes_le();
    bytes.resize(crate::constants::SCALAR_NUM_BYTES, 0);

    let mut repr = <Scalar as PrimeField>::Repr::default();
    repr.as_mut().copy_from_slice(&bytes);

    Option::from(Scalar::from_repr(repr)).expect("value is already reduced mod the field order")
}
