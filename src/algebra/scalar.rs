//! Scalar-field operations that sit outside the `ff::Field`/`ff::PrimeField` contract already
//! implemented by `blstrs::Scalar`: sampling a fresh random scalar, converting a small integer
//! (a participant index) into a scalar, inverting a scalar, and hashing group elements to a scalar
//! for Fiat-Shamir-adjacent uses.

use crate::algebra::{serialization, Point, Scalar};
use ff::Field;
use rand_core::{CryptoRng, RngCore};
use sha3::Digest;

/// Samples a uniformly random scalar.
pub fn key_generate<R: RngCore + CryptoRng>(rng: &mut R) -> Scalar {
    Scalar::random(rng)
}

/// Converts a small non-negative integer (a 1-based participant index, typically) into a scalar.
pub fn key_from_num(n: u64) -> Scalar {
    Scalar::from(n)
}

/// Inverts a nonzero scalar.
///
/// # Panics
///
/// Panics if `s` is zero. A zero scalar reaching this function is a precondition violation by the
/// caller (every legitimate witness and Lagrange denominator in this crate is provably nonzero), not
/// untrusted input, so this is not part of the `Result` error surface (see `SPEC_FULL.md` §7).
pub fn key_inverse(s: &Scalar) -> Scalar {
    Option::from(s.invert()).expect("key_inverse called on a zero scalar")
}

/// Hashes a sequence of points (and a domain-separation tag) down to a scalar, by hashing their
/// canonical encodings with SHA3-512 and reducing the 512-bit digest modulo the scalar field order.
///
/// Same construction as `curve25519-dalek`'s wide-reduction hash-to-scalar; see
/// <https://crypto.stackexchange.com/questions/88002>.
pub fn hash_points_to_scalar(points: &[Point], dst: &[u8]) -> Scalar {
    let mut hasher = sha3::Sha3_512::new();
    hasher.update(dst);
    for p in points {
        hasher.update(serialization::point_to_bytes(p));
    }
    let digest = hasher.finalize();
    let mut bytes = [0u8; 64];
    bytes.copy_from_slice(digest.as_slice());

    crate::utils::biguint::wide_bytes_to_scalar(&bytes)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algebra::curve_generator;
    use crate::constants::DST_HASH_TO_SCALAR;
    use rand::thread_rng;

    #[test]
    fn hash_points_to_scalar_is_deterministic() {
        let g = curve_generator();
        let points = [g, point_from_secret_for_test(&key_generate(&mut thread_rng()))];

        let a = hash_points_to_scalar(&points, DST_HASH_TO_SCALAR);
        let b = hash_points_to_scalar(&points, DST_HASH_TO_SCALAR);
        assert_eq!(a, b);
    }

    #[test]
    fn hash_points_to_scalar_is_sensitive_to_dst_and_input() {
        let mut rng = thread_rng();
        let p1 = point_from_secret_for_test(&key_generate(&mut rng));
        let p2 = point_from_secret_for_test(&key_generate(&mut rng));

        let baseline = hash_points_to_scalar(&[p1, p2], DST_HASH_TO_SCALAR);
        assert_ne!(baseline, hash_points_to_scalar(&[p2, p1], DST_HASH_TO_SCALAR));
        assert_ne!(baseline, hash_points_to_scalar(&[p1, p2], b"OTHER_DST"));
        assert_ne!(baseline, hash_points_to_scalar(&[p1], DST_HASH_TO_SCALAR));
    }

    fn point_from_secret_for_test(s: &Scalar) -> Point {
        crate::algebra::point_from_secret(s)
    }
}
