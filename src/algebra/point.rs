//! Point-valued operations: identity, multi-scalar sums, and Diffie-Hellman secret derivation.

use crate::algebra::Point;
use crate::constants::DST_DH_SECRET;
use group::Group;
use sha3::Digest;
use zeroize::Zeroize;

/// Symmetric key material derived from a group element via [`point_to_dh_secret`].
///
/// Opaque and zeroized on drop: a `DhSecret` is key-equivalent material, not a value to log or
/// compare for debugging.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct DhSecret(pub(crate) [u8; crate::constants::DH_SECRET_NUM_BYTES]);

impl DhSecret {
    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; crate::constants::DH_SECRET_NUM_BYTES] {
        &self.0
    }
}

impl PartialEq for DhSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        self.0.ct_eq(&other.0).into()
    }
}

/// The identity element of the group (additive zero).
pub fn point_identity() -> Point {
    Point::identity()
}

/// `Σ P_i .* s_i` for a list of (point, scalar) pairs.
pub fn mul_and_sum(pairs: &[(Point, crate::algebra::Scalar)]) -> Point {
    pairs
        .iter()
        .fold(point_identity(), |acc, (p, s)| acc + *p * s)
}

/// `Σ_{j=0}^{k} P_j .* x^j`, i.e. evaluating the "polynomial" whose coefficients are the given
/// points at the scalar `x`, in the exponent. Used by `createXi` (PVSS) and by any other site that
/// needs to recombine coefficient commitments into a per-participant commitment.
///
/// Accumulates with a running power of `x` rather than repeated full exponentiation, per the
/// convention documented for `createXi`.
pub fn mul_power_and_sum(points: &[Point], x: &crate::algebra::Scalar) -> Point {
    use ff::Field;

    let mut acc = point_identity();
    let mut x_pow = crate::algebra::Scalar::one();
    for p in points {
        acc += *p * x_pow;
        x_pow *= x;
    }
    acc
}

/// Hashes a group element down to symmetric key material (`SHA3-256`, domain-separated).
pub fn point_to_dh_secret(p: &Point) -> DhSecret {
    let bytes = crate::algebra::serialization::point_to_bytes(p);

    let mut hasher = sha3::Sha3_256::new();
    hasher.update(DST_DH_SECRET);
    hasher.update(bytes);
    let digest = hasher.finalize();

    let mut out = [0u8; crate::constants::DH_SECRET_NUM_BYTES];
    out.copy_from_slice(digest.as_slice());
    DhSecret(out)
}
