//! Domain-separation tags, wire sizes, and batch sizes used across the crate.

use num_bigint::BigUint;
use once_cell::sync::Lazy;

//
// Batch sizes for tests and benchmarks
//

pub const SMALL_THRESHOLD: usize = 3;
pub const SMALL_N: usize = 7;

pub const LARGE_THRESHOLD: usize = 67;
pub const LARGE_N: usize = 200;

//
// DSTs and seeds
//

/// Domain-separator for test/benchmark transcripts that are not meant to be verified against
/// production state. Used by `dleq`'s own unit tests, which exercise the sequential and parallel
/// proof system directly rather than through an escrow.
pub const DST_PVSS_TESTING_APP: &[u8; 24] = b"PVSS_CORE_BENCHMARK_TEST";

/// Domain-separator for the escrow's own DLEQ proof (`log_G(S) = log_h(h^{p(0)})`).
pub const DST_ESCROW_PROOF: &[u8; 22] = b"PVSS_CORE_ESCROW_PROOF";

/// Domain-separator for a Schoenmakers PVSS per-share DLEQ proof.
pub const DST_PVSS_SHARE: &[u8; 20] = b"PVSS_CORE_PVSS_SHARE";

/// Domain-separator for a SCRAPE per-share batched (parallel) DLEQ proof.
pub const DST_SCRAPE_SHARES: &[u8; 23] = b"PVSS_CORE_SCRAPE_SHARE";

/// Domain-separator for the share-decryption DLEQ proof (shared by both schemes).
pub const DST_DECRYPTION_PROOF: &[u8; 26] = b"PVSS_CORE_DECRYPTION_PROOF";

/// Domain-separator used when hashing a point to derive a `DhSecret`.
pub const DST_DH_SECRET: &[u8; 19] = b"PVSS_CORE_DH_SECRET";

/// Default domain-separator for [`crate::algebra::hash_points_to_scalar`] callers that don't need
/// a use-site-specific tag of their own.
pub const DST_HASH_TO_SCALAR: &[u8; 24] = b"PVSS_CORE_HASH_TO_SCALAR";

//
// Sizes
//

/// The size in bytes of a compressed G1 point (the curve's prime-order group element).
pub const POINT_NUM_BYTES: usize = 48;

/// The size in bytes of a canonically-encoded scalar.
pub const SCALAR_NUM_BYTES: usize = 32;

/// The size in bytes of a `DhSecret`.
pub const DH_SECRET_NUM_BYTES: usize = 32;

/// The size in bytes of a serialized `ShareId`.
pub const SHARE_ID_NUM_BYTES: usize = 4;

/// The BLS12-381 scalar field order, lazily materialized as a `BigUint` so that hash-to-scalar can
/// reduce a wide (64-byte) hash output modulo the field order.
pub(crate) static SCALAR_FIELD_ORDER: Lazy<BigUint> =
    Lazy::new(crate::utils::biguint::scalar_field_order);
