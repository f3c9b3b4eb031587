//! SCRAPE over DDH (§4.5): the same dealer/participant protocol surface as [`crate::pvss`], but
//! with all `n` per-share DLEQ proofs batched into a single [`dleq::ParallelProofs`] and a
//! dual-code ("perp") check that verifies all `n` encrypted shares in one group check, bringing
//! verifier cost from `O(nt)` down to `O(n)`.
//!
//! The dealer still publishes one coefficient commitment to the secret itself (`commitment_zero`,
//! `h .* p(0)`) for [`verify_secret`], but the *per-participant* commitments published for share
//! verification are evaluation commitments `V_i = h .* p(i)`, not coefficient commitments — this is
//! the structural difference from Schoenmakers PVSS that makes batching possible (§3 "Commitment").

use crate::algebra::serialization::{point_from_bytes, point_to_bytes};
use crate::algebra::{
    curve_generator, key_from_num, key_generate, key_inverse, mul_and_sum, point_from_secret,
    point_identity, Point, Scalar,
};
use crate::constants::{DST_DECRYPTION_PROOF, DST_ESCROW_PROOF, DST_SCRAPE_SHARES};
use crate::dleq;
use crate::error::PvssError;
use crate::keypair::{KeyPair, Participants};
use crate::polynomial::{recover_secret, Polynomial};
use ff::Field;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A dealer-side escrow, structurally identical to [`crate::pvss::Escrow`]: a degree-`t - 1`
/// sharing polynomial, a fresh second generator `h`, the committed secret, and the DLEQ proof
/// binding them.
pub struct Escrow {
    t: usize,
    extra_gen: Point,
    polynomial: Polynomial,
    secret: Point,
    commitment_zero: Point,
    proof: dleq::Proof,
}

impl Escrow {
    /// Deals a fresh secret to a `t`-of-`n` SCRAPE sharing. Uses the same `degree = t - 1`
    /// convention as [`crate::pvss::Escrow::new`] (see `DESIGN.md` for why this crate does not
    /// follow the historical reference's PVSS/SCRAPE threshold asymmetry).
    ///
    /// # Panics
    ///
    /// Panics if `t == 0`.
    pub fn new<R: RngCore + CryptoRng>(t: usize, rng: &mut R) -> Escrow {
        more_asserts::assert_ge!(t, 1, "SCRAPE threshold must be at least 1");

        let polynomial = Polynomial::generate(t - 1, rng);
        let r = key_generate(rng);
        let extra_gen = point_from_secret(&r);

        let p0 = polynomial.at_zero();
        let secret = point_from_secret(&p0);
        let commitment_zero = extra_gen * p0;

        let stmt = dleq::Statement::new(curve_generator(), secret, extra_gen, commitment_zero);
        let proof = dleq::prove(&stmt, &p0, DST_ESCROW_PROOF, rng);

        tracing::debug!(t, "dealt a new SCRAPE escrow");
        Escrow {
            t,
            extra_gen,
            polynomial,
            secret,
            commitment_zero,
            proof,
        }
    }

    pub fn threshold(&self) -> usize {
        self.t
    }

    pub fn extra_gen(&self) -> Point {
        self.extra_gen
    }

    pub fn secret(&self) -> Point {
        self.secret
    }

    /// `h .* p(0)`, published alongside the per-participant commitments so that [`verify_secret`]
    /// can check the recovered secret against the original escrow. Not one of the `n`
    /// [`create_commitments`][Escrow::create_commitments] evaluation commitments (those commit to
    /// `p(1)..p(n)`, never to `p(0)` itself).
    pub fn commitment_zero(&self) -> Point {
        self.commitment_zero
    }

    pub fn proof(&self) -> dleq::Proof {
        self.proof
    }

    /// Emits the `n` per-participant evaluation commitments `V_i = h .* p(i)`, `i = 1..=n`.
    pub fn create_commitments(&self, n: usize) -> Vec<Point> {
        (1..=n as u64)
            .map(|i| self.extra_gen * self.polynomial.evaluate_at_index(i))
            .collect()
    }

    /// Creates one encrypted share `E_i = PK_i .* p(i)` per participant, plus a single
    /// [`dleq::ParallelProofs`] batching all `n` statements `(h, V_i, PK_i, E_i)`.
    pub fn create_shares<R: RngCore + CryptoRng>(
        &self,
        participants: &Participants,
        rng: &mut R,
    ) -> (Vec<Point>, dleq::ParallelProofs) {
        let mut e = Vec::with_capacity(participants.len());
        let mut witnesses = Vec::with_capacity(participants.len());

        for (idx, pk) in participants.keys().iter().enumerate() {
            let i = (idx + 1) as u64;
            let s_i = self.polynomial.evaluate_at_index(i);
            let v_i = self.extra_gen * s_i;
            let e_i = *pk * s_i;
            let w = key_generate(rng);

            witnesses.push((w, s_i, dleq::Statement::new(self.extra_gen, v_i, *pk, e_i)));
            e.push(e_i);
        }

        let proof = dleq::prove_parallel(&witnesses, DST_SCRAPE_SHARES);
        (e, proof)
    }
}

/// Verifies a full SCRAPE dealing in `O(n)` group operations: the batched per-share DLEQ proof,
/// plus the dual-code ("perp") orthogonality check that catches commitment vectors which are not
/// evaluations of any degree-`< t` polynomial (soundness error `1/q` per invocation, per §4.5).
///
/// Requires fresh randomness to sample the dual-code polynomial `m(x)`; this is the verifier's own
/// randomness, independent of anything the dealer chose.
///
/// # Panics
///
/// Panics if `t == 0` or `t > participants.len()` (an invalid threshold configuration, not
/// something untrusted wire data can trigger on its own).
pub fn verify_encrypted_shares<R: RngCore + CryptoRng>(
    h: &Point,
    t: usize,
    commitments: &[Point],
    proof: &dleq::ParallelProofs,
    e: &[Point],
    participants: &Participants,
    rng: &mut R,
) -> bool {
    let n = participants.len();
    more_asserts::assert_ge!(t, 1, "invalid threshold");
    more_asserts::assert_le!(t, n, "invalid threshold");

    if commitments.len() != n || e.len() != n {
        return false;
    }

    let stmts: Vec<dleq::Statement> = (0..n)
        .map(|idx| {
            dleq::Statement::new(*h, commitments[idx], participants.keys()[idx], e[idx])
        })
        .collect();

    if !dleq::verify_parallel(&stmts, proof, DST_SCRAPE_SHARES) {
        return false;
    }

    if n == t {
        // Degenerate case (§9): the dual code has dimension n - t = 0, so no nonzero dual
        // codeword exists and the check is vacuously true.
        return true;
    }

    let dual_degree = n - t - 1;
    let m = Polynomial::generate(dual_degree, rng);
    let v = dual_code_denominators(n);

    let c_perp: Vec<Scalar> = (1..=n as u64)
        .zip(v.iter())
        .map(|(i, v_i)| *v_i * m.evaluate_at_index(i))
        .collect();

    let pairs: Vec<(Point, Scalar)> = commitments.iter().copied().zip(c_perp).collect();
    mul_and_sum(&pairs) == point_identity()
}

/// `v_i = prod_{j != i, j in 1..=n} (i - j)^{-1}`, the dual-code Lagrange-style denominators used
/// by the perp check, computed once for all `i`.
fn dual_code_denominators(n: usize) -> Vec<Scalar> {
    (1..=n as u64)
        .map(|i| {
            let xi = key_from_num(i);
            let mut acc = Scalar::one();
            for j in 1..=n as u64 {
                if j == i {
                    continue;
                }
                acc *= key_inverse(&(xi - key_from_num(j)));
            }
            acc
        })
        .collect()
}

/// A decrypted share: `(S_i, proof)`. Unlike [`crate::pvss::DecryptedShare`], there is no
/// `share_id` field — order is tracked by a separate participant list (§3), reconciled via
/// [`reorder_decrypt_shares`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecryptedShare {
    #[serde(serialize_with = "serialize_point", deserialize_with = "deserialize_s")]
    s: Point,
    proof: dleq::Proof,
}

impl DecryptedShare {
    pub fn s(&self) -> Point {
        self.s
    }

    pub fn proof(&self) -> dleq::Proof {
        self.proof
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bcs::to_bytes(self).expect("DecryptedShare serialization is infallible")
    }

    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, PvssError> {
        bcs::from_bytes(bytes).map_err(|e| PvssError::bcs("DecryptedShare", e))
    }
}

/// Decrypts `e` (this participant's `E_i`) with `kp`'s private key, proving
/// `log_G(PK_i) = log_{S_i}(E_i)`.
pub fn share_decrypt<R: RngCore + CryptoRng>(kp: &KeyPair, e: &Point, rng: &mut R) -> DecryptedShare {
    let x_i = kp.private_key();
    let s_i = *e * key_inverse(x_i);

    let stmt = dleq::Statement::new(curve_generator(), *kp.public_key(), s_i, *e);
    let proof = dleq::prove(&stmt, x_i, DST_DECRYPTION_PROOF, rng);

    DecryptedShare { s: s_i, proof }
}

/// Verifies a decrypted share's DLEQ proof against `(G, PK_i, S_i, E_i)`.
pub fn verify_decrypted_share(e: &Point, pk: &Point, dec: &DecryptedShare) -> bool {
    let stmt = dleq::Statement::new(curve_generator(), *pk, dec.s, *e);
    dleq::verify(&stmt, &dec.proof, DST_DECRYPTION_PROOF)
}

/// Reindexes `(public key, decrypted share)` pairs to `(share_id, decrypted share)` pairs by
/// looking each public key up in `participants`. Returns `None` if any key is not a member; the
/// output preserves the input order (not `participants`'s order, per §4.5).
pub fn reorder_decrypt_shares(
    participants: &Participants,
    items: &[(Point, DecryptedShare)],
) -> Option<Vec<(usize, DecryptedShare)>> {
    items
        .iter()
        .map(|(pk, dec)| participants.find(pk).map(|id| (id, *dec)))
        .collect()
}

/// Filters `(share_id, E_i, PK_i, decrypted share)` quadruples down to those whose decryption
/// proof verifies, and returns the first `t` as `(share_id, S_i)` pairs ready for [`recover`].
pub fn get_valid_recovery_shares(
    t: usize,
    quads: &[(usize, Point, Point, DecryptedShare)],
) -> Vec<(usize, Point)> {
    quads
        .iter()
        .filter(|(_, e, pk, dec)| verify_decrypted_share(e, pk, dec))
        .take(t)
        .map(|(id, _, _, dec)| (*id, dec.s))
        .collect()
}

/// Reconstructs the secret `G .* p(0)` from `t` (or more) `(share_id, S_i)` pairs, identically to
/// [`crate::pvss::recover`].
pub fn recover(shares: &[(usize, Point)]) -> Point {
    let points: Vec<(u64, Point)> = shares.iter().map(|(id, s)| (*id as u64, *s)).collect();
    recover_secret(&points)
}

/// Verifies that `secret` is the one originally escrowed, via the escrow's own DLEQ proof against
/// `(G, secret, h, commitment_zero)` — see [`Escrow::commitment_zero`].
pub fn verify_secret(h: &Point, commitment_zero: &Point, secret: &Point, proof: &dleq::Proof) -> bool {
    let stmt = dleq::Statement::new(curve_generator(), *secret, *h, *commitment_zero);
    dleq::verify(&stmt, proof, DST_ESCROW_PROOF)
}

fn serialize_point<S: serde::Serializer>(p: &Point, s: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&point_to_bytes(p), s)
}

fn deserialize_s<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
    let bytes: [u8; crate::constants::POINT_NUM_BYTES] = serde::Deserialize::deserialize(d)?;
    point_from_bytes("DecryptedShare::s", &bytes).map_err(serde::de::Error::custom)
}
