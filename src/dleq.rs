//! Chaum-Pedersen discrete-log-equality (DLEQ) proofs, sequential and parallel/batched (§4.2).
//!
//! A DLEQ proof attests, for public `(g1, h1, g2, h2)`, knowledge of a scalar `alpha` such that
//! `h1 = g1 .* alpha` and `h2 = g2 .* alpha` — without revealing `alpha`. Both Schoenmakers PVSS
//! (sequential proofs, one per share) and SCRAPE (one parallel proof over all `n` shares) are built
//! on this primitive.

use crate::algebra::{mul_and_sum, point_identity, Point, Scalar};
use crate::utils::fiat_shamir::FiatShamirTranscript;
use ff::Field;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// The four public group elements of a DLEQ statement: prove `log_g1(h1) == log_g2(h2)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct Statement {
    pub g1: Point,
    pub h1: Point,
    pub g2: Point,
    pub h2: Point,
}

impl Statement {
    pub fn new(g1: Point, h1: Point, g2: Point, h2: Point) -> Self {
        Statement { g1, h1, g2, h2 }
    }

    fn absorb(&self, t: &mut merlin::Transcript) {
        t.append_point(b"g1", &self.g1);
        t.append_point(b"h1", &self.h1);
        t.append_point(b"g2", &self.g2);
        t.append_point(b"h2", &self.h2);
    }
}

/// A non-interactive Chaum-Pedersen proof: `(c, z)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Proof {
    c: Scalar,
    z: Scalar,
}

/// Starts a fresh, domain-separated transcript shared by the sequential and parallel provers and
/// verifiers, so that a proof generated under one `dst` can never verify under another.
fn new_transcript(dst: &'static [u8]) -> merlin::Transcript {
    merlin::Transcript::new(dst)
}

/// Proves the statement `stmt` using witness `alpha` (with `h1 = g1 .* alpha`, `h2 = g2 .* alpha`)
/// and fresh randomness `w`, sampled by the caller via dependency injection.
pub fn prove<R: RngCore + CryptoRng>(stmt: &Statement, alpha: &Scalar, dst: &'static [u8], rng: &mut R) -> Proof {
    let w = Scalar::random(rng);
    prove_with_witness(stmt, alpha, w, dst)
}

/// Like [`prove`], but takes the prover's nonce `w` explicitly instead of sampling it — used when
/// the caller wants to pin `w` down (e.g. in tests), and as the shared implementation behind
/// [`prove`].
pub fn prove_with_witness(stmt: &Statement, alpha: &Scalar, w: Scalar, dst: &'static [u8]) -> Proof {
    let a1 = stmt.g1 * w;
    let a2 = stmt.g2 * w;

    let mut t = new_transcript(dst);
    stmt.absorb(&mut t);
    t.append_point(b"a1", &a1);
    t.append_point(b"a2", &a2);
    let c = t.challenge_scalar(b"challenge");

    let z = w + c * alpha;

    Proof { c, z }
}

/// Verifies a DLEQ proof against `stmt`. Never panics; a malformed or forged proof simply fails to
/// verify.
pub fn verify(stmt: &Statement, proof: &Proof, dst: &'static [u8]) -> bool {
    let a1_prime = stmt.g1 * proof.z - stmt.h1 * proof.c;
    let a2_prime = stmt.g2 * proof.z - stmt.h2 * proof.c;

    let mut t = new_transcript(dst);
    stmt.absorb(&mut t);
    t.append_point(b"a1", &a1_prime);
    t.append_point(b"a2", &a2_prime);
    let c_prime = t.challenge_scalar(b"challenge");

    c_prime == proof.c
}

/// A single Chaum-Pedersen proof batched over `m` statements that share one challenge. Verifying
/// this costs one hash plus `O(m)` group operations, instead of `O(m)` independent proofs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParallelProofs {
    c: Scalar,
    z: Vec<Scalar>,
}

impl ParallelProofs {
    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn responses(&self) -> &[Scalar] {
        &self.z
    }

    pub fn challenge(&self) -> &Scalar {
        &self.c
    }
}

/// Generates a batched proof over `witnesses`, each `(w_i, alpha_i, statement_i)`.
///
/// All `m` statements are bound into a single Fiat-Shamir challenge, so a single response scalar
/// `z_i = w_i + c * alpha_i` suffices per statement.
pub fn prove_parallel(witnesses: &[(Scalar, Scalar, Statement)], dst: &'static [u8]) -> ParallelProofs {
    let commitments: Vec<(Point, Point)> = witnesses
        .iter()
        .map(|(w, _, stmt)| (stmt.g1 * w, stmt.g2 * w))
        .collect();

    let mut t = new_transcript(dst);
    for ((_, _, stmt), (a1, a2)) in witnesses.iter().zip(commitments.iter()) {
        stmt.absorb(&mut t);
        t.append_point(b"a1", a1);
        t.append_point(b"a2", a2);
    }
    let c = t.challenge_scalar(b"challenge");

    let z = witnesses
        .iter()
        .map(|(w, alpha, _)| *w + c * alpha)
        .collect();

    ParallelProofs { c, z }
}

/// Verifies a batched proof over `stmts` (in the same order used to produce it).
///
/// Returns `false` (never panics) if `stmts.len() != proof.len()`.
pub fn verify_parallel(stmts: &[Statement], proof: &ParallelProofs, dst: &'static [u8]) -> bool {
    if stmts.len() != proof.z.len() {
        return false;
    }

    let reconstructed: Vec<(Point, Point)> = stmts
        .iter()
        .zip(proof.z.iter())
        .map(|(stmt, z)| {
            let a1 = stmt.g1 * z - stmt.h1 * proof.c;
            let a2 = stmt.g2 * z - stmt.h2 * proof.c;
            (a1, a2)
        })
        .collect();

    let mut t = new_transcript(dst);
    for (stmt, (a1, a2)) in stmts.iter().zip(reconstructed.iter()) {
        stmt.absorb(&mut t);
        t.append_point(b"a1", a1);
        t.append_point(b"a2", a2);
    }
    let c_prime = t.challenge_scalar(b"challenge");

    c_prime == proof.c
}

/// Summed form of the verification equation, useful when the caller already has `Σ a1_i .* r_i`
/// style linear combinations lying around (not used internally, but exposed since `mul_and_sum`
/// is part of the ECC contract and callers batching their own statements may want it).
#[allow(dead_code)]
fn combined_commitment(pairs: &[(Point, Scalar)]) -> Point {
    mul_and_sum(pairs)
}

#[allow(dead_code)]
fn zero() -> Point {
    point_identity()
}
