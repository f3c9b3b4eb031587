//! Merlin-transcript helpers for deriving Fiat-Shamir challenges.
//!
//! Every challenge in this crate is derived by absorbing the canonical encodings of a fixed,
//! documented sequence of points into a domain-separated `merlin::Transcript` and then squeezing
//! challenge bytes, which are reduced into a `Scalar` via [`crate::algebra::hash_points_to_scalar`]'s
//! sibling reduction routine. Binding the *entire* statement (not just the prover's commitments)
//! into the transcript is what makes the proof a proof of knowledge for that specific statement,
//! rather than something forgeable by replaying commitments across different `(g, h)` pairs.

use crate::algebra::{serialization, Point, Scalar};

/// A thin extension trait adding point-appending and scalar-challenge methods to
/// `merlin::Transcript`, mirroring the pattern used for the PVSS transcript's own Fiat-Shamir
/// derivation.
pub trait FiatShamirTranscript {
    fn append_point(&mut self, label: &'static [u8], p: &Point);
    fn append_points(&mut self, label: &'static [u8], ps: &[Point]);
    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar;
}

impl FiatShamirTranscript for merlin::Transcript {
    fn append_point(&mut self, label: &'static [u8], p: &Point) {
        self.append_message(label, &serialization::point_to_bytes(p));
    }

    fn append_points(&mut self, label: &'static [u8], ps: &[Point]) {
        self.append_u64(label, ps.len() as u64);
        for p in ps {
            self.append_message(b"point", &serialization::point_to_bytes(p));
        }
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> Scalar {
        let mut buf = [0u8; 64];
        self.challenge_bytes(label, &mut buf);
        crate::utils::biguint::wide_bytes_to_scalar(&buf)
    }
}
