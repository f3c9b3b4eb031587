//! Schoenmakers Publicly Verifiable Secret Sharing (§4.3).
//!
//! A dealer runs [`escrow_new`] to pick a degree-`t - 1` polynomial `p` whose constant term is the
//! secret, then uses the resulting [`Escrow`] to produce `t` coefficient [commitments][Escrow::create_commitments]
//! and one [`EncryptedShare`] per participant. Every encrypted share carries a DLEQ proof that any
//! third party can check against the published commitments, without needing the dealer's
//! cooperation or seeing any private key. A participant decrypts their own share with
//! [`share_decrypt`], again producing a publicly verifiable proof; any `t` verified decrypted shares
//! [`recover`] the original secret, and [`verify_secret`] lets anyone confirm the recovered secret
//! matches the dealer's original escrow without learning the polynomial.

use crate::algebra::serialization::{point_from_bytes, point_to_bytes};
use crate::algebra::{
    curve_generator, key_from_num, key_generate, key_inverse, mul_power_and_sum, point_from_secret,
    Point,
};
use crate::constants::{DST_DECRYPTION_PROOF, DST_ESCROW_PROOF, DST_PVSS_SHARE};
use crate::dleq;
use crate::error::PvssError;
use crate::keypair::{KeyPair, Participants};
use crate::polynomial::{recover_secret, Polynomial};
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

/// A dealer-side escrow: the sharing polynomial, the dealer's choice of second generator `h`, the
/// committed secret, and a proof binding the two together.
///
/// Ephemeral by design (§3 "Lifecycles"): a dealer creates one `Escrow` per secret, uses it to emit
/// commitments and shares, and then drops it. The sharing polynomial is zeroized on drop (it is
/// transitively held via [`Polynomial`]'s own `ZeroizeOnDrop`), so there is nothing further to do
/// to discard the sensitive material once the caller is finished with it.
pub struct Escrow {
    t: usize,
    extra_gen: Point,
    polynomial: Polynomial,
    secret: Point,
    proof: dleq::Proof,
}

impl Escrow {
    /// Deals a fresh secret to a `t`-of-`n` sharing: samples a degree-`t - 1` polynomial `p` (its
    /// constant term `p(0)` *is* the secret), a fresh second generator `h = G .* r`, and proves
    /// `log_G(S) = log_h(h .* p(0))` for `S = G .* p(0)`.
    ///
    /// # Panics
    ///
    /// Panics if `t == 0` (a zero-of-`n` scheme is not meaningful: the polynomial would have no
    /// coefficients and no secret to recover).
    pub fn new<R: RngCore + CryptoRng>(t: usize, rng: &mut R) -> Escrow {
        more_asserts::assert_ge!(t, 1, "PVSS threshold must be at least 1");

        let polynomial = Polynomial::generate(t - 1, rng);
        let r = key_generate(rng);
        let extra_gen = point_from_secret(&r);

        let p0 = polynomial.at_zero();
        let secret = point_from_secret(&p0);
        let c0 = extra_gen * p0;

        let stmt = dleq::Statement::new(curve_generator(), secret, extra_gen, c0);
        let proof = dleq::prove(&stmt, &p0, DST_ESCROW_PROOF, rng);

        tracing::debug!(t, "dealt a new PVSS escrow");
        Escrow {
            t,
            extra_gen,
            polynomial,
            secret,
            proof,
        }
    }

    pub fn threshold(&self) -> usize {
        self.t
    }

    pub fn extra_gen(&self) -> Point {
        self.extra_gen
    }

    /// The committed secret `S = G .* p(0)`.
    pub fn secret(&self) -> Point {
        self.secret
    }

    /// The escrow's own DLEQ proof, to be published alongside the commitments for [`verify_secret`].
    pub fn proof(&self) -> dleq::Proof {
        self.proof
    }

    /// Emits the `t` coefficient commitments `[h .* a_0, ..., h .* a_{t-1}]`.
    pub fn create_commitments(&self) -> Vec<Point> {
        self.polynomial
            .coefficients()
            .iter()
            .map(|a| self.extra_gen * a)
            .collect()
    }

    /// Creates the encrypted share for participant `share_id` (1-based) under their public key.
    ///
    /// # Panics
    ///
    /// Panics if `share_id == 0`.
    pub fn share_create<R: RngCore + CryptoRng>(
        &self,
        share_id: u32,
        pk: &Point,
        rng: &mut R,
    ) -> EncryptedShare {
        assert_ne!(share_id, 0, "share_id is 1-based; 0 is forbidden");

        let s_i = self.polynomial.evaluate_at_index(share_id as u64);
        let y = *pk * s_i;
        let x = self.extra_gen * s_i;

        let stmt = dleq::Statement::new(self.extra_gen, x, *pk, y);
        let proof = dleq::prove(&stmt, &s_i, DST_PVSS_SHARE, rng);

        EncryptedShare { share_id, y, proof }
    }

    /// Creates one encrypted share per participant in `participants`, in order, with `share_id`
    /// `1..=participants.len()`.
    pub fn shares_create<R: RngCore + CryptoRng>(
        &self,
        participants: &Participants,
        rng: &mut R,
    ) -> Vec<EncryptedShare> {
        participants
            .keys()
            .iter()
            .enumerate()
            .map(|(idx, pk)| self.share_create((idx + 1) as u32, pk, rng))
            .collect()
    }
}

/// Evaluates the committed polynomial in the exponent at participant index `i`: `createXi`
/// (§4.4). Since `commitments[j] = h .* a_j`, the result is `h .* p(i)`.
pub fn create_xi(share_id: u32, commitments: &[Point]) -> Point {
    mul_power_and_sum(commitments, &key_from_num(share_id as u64))
}

/// An encrypted share, as distributed by the dealer: `(share_id, Y_i, proof)` with `Y_i = PK_i .*
/// p(share_id)`, and `proof` attesting `log_h(X_i) = log_{PK_i}(Y_i)` for `X_i = h .* p(share_id)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncryptedShare {
    share_id: u32,
    #[serde(serialize_with = "serialize_point", deserialize_with = "deserialize_y")]
    y: Point,
    proof: dleq::Proof,
}

impl EncryptedShare {
    pub fn share_id(&self) -> u32 {
        self.share_id
    }

    pub fn y(&self) -> Point {
        self.y
    }

    pub fn proof(&self) -> dleq::Proof {
        self.proof
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bcs::to_bytes(self).expect("EncryptedShare serialization is infallible")
    }

    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, PvssError> {
        bcs::from_bytes(bytes).map_err(|e| PvssError::bcs("EncryptedShare", e))
    }
}

/// Recomputes `X_i` from the published commitments and checks the share's DLEQ proof against
/// `(h, X_i, PK_i, Y_i)`. Never panics: a malformed or forged share simply fails to verify.
pub fn verify_encrypted_share(
    h: &Point,
    commitments: &[Point],
    pk: &Point,
    share: &EncryptedShare,
) -> bool {
    let x_i = create_xi(share.share_id, commitments);
    let stmt = dleq::Statement::new(*h, x_i, *pk, share.y);
    dleq::verify(&stmt, &share.proof, DST_PVSS_SHARE)
}

/// A decrypted share: `(share_id, S_i, proof)` with `S_i = Y_i .* x_i^{-1}` and `proof` attesting
/// `log_G(PK_i) = log_{S_i}(Y_i) = x_i`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecryptedShare {
    share_id: u32,
    #[serde(serialize_with = "serialize_point", deserialize_with = "deserialize_s")]
    s: Point,
    proof: dleq::Proof,
}

impl DecryptedShare {
    pub fn share_id(&self) -> u32 {
        self.share_id
    }

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

/// Decrypts `share` with `kp`'s private key, proving the decryption was done correctly.
pub fn share_decrypt<R: RngCore + CryptoRng>(
    kp: &KeyPair,
    share: &EncryptedShare,
    rng: &mut R,
) -> DecryptedShare {
    let x_i = kp.private_key();
    let s_i = share.y * key_inverse(x_i);

    let stmt = dleq::Statement::new(curve_generator(), *kp.public_key(), s_i, share.y);
    let proof = dleq::prove(&stmt, x_i, DST_DECRYPTION_PROOF, rng);

    DecryptedShare {
        share_id: share.share_id,
        s: s_i,
        proof,
    }
}

/// Verifies a decrypted share's DLEQ proof against `(G, PK_i, S_i, Y_i)`.
pub fn verify_decrypted_share(enc: &EncryptedShare, pk: &Point, dec: &DecryptedShare) -> bool {
    let stmt = dleq::Statement::new(curve_generator(), *pk, dec.s, enc.y);
    dleq::verify(&stmt, &dec.proof, DST_DECRYPTION_PROOF)
}

/// Filters `triples` (encrypted share, participant public key, decrypted share) down to those
/// whose decryption proof verifies, and returns the first `t` as `(share_id, S_i)` pairs ready for
/// [`recover`].
///
/// Returns fewer than `t` pairs if insufficient valid shares exist; callers must check the length
/// before calling [`recover`] (see `SPEC_FULL.md` §7).
pub fn get_valid_recovery_shares(
    t: usize,
    triples: &[(EncryptedShare, Point, DecryptedShare)],
) -> Vec<(u32, Point)> {
    triples
        .iter()
        .filter(|(enc, pk, dec)| verify_decrypted_share(enc, pk, dec))
        .take(t)
        .map(|(_, _, dec)| (dec.share_id, dec.s))
        .collect()
}

/// Reconstructs the secret `G .* p(0)` from `t` (or more) decrypted shares via Lagrange
/// interpolation in the exponent.
///
/// `shares` must have distinct, nonzero `share_id`s and should already be verified (e.g. via
/// [`get_valid_recovery_shares`]); this function performs no such checks itself (§9).
pub fn recover(shares: &[(u32, Point)]) -> Point {
    let points: Vec<(u64, Point)> = shares.iter().map(|(id, s)| (*id as u64, *s)).collect();
    recover_secret(&points)
}

/// Verifies that `secret` is the one originally escrowed: checks the escrow's own DLEQ proof
/// against `(G, secret, h, commitments[0])`.
///
/// # Panics
///
/// Panics if `commitments` is empty (a precondition violation: every legitimate escrow publishes
/// at least one commitment — see §9).
pub fn verify_secret(h: &Point, commitments: &[Point], secret: &Point, proof: &dleq::Proof) -> bool {
    assert!(!commitments.is_empty(), "commitments must be non-empty");
    let stmt = dleq::Statement::new(curve_generator(), *secret, *h, commitments[0]);
    dleq::verify(&stmt, proof, DST_ESCROW_PROOF)
}

fn serialize_point<S: serde::Serializer>(p: &Point, s: S) -> Result<S::Ok, S::Error> {
    serde::Serialize::serialize(&point_to_bytes(p), s)
}

fn deserialize_y<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
    let bytes: [u8; crate::constants::POINT_NUM_BYTES] = serde::Deserialize::deserialize(d)?;
    point_from_bytes("EncryptedShare::y", &bytes).map_err(serde::de::Error::custom)
}

fn deserialize_s<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Point, D::Error> {
    let bytes: [u8; crate::constants::POINT_NUM_BYTES] = serde::Deserialize::deserialize(d)?;
    point_from_bytes("DecryptedShare::s", &bytes).map_err(serde::de::Error::custom)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use super::*;

    /// Deals a `t`-of-`n` secret to `n` fresh key pairs and returns everything a test needs:
    /// the key pairs, the participant list, the escrow, its commitments, and the encrypted shares.
    pub fn setup_dealing<R: RngCore + CryptoRng>(
        t: usize,
        n: usize,
        rng: &mut R,
    ) -> (Vec<KeyPair>, Participants, Escrow, Vec<Point>, Vec<EncryptedShare>) {
        let kps: Vec<KeyPair> = (0..n).map(|_| KeyPair::generate(rng)).collect();
        let participants = Participants::new(kps.iter().map(|kp| *kp.public_key()).collect());

        let escrow = Escrow::new(t, rng);
        let commitments = escrow.create_commitments();
        let shares = escrow.shares_create(&participants, rng);

        (kps, participants, escrow, commitments, shares)
    }
}

#[cfg(test)]
mod test {
    use super::test_utils::setup_dealing;
    use super::*;
    use rand::thread_rng;

    #[test]
    fn happy_path_recovers_secret_and_verifies() {
        // S1: t = 2, n = 3.
        let mut rng = thread_rng();
        let (kps, participants, escrow, commitments, shares) = setup_dealing(2, 3, &mut rng);
        let h = escrow.extra_gen();
        let secret = escrow.secret();

        for (idx, share) in shares.iter().enumerate() {
            assert!(verify_encrypted_share(
                &h,
                &commitments,
                participants.get(idx + 1).unwrap(),
                share
            ));
        }

        let dec1 = share_decrypt(&kps[0], &shares[0], &mut rng);
        let dec2 = share_decrypt(&kps[1], &shares[1], &mut rng);
        assert!(verify_decrypted_share(&shares[0], kps[0].public_key(), &dec1));
        assert!(verify_decrypted_share(&shares[1], kps[1].public_key(), &dec2));

        let recovered = recover(&[(1, dec1.s), (2, dec2.s)]);
        assert_eq!(recovered, secret);
        assert!(verify_secret(&h, &commitments, &recovered, &escrow.proof()));
    }

    #[test]
    fn insufficient_shares_fail_verify_secret() {
        // S2: recovering from a single share out of a t=2 scheme yields garbage.
        let mut rng = thread_rng();
        let (kps, _participants, escrow, commitments, shares) = setup_dealing(2, 3, &mut rng);
        let h = escrow.extra_gen();

        let dec1 = share_decrypt(&kps[0], &shares[0], &mut rng);
        // `recover` happily "reconstructs" from a single share; it's just the wrong point.
        let bogus = recover(&[(1, dec1.s)]);

        assert!(!verify_secret(&h, &commitments, &bogus, &escrow.proof()));
    }

    #[test]
    fn tampered_share_fails_verification_others_unaffected() {
        // S3: flip a bit of Y_2; share 2 fails, shares 1 and 3 still verify.
        let mut rng = thread_rng();
        let (_kps, participants, escrow, commitments, mut shares) = setup_dealing(2, 3, &mut rng);
        let h = escrow.extra_gen();

        shares[1].y += curve_generator();

        assert!(verify_encrypted_share(&h, &commitments, participants.get(1).unwrap(), &shares[0]));
        assert!(!verify_encrypted_share(&h, &commitments, participants.get(2).unwrap(), &shares[1]));
        assert!(verify_encrypted_share(&h, &commitments, participants.get(3).unwrap(), &shares[2]));
    }

    #[test]
    fn recover_is_independent_of_which_t_shares_are_used() {
        let mut rng = thread_rng();
        let (kps, _participants, escrow, _commitments, shares) = setup_dealing(3, 5, &mut rng);

        let decs: Vec<DecryptedShare> = kps
            .iter()
            .zip(shares.iter())
            .map(|(kp, s)| share_decrypt(kp, s, &mut rng))
            .collect();

        let subset_a = [(1u32, decs[0].s), (2, decs[1].s), (3, decs[2].s)];
        let subset_b = [(3u32, decs[2].s), (4, decs[3].s), (5, decs[4].s)];

        assert_eq!(recover(&subset_a), recover(&subset_b));
        assert_eq!(recover(&subset_a), escrow.secret());
    }

    #[test]
    fn encrypted_share_round_trips_through_bytes() {
        let mut rng = thread_rng();
        let (_kps, _participants, _escrow, _commitments, shares) = setup_dealing(2, 4, &mut rng);

        let bytes = shares[0].to_bytes();
        let decoded = EncryptedShare::try_from_bytes(&bytes).unwrap();
        assert_eq!(decoded, shares[0]);
    }

    #[test]
    fn decrypted_share_round_trips_through_bytes() {
        let mut rng = thread_rng();
        let (kps, _participants, _escrow, _commitments, shares) = setup_dealing(2, 4, &mut rng);

        let dec = share_decrypt(&kps[0], &shares[0], &mut rng);
        let bytes = dec.to_bytes();
        let decoded = DecryptedShare::try_from_bytes(&bytes).unwrap();
        assert_eq!(decoded, dec);
    }

    #[test]
    fn malformed_encrypted_share_bytes_error_instead_of_panicking() {
        let err = EncryptedShare::try_from_bytes(&[0u8; 3]).unwrap_err();
        assert!(matches!(err, PvssError::Bcs { .. }));
    }
}
