//! Participant key pairs and the ordered participant list shared by both schemes (§3).

use crate::algebra::serialization::{point_from_bytes, point_to_bytes};
use crate::algebra::{key_generate, point_from_secret, Point, Scalar};
use crate::error::PvssError;
use rand_core::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::ZeroizeOnDrop;

/// A participant's decryption key pair, with the invariant `public_key = G .* private_key`.
///
/// The private scalar is zeroized on drop; the public key is not secret and is cloned freely
/// wherever a `Participants` list is built.
#[derive(Clone, ZeroizeOnDrop)]
pub struct KeyPair {
    private_key: Scalar,
    #[zeroize(skip)]
    public_key: Point,
}

impl KeyPair {
    /// Samples a fresh key pair.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let private_key = key_generate(rng);
        let public_key = point_from_secret(&private_key);
        KeyPair { private_key, public_key }
    }

    pub fn private_key(&self) -> &Scalar {
        &self.private_key
    }

    pub fn public_key(&self) -> &Point {
        &self.public_key
    }
}

/// An ordered list of participant public keys. Index `i` (1-based) is that participant's
/// `share_id` throughout both schemes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Participants {
    #[serde(serialize_with = "serialize_points", deserialize_with = "deserialize_points")]
    keys: Vec<Point>,
}

impl Participants {
    pub fn new(keys: Vec<Point>) -> Self {
        Participants { keys }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Point] {
        &self.keys
    }

    /// The public key at 1-based `share_id`, or `None` if out of range.
    pub fn get(&self, share_id: usize) -> Option<&Point> {
        if share_id == 0 {
            return None;
        }
        self.keys.get(share_id - 1)
    }

    /// Looks up the 1-based `share_id` of `pk` in this list, by equality of the encoded point.
    /// Returns `None` if `pk` is not a member.
    pub fn find(&self, pk: &Point) -> Option<usize> {
        self.keys.iter().position(|k| k == pk).map(|idx| idx + 1)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        bcs::to_bytes(&Participants {
            keys: self.keys.clone(),
        })
        .expect("Participants serialization is infallible")
    }

    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self, PvssError> {
        bcs::from_bytes(bytes).map_err(|e| PvssError::bcs("Participants", e))
    }
}

/// Serde wire helpers: points are encoded via their canonical compressed bytes rather than
/// `blstrs`'s own `Serialize` impl, so that decode failures surface as [`PvssError`] instead of an
/// opaque `bcs` error pointing at a foreign type.
fn serialize_points<S: serde::Serializer>(points: &[Point], s: S) -> Result<S::Ok, S::Error> {
    let bytes: Vec<_> = points.iter().map(point_to_bytes).collect();
    serde::Serialize::serialize(&bytes, s)
}

fn deserialize_points<'de, D: serde::Deserializer<'de>>(d: D) -> Result<Vec<Point>, D::Error> {
    let bytes: Vec<[u8; crate::constants::POINT_NUM_BYTES]> = serde::Deserialize::deserialize(d)?;
    bytes
        .iter()
        .map(|b| point_from_bytes("Participants::keys", b))
        .collect::<Result<Vec<_>, _>>()
        .map_err(serde::de::Error::custom)
}
