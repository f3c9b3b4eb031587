//! Publicly Verifiable Secret Sharing (PVSS).
//!
//! This crate implements two related threshold secret-sharing schemes over the same elliptic-curve
//! substrate:
//!
//! - [`pvss`]: the Schoenmakers PVSS scheme, where every dealing, decryption, and reconstruction
//!   step is accompanied by a Chaum-Pedersen discrete-log-equality proof that any third party can
//!   verify.
//! - [`scrape`]: the SCRAPE-over-DDH variant, which batches all `n` per-share DLEQ proofs into a
//!   single [`dleq::ParallelProofs`] and adds a dual-code ("perp") check so that verifying a
//!   transcript costs O(n) group operations instead of O(nt).
//!
//! Both schemes are built on [`algebra`] (elliptic-curve group and scalar field arithmetic),
//! [`polynomial`] (random polynomial generation/evaluation over the scalar field), and [`dleq`]
//! (the Chaum-Pedersen proof system, in sequential and batched forms).
//!
//! The core is purely computational: no I/O, no shared mutable state, no implicit randomness.
//! Every operation that needs fresh randomness takes a `rand_core::{RngCore, CryptoRng}` by
//! dependency injection.

pub mod algebra;
pub mod constants;
pub mod dleq;
pub mod error;
pub mod keypair;
pub mod polynomial;
pub mod pvss;
pub mod scrape;
pub mod utils;

pub use algebra::{DhSecret, Point, Scalar};
pub use error::PvssError;
pub use keypair::KeyPair;
