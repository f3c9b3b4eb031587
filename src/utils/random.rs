//! Batch random-sampling helpers used by polynomial generation and the SCRAPE dual-code check.

use crate::algebra::{key_generate, Scalar};
use rand_core::{CryptoRng, RngCore};

/// Returns `n` freshly sampled scalars.
pub fn random_scalars<R: RngCore + CryptoRng>(n: usize, rng: &mut R) -> Vec<Scalar> {
    (0..n).map(|_| key_generate(rng)).collect()
}
