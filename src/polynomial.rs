//! Random polynomial generation and evaluation over the scalar field (§4.1), plus the Lagrange
//! interpolation shared by both schemes' `recover` (§4.3, §4.5): reconstructing `G .* p(0)` in the
//! exponent from `t` points `{(id_i, G .* p(id_i))}`.

use crate::algebra::{key_from_num, key_inverse, mul_and_sum, Point, Scalar};
use crate::utils::random::random_scalars;
use ff::Field;
use rand_core::{CryptoRng, RngCore};
use zeroize::ZeroizeOnDrop;

/// A polynomial `p(X) = a_0 + a_1 X + ... + a_k X^k` over the scalar field, represented by its
/// coefficients in ascending order of degree.
///
/// The coefficient buffer is zeroized when the polynomial is dropped: `a_0` is the dealer's secret
/// and every other coefficient is equally sensitive (knowing `t` of them lets you interpolate the
/// rest).
#[derive(ZeroizeOnDrop)]
pub struct Polynomial {
    coeffs: Vec<Scalar>,
}

impl Polynomial {
    /// Generates a random polynomial of the given `degree`, i.e. `degree + 1` uniformly random
    /// coefficients. The constant term `a_0` is itself uniform — this is what makes it usable as a
    /// freshly generated secret.
    pub fn generate<R: RngCore + CryptoRng>(degree: usize, rng: &mut R) -> Self {
        Polynomial {
            coeffs: random_scalars(degree + 1, rng),
        }
    }

    /// Wraps an explicit coefficient vector. Mainly useful for tests that need to pin down `a_0`.
    pub fn from_coefficients(coeffs: Vec<Scalar>) -> Self {
        Polynomial { coeffs }
    }

    /// The polynomial's degree (`coefficients.len() - 1`).
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    /// The coefficients, in ascending order of degree.
    pub fn coefficients(&self) -> &[Scalar] {
        &self.coeffs
    }

    /// `a_0`, the constant term.
    pub fn at_zero(&self) -> Scalar {
        self.coeffs[0]
    }

    /// Evaluates the polynomial at `x` using Horner's rule.
    pub fn evaluate(&self, x: &Scalar) -> Scalar {
        let mut acc = Scalar::zero();
        for a in self.coeffs.iter().rev() {
            acc = acc * x + a;
        }
        acc
    }

    /// Evaluates the polynomial at the small integer participant index `i` (`keyFromNum(i)`).
    pub fn evaluate_at_index(&self, i: u64) -> Scalar {
        self.evaluate(&key_from_num(i))
    }
}

/// The Lagrange coefficients `lambda_i = prod_{j != i} id_j / (id_j - id_i)` for interpolating a
/// degree-`< t` polynomial at `x = 0`, given the (distinct) evaluation points `ids`.
///
/// Shared by `pvss::recover` and `scrape::recover` (§4.3, §4.5): both reconstruct `G .* p(0)` as
/// `Σ S_i .* lambda_i` for exactly this reason — the sharing polynomial, not the group, is what
/// makes the two schemes' recovery step identical.
///
/// # Panics
///
/// Panics if `ids` contains a zero id or a duplicate id (both are caller preconditions: `id == 0`
/// is forbidden for a 1-based `share_id`, and a duplicate would divide by zero — see `SPEC_FULL.md`
/// §9).
pub fn lagrange_coefficients_at_zero(ids: &[u64]) -> Vec<Scalar> {
    ids.iter()
        .map(|&id_i| {
            assert_ne!(id_i, 0, "share_id 0 is forbidden");
            let xi = key_from_num(id_i);
            let mut lambda = Scalar::one();
            for &id_j in ids {
                if id_j == id_i {
                    continue;
                }
                let xj = key_from_num(id_j);
                lambda *= xj * key_inverse(&(xj - xi));
            }
            lambda
        })
        .collect()
}

/// Reconstructs `G .* p(0)` (or `h .* p(0)`, or any other "commitment-shaped" secret) from `t`
/// points `(id_i, G .* p(id_i))` via Lagrange interpolation in the exponent.
///
/// The caller is responsible for having selected exactly (or at least) `t` *verified* shares with
/// distinct `id`s; this function has no way to tell an insufficient or forged set of shares from a
/// legitimate one (see `verifySecret`, §4.3/§4.5, for the canonical correctness check).
pub fn recover_secret(shares: &[(u64, Point)]) -> Point {
    let ids: Vec<u64> = shares.iter().map(|(id, _)| *id).collect();
    let lambdas = lagrange_coefficients_at_zero(&ids);

    let pairs: Vec<(Point, Scalar)> = shares
        .iter()
        .zip(lambdas)
        .map(|((_, s), lambda)| (*s, lambda))
        .collect();

    mul_and_sum(&pairs)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn generate_has_expected_degree_and_length() {
        let mut rng = thread_rng();
        for degree in [0usize, 1, 2, 7, 50] {
            let p = Polynomial::generate(degree, &mut rng);
            assert_eq!(p.degree(), degree);
            assert_eq!(p.coefficients().len(), degree + 1);
        }
    }

    #[test]
    fn at_zero_matches_first_coefficient() {
        let mut rng = thread_rng();
        let p = Polynomial::generate(5, &mut rng);
        assert_eq!(p.at_zero(), p.coefficients()[0]);
        assert_eq!(p.at_zero(), p.evaluate(&Scalar::from(0u64)));
    }

    #[test]
    fn evaluate_matches_naive_sum() {
        let mut rng = thread_rng();
        let p = Polynomial::generate(4, &mut rng);
        let x = Scalar::from(7u64);

        let mut naive = Scalar::from(0u64);
        let mut x_pow = Scalar::from(1u64);
        for a in p.coefficients() {
            naive += *a * x_pow;
            x_pow *= x;
        }

        assert_eq!(p.evaluate(&x), naive);
    }

    #[test]
    fn degree_zero_is_a_constant() {
        let mut rng = thread_rng();
        let p = Polynomial::generate(0, &mut rng);
        assert_eq!(p.coefficients().len(), 1);
        for x in [0u64, 1, 2, 1000] {
            assert_eq!(p.evaluate(&Scalar::from(x)), p.at_zero());
        }
    }

    #[test]
    fn recover_secret_reconstructs_p_of_zero() {
        use crate::algebra::curve_generator;

        let mut rng = thread_rng();
        for (t, n) in [(1usize, 1usize), (2, 3), (3, 5), (5, 9)] {
            let p = Polynomial::generate(t - 1, &mut rng);
            let g = curve_generator();
            let secret = g * p.at_zero();

            let shares: Vec<(u64, crate::algebra::Point)> = (1..=n as u64)
                .map(|i| (i, g * p.evaluate_at_index(i)))
                .take(t)
                .collect();

            assert_eq!(recover_secret(&shares), secret);
        }
    }

    #[test]
    fn recover_secret_is_independent_of_subset_chosen() {
        use crate::algebra::curve_generator;

        let mut rng = thread_rng();
        let (t, n) = (3usize, 7usize);
        let p = Polynomial::generate(t - 1, &mut rng);
        let g = curve_generator();

        let all_shares: Vec<(u64, crate::algebra::Point)> =
            (1..=n as u64).map(|i| (i, g * p.evaluate_at_index(i))).collect();

        let subset_a: Vec<_> = all_shares[0..t].to_vec();
        let subset_b: Vec<_> = all_shares[n - t..n].to_vec();

        assert_eq!(recover_secret(&subset_a), recover_secret(&subset_b));
    }
}
