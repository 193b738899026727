//! Uniform sampling of keys, matrices and noise
//!
//! Every sampler takes the randomness source explicitly so callers can
//! inject a seeded generator.

use rand::Rng;

/// Vector of `size` independent uniform bits
pub fn random_binary_vector<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<u64> {
    (0..size).map(|_| rng.gen_range(0..=1u64)).collect()
}

/// `rows` x `cols` matrix with entries uniform in [0, q)
pub fn random_matrix<R: Rng + ?Sized>(rows: usize, cols: usize, q: u64, rng: &mut R) -> Vec<Vec<u64>> {
    (0..rows)
        .map(|_| (0..cols).map(|_| rng.gen_range(0..q)).collect())
        .collect()
}

/// Error term uniform in {-1, 0, 1}
pub fn small_error<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(-1..=1i64)
}
