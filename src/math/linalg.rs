//! Modular inner products and matrix-vector products
//!
//! Sums are accumulated in `i64` and reduced once at the end, so callers
//! may fold in signed terms (the key-generation error) before reducing.
//! `LweParams::validate` bounds `dim * (q - 1)^2` to keep the accumulator
//! from overflowing.

use super::modular::ModQ;

/// Unreduced inner product <a, b>
pub fn inner_product(a: &[u64], b: &[u64]) -> i64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .fold(0i64, |acc, (&x, &y)| acc + (x as i64) * (y as i64))
}

/// <a, b> mod q
pub fn dot_mod(a: &[u64], b: &[u64], q: u64) -> u64 {
    ModQ::from_signed(inner_product(a, b), q)
}

/// M·v mod q, one entry per row of M
pub fn mat_vec_mod(matrix: &[Vec<u64>], v: &[u64], q: u64) -> Vec<u64> {
    matrix.iter().map(|row| dot_mod(row, v, q)).collect()
}

/// Mᵗ·v mod q: entry j is Σ_i M[i][j]·v[i]
pub fn transpose_mat_vec_mod(matrix: &[Vec<u64>], v: &[u64], q: u64) -> Vec<u64> {
    debug_assert_eq!(matrix.len(), v.len());
    let cols = matrix.first().map_or(0, |row| row.len());

    let mut acc = vec![0i64; cols];
    for (row, &vi) in matrix.iter().zip(v.iter()) {
        if vi == 0 {
            continue;
        }
        for (a, &m) in acc.iter_mut().zip(row.iter()) {
            *a += (m as i64) * (vi as i64);
        }
    }

    acc.into_iter().map(|s| ModQ::from_signed(s, q)).collect()
}
