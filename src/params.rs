//! Parameter sets for the LWE bit cryptosystem
//!
//! Parameters are captured once when an [`crate::lwe::Lwe`] instance is
//! built and never change afterwards.

use serde::{Deserialize, Serialize};

/// Reference modulus q (prime)
pub const DEFAULT_Q: u64 = 2053;

/// Reference lattice dimension n
pub const DEFAULT_DIM: usize = 64;

/// Core parameters: lattice dimension and modulus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweParams {
    /// Lattice dimension n: secret length and side of the public matrix
    pub dim: usize,

    /// Modulus q; every stored entry lies in [0, q)
    pub q: u64,
}

impl LweParams {
    /// n = 64, q = 2053
    pub fn reference() -> Self {
        Self {
            dim: DEFAULT_DIM,
            q: DEFAULT_Q,
        }
    }

    /// n = 128, q = 2053
    ///
    /// More decryption noise than the reference set: the ephemeral vector
    /// sums twice as many rows, so bit-0 failures roughly double.
    pub fn with_dim_128() -> Self {
        Self {
            dim: 128,
            q: DEFAULT_Q,
        }
    }

    /// Encoding offset ⌊q/2⌋ added to v for a 1 bit
    pub fn half_q(&self) -> u64 {
        self.q / 2
    }

    /// Decision rule `|diff| < q/4`, evaluated exactly as `4·|diff| < q`
    pub fn is_near_zero(&self, diff: i64) -> bool {
        (diff.unsigned_abs() as u128) * 4 < self.q as u128
    }

    /// Check if parameters are valid
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.dim == 0 {
            return Err("dim must be positive");
        }

        if self.q < 8 {
            return Err("q must be at least 8");
        }

        // Inner products are summed in i64 and reduced once at the end
        let max_term = (self.q as u128 - 1) * (self.q as u128 - 1);
        let max_sum = max_term
            .checked_mul(self.dim as u128)
            .and_then(|s| s.checked_add(self.q as u128));
        if max_sum.map_or(true, |s| s > i64::MAX as u128) {
            return Err("dim * (q - 1)^2 overflows the inner-product accumulator");
        }

        Ok(())
    }
}

impl Default for LweParams {
    fn default() -> Self {
        Self::reference()
    }
}
