//! LWE key and ciphertext types

use serde::{Deserialize, Serialize};

use crate::error::{LweError, Result};
use crate::math::ModQ;
use crate::params::LweParams;

/// Public key (A, b) with b = A·s + e mod q
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// n x n matrix over [0, q), stored row-major
    #[serde(rename = "A")]
    pub a: Vec<Vec<u64>>,
    /// Length-n vector over [0, q)
    pub b: Vec<u64>,
}

/// Secret key: n entries in {0, 1}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey {
    pub coeffs: Vec<u64>,
}

/// Output of one key generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPair {
    pub public_key: PublicKey,
    pub secret_key: SecretKey,
}

/// Ciphertext of a single bit: u = Aᵗ·r, v = <b, r> + ⌊q/2⌋·bit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitCiphertext {
    /// Length-n vector over [0, q)
    pub u: Vec<u64>,
    /// Scalar in [0, q)
    pub v: u64,
}

fn check_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LweError::DimensionMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}

fn check_reduced(what: &'static str, values: &[u64], q: u64) -> Result<()> {
    match values.iter().find(|&&x| !ModQ::is_reduced(x, q)) {
        Some(&value) => Err(LweError::EntryOutOfRange { what, value, q }),
        None => Ok(()),
    }
}

impl PublicKey {
    /// Dimension n of the key (number of rows of A)
    pub fn dim(&self) -> usize {
        self.a.len()
    }

    /// Check shape n x n / n and that every entry lies in [0, q)
    pub fn check(&self, params: &LweParams) -> Result<()> {
        check_len("public key A rows", params.dim, self.a.len())?;
        for row in &self.a {
            check_len("public key A columns", params.dim, row.len())?;
            check_reduced("public key A", row, params.q)?;
        }
        check_len("public key b", params.dim, self.b.len())?;
        check_reduced("public key b", &self.b, params.q)
    }
}

impl SecretKey {
    /// Create a secret key from existing bits
    pub fn from_coeffs(coeffs: Vec<u64>) -> Self {
        Self { coeffs }
    }

    /// Check length n and that every entry is a bit
    pub fn check(&self, params: &LweParams) -> Result<()> {
        check_len("secret key", params.dim, self.coeffs.len())?;
        match self.coeffs.iter().find(|&&x| x > 1) {
            Some(&x) => Err(LweError::NonBinarySecret(x)),
            None => Ok(()),
        }
    }
}

impl BitCiphertext {
    /// Check length n and that u and v lie in [0, q)
    pub fn check(&self, params: &LweParams) -> Result<()> {
        check_len("ciphertext u", params.dim, self.u.len())?;
        check_reduced("ciphertext u", &self.u, params.q)?;
        check_reduced("ciphertext v", &[self.v], params.q)
    }
}
