//! LWE (Learning With Errors) bit encryption.
//!
//! # Overview
//!
//! Key generation samples a binary secret s, a uniform matrix A and one
//! error scalar e ∈ {-1, 0, 1}, and publishes (A, b = A·s + e mod q).
//!
//! A bit m is encrypted with a fresh binary vector r:
//!
//! ```text
//! u = Aᵗ·r            mod q
//! v = <b, r> + ⌊q/2⌋·m mod q
//! ```
//!
//! Decryption computes diff = v - (<u, s> mod q) as a signed integer and
//! returns 0 when |diff| < q/4, 1 otherwise. The noise e·Σr occasionally
//! wraps around the modulus, so a small fraction of zero bits decrypt to 1.
//!
//! # Key Types
//!
//! - [`Lwe`]: scheme bound to immutable [`crate::params::LweParams`]
//! - [`PublicKey`], [`SecretKey`], [`KeyPair`]
//! - [`BitCiphertext`]: the (u, v) pair for one bit
//!
//! # Example
//!
//! ```
//! use lwe_crypt::lwe::Lwe;
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(42);
//! let lwe = Lwe::reference();
//! let keys = lwe.generate_keys(&mut rng);
//! let ct = lwe.encrypt_bit(&keys.public_key, 1, &mut rng).unwrap();
//! assert_eq!(lwe.decrypt_bit(&keys.secret_key, &ct).unwrap(), 1);
//! ```

mod enc;
mod types;

pub use enc::Lwe;
pub use types::{BitCiphertext, KeyPair, PublicKey, SecretKey};
