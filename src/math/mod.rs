//! Modular linear algebra for the LWE cryptosystem.
//!
//! - **Modular reduction** into [0, q) with a true (non-negative) modulo
//! - **Linear algebra**: inner products and matrix-vector products mod q
//! - **Sampling**: binary vectors, uniform matrices and the {-1, 0, 1} error
//!
//! # Example
//!
//! ```
//! use lwe_crypt::math::{dot_mod, random_binary_vector};
//! use rand::SeedableRng;
//!
//! let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(1);
//! let s = random_binary_vector(8, &mut rng);
//! let ones = vec![1u64; 8];
//! assert!(dot_mod(&ones, &s, 2053) <= 8);
//! ```

pub mod linalg;
pub mod modular;
pub mod sampling;

pub use linalg::{dot_mod, inner_product, mat_vec_mod, transpose_mat_vec_mod};
pub use modular::ModQ;
pub use sampling::{random_binary_vector, random_matrix, small_error};
