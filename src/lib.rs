//! lwe-crypt: public-key bit encryption from Learning With Errors
//!
//! A deliberately small LWE cryptosystem:
//! - Key generation over Z_q with a binary secret and one shared error term
//! - Single-bit encryption with a fresh binary ephemeral vector per call
//! - Single-bit decryption by thresholding the signed phase at q/4
//!
//! Around the primitive sit a byte-per-character text codec, parallel
//! message encryption, a JSON request/response boundary and (with the
//! `server` feature) an HTTP transport.
//!
//! This is a toy: no error correction, no IND-CPA argument, no
//! constant-time arithmetic.

pub mod params;
pub mod error;
pub mod math;
pub mod lwe;
pub mod codec;
pub mod text;
pub mod service;
#[cfg(feature = "server")]
pub mod server;

pub use codec::{decode_bits_to_text, encode_text_to_bits};
pub use error::LweError;
pub use lwe::{BitCiphertext, KeyPair, Lwe, PublicKey, SecretKey};
pub use params::LweParams;
pub use service::{CryptoService, Request, Response};
pub use text::{decrypt_text, decrypt_text_sequential, encrypt_text, encrypt_text_sequential};
