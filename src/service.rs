//! Request/response boundary for the cryptosystem
//!
//! One request produces exactly one response. Any failure, including a
//! request that does not parse, becomes `{ "error": "..." }`.
//!
//! # Wire format
//!
//! ```text
//! { "action": "generateKeys" }
//! { "action": "encrypt", "publicKey": { "A": [[..]], "b": [..] }, "message": "HI" }
//! { "action": "decrypt", "secretKey": [..], "ciphertexts": [{ "u": [..], "v": 7 }] }
//! ```

use rand::thread_rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::lwe::{BitCiphertext, KeyPair, Lwe, PublicKey, SecretKey};
use crate::params::LweParams;
use crate::text::{decrypt_text, encrypt_text};

/// Incoming request, tagged by `action`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GenerateKeys,
    #[serde(rename_all = "camelCase")]
    Encrypt {
        public_key: PublicKey,
        message: String,
    },
    #[serde(rename_all = "camelCase")]
    Decrypt {
        secret_key: SecretKey,
        ciphertexts: Vec<BitCiphertext>,
    },
}

/// Outgoing response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Keys(KeyPair),
    Ciphertexts { ciphertexts: Vec<BitCiphertext> },
    Plaintext { plaintext: String },
    Error { error: String },
}

impl Response {
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error { error: msg.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// Stateless request handler bound to one parameter set
#[derive(Debug, Clone, Copy)]
pub struct CryptoService {
    lwe: Lwe,
}

impl CryptoService {
    pub fn new(params: LweParams) -> Result<Self> {
        Ok(Self {
            lwe: Lwe::new(params)?,
        })
    }

    pub fn params(&self) -> &LweParams {
        self.lwe.params()
    }

    /// Process one request
    pub fn handle(&self, request: Request) -> Response {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("request failed: {}", e);
                Response::error(e.to_string())
            }
        }
    }

    /// Parse and process one JSON-encoded request
    pub fn handle_raw(&self, raw: &str) -> Response {
        match serde_json::from_str::<Request>(raw) {
            Ok(request) => self.handle(request),
            Err(e) => {
                warn!("malformed request: {}", e);
                Response::error(format!("malformed request: {}", e))
            }
        }
    }

    /// Process one JSON-encoded request and return the JSON response
    pub fn handle_json(&self, raw: &str) -> String {
        serde_json::to_string(&self.handle_raw(raw)).unwrap_or_else(|e| encode_failure(&e))
    }

    fn dispatch(&self, request: Request) -> Result<Response> {
        let mut rng = thread_rng();
        match request {
            Request::GenerateKeys => {
                debug!(dim = self.params().dim, "generating keys");
                Ok(Response::Keys(self.lwe.generate_keys(&mut rng)))
            }
            Request::Encrypt {
                public_key,
                message,
            } => {
                let ciphertexts = encrypt_text(&self.lwe, &public_key, &message, &mut rng)?;
                debug!(bits = ciphertexts.len(), "encrypted message");
                Ok(Response::Ciphertexts { ciphertexts })
            }
            Request::Decrypt {
                secret_key,
                ciphertexts,
            } => {
                let plaintext = decrypt_text(&self.lwe, &secret_key, &ciphertexts)?;
                debug!(bits = ciphertexts.len(), "decrypted message");
                Ok(Response::Plaintext { plaintext })
            }
        }
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self {
            lwe: Lwe::reference(),
        }
    }
}

/// `{"error": ...}` body for a response that could not be serialized
fn encode_failure(e: &dyn std::fmt::Display) -> String {
    serde_json::json!({ "error": format!("failed to encode response: {}", e) }).to_string()
}
