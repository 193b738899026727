//! Error handling for the LWE cryptosystem
//!
//! Every malformed-input condition surfaces as an `LweError`. A wrong
//! decrypted bit caused by accumulated noise is not an error and never
//! shows up here.

use std::fmt;

/// Malformed-input condition raised by key, codec and boundary operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LweError {
    /// Parameter set rejected by `LweParams::validate`
    InvalidParams(&'static str),
    /// Plaintext value other than 0 or 1
    NonBitPlaintext(u64),
    /// A vector or matrix does not have the length the parameters require
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// An entry lies outside [0, q)
    EntryOutOfRange {
        what: &'static str,
        value: u64,
        q: u64,
    },
    /// Secret key entry that is not a bit
    NonBinarySecret(u64),
    /// Character whose code point does not fit in 8 bits
    UnsupportedCharacter(char),
    /// Bit sequence length not a multiple of 8
    MalformedBitLength(usize),
    /// Bit sequence entry other than 0 or 1
    NonBitValue(u64),
}

impl fmt::Display for LweError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams(reason) => write!(f, "invalid parameters: {}", reason),
            Self::NonBitPlaintext(v) => write!(f, "plaintext must be 0 or 1, got {}", v),
            Self::DimensionMismatch {
                what,
                expected,
                found,
            } => write!(
                f,
                "dimension mismatch in {}: expected {}, found {}",
                what, expected, found
            ),
            Self::EntryOutOfRange { what, value, q } => {
                write!(f, "{} entry {} is outside [0, {})", what, value, q)
            }
            Self::NonBinarySecret(v) => write!(f, "secret key entry must be 0 or 1, got {}", v),
            Self::UnsupportedCharacter(c) => write!(
                f,
                "character {:?} (U+{:04X}) does not fit in 8 bits",
                c, *c as u32
            ),
            Self::MalformedBitLength(len) => {
                write!(f, "bit sequence length {} is not a multiple of 8", len)
            }
            Self::NonBitValue(v) => write!(f, "bit sequence entry must be 0 or 1, got {}", v),
        }
    }
}

impl std::error::Error for LweError {}

impl From<&'static str> for LweError {
    fn from(reason: &'static str) -> Self {
        Self::InvalidParams(reason)
    }
}

/// Result type for LWE operations
pub type Result<T> = std::result::Result<T, LweError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_descriptive() {
        let err = LweError::DimensionMismatch {
            what: "ciphertext u",
            expected: 64,
            found: 32,
        };
        assert_eq!(
            err.to_string(),
            "dimension mismatch in ciphertext u: expected 64, found 32"
        );

        let err = LweError::UnsupportedCharacter('€');
        assert!(err.to_string().contains("U+20AC"));
    }
}
