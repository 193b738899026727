//! Text ↔ bit sequence framing
//!
//! Each character is one byte, most significant bit first. Only code
//! points 0..=255 are representable; anything above is rejected with
//! [`LweError::UnsupportedCharacter`] rather than truncated.

use crate::error::{LweError, Result};

/// Expand every character into its 8 bits, MSB first
pub fn encode_text_to_bits(text: &str) -> Result<Vec<u64>> {
    let mut bits = Vec::with_capacity(text.len() * 8);
    for c in text.chars() {
        let code = u8::try_from(c as u32).map_err(|_| LweError::UnsupportedCharacter(c))?;
        bits.extend((0..8).rev().map(|i| ((code >> i) & 1) as u64));
    }
    Ok(bits)
}

/// Reassemble 8-bit groups, MSB first, into characters (Latin-1)
pub fn decode_bits_to_text(bits: &[u64]) -> Result<String> {
    if bits.len() % 8 != 0 {
        return Err(LweError::MalformedBitLength(bits.len()));
    }

    bits.chunks(8)
        .map(|byte| {
            byte.iter().try_fold(0u8, |acc, &bit| match bit {
                0 | 1 => Ok((acc << 1) | bit as u8),
                other => Err(LweError::NonBitValue(other)),
            })
        })
        .map(|code| code.map(char::from))
        .collect()
}
