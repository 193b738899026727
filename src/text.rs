//! Message encryption: text → per-bit ciphertexts and back
//!
//! Bits are independent, so the default entry points fan out over rayon.
//! Each parallel bit encryption gets its own `ChaCha20Rng` seeded from the
//! caller's generator, which keeps results reproducible for a seeded
//! caller. The `_sequential` variants run on the caller's RNG directly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::codec::{decode_bits_to_text, encode_text_to_bits};
use crate::error::Result;
use crate::lwe::{BitCiphertext, Lwe, PublicKey, SecretKey};

/// Encrypt every bit of `message` (parallel version)
///
/// Returns 8 ciphertexts per character, in bit order.
pub fn encrypt_text<R: Rng + ?Sized>(
    lwe: &Lwe,
    pk: &PublicKey,
    message: &str,
    rng: &mut R,
) -> Result<Vec<BitCiphertext>> {
    pk.check(lwe.params())?;
    let bits = encode_text_to_bits(message)?;
    let seeds: Vec<[u8; 32]> = bits.iter().map(|_| rng.gen()).collect();

    bits.par_iter()
        .zip(seeds.into_par_iter())
        .map(|(&bit, seed)| {
            let mut bit_rng = ChaCha20Rng::from_seed(seed);
            lwe.encrypt_bit_unchecked(pk, bit, &mut bit_rng)
        })
        .collect()
}

/// Encrypt every bit of `message` on the caller's RNG
pub fn encrypt_text_sequential<R: Rng + ?Sized>(
    lwe: &Lwe,
    pk: &PublicKey,
    message: &str,
    rng: &mut R,
) -> Result<Vec<BitCiphertext>> {
    pk.check(lwe.params())?;
    encode_text_to_bits(message)?
        .into_iter()
        .map(|bit| lwe.encrypt_bit_unchecked(pk, bit, &mut *rng))
        .collect()
}

/// Decrypt a ciphertext sequence back to text (parallel version)
pub fn decrypt_text(lwe: &Lwe, sk: &SecretKey, ciphertexts: &[BitCiphertext]) -> Result<String> {
    sk.check(lwe.params())?;
    let bits: Vec<u64> = ciphertexts
        .par_iter()
        .map(|ct| lwe.decrypt_bit(sk, ct))
        .collect::<Result<_>>()?;
    decode_bits_to_text(&bits)
}

/// Decrypt a ciphertext sequence back to text, one bit at a time
pub fn decrypt_text_sequential(
    lwe: &Lwe,
    sk: &SecretKey,
    ciphertexts: &[BitCiphertext],
) -> Result<String> {
    sk.check(lwe.params())?;
    let bits: Vec<u64> = ciphertexts
        .iter()
        .map(|ct| lwe.decrypt_bit(sk, ct))
        .collect::<Result<_>>()?;
    decode_bits_to_text(&bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LweError;

    #[test]
    fn test_ciphertext_count() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        let cts = encrypt_text(&lwe, &keys.public_key, "HI", &mut rng).unwrap();
        assert_eq!(cts.len(), 16);

        let cts = encrypt_text_sequential(&lwe, &keys.public_key, "abc", &mut rng).unwrap();
        assert_eq!(cts.len(), 24);
    }

    #[test]
    fn test_empty_message() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        let cts = encrypt_text(&lwe, &keys.public_key, "", &mut rng).unwrap();
        assert!(cts.is_empty());
        assert_eq!(decrypt_text(&lwe, &keys.secret_key, &cts).unwrap(), "");
    }

    #[test]
    fn test_parallel_encryption_is_reproducible() {
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut ChaCha20Rng::seed_from_u64(5));

        let first = encrypt_text(&lwe, &keys.public_key, "xyz", &mut ChaCha20Rng::seed_from_u64(8)).unwrap();
        let second = encrypt_text(&lwe, &keys.public_key, "xyz", &mut ChaCha20Rng::seed_from_u64(8)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_and_sequential_decrypt_agree() {
        let mut rng = ChaCha20Rng::seed_from_u64(31);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        let cts = encrypt_text(&lwe, &keys.public_key, "lattice", &mut rng).unwrap();
        assert_eq!(
            decrypt_text(&lwe, &keys.secret_key, &cts).unwrap(),
            decrypt_text_sequential(&lwe, &keys.secret_key, &cts).unwrap()
        );
    }

    #[test]
    fn test_unsupported_character() {
        let mut rng = ChaCha20Rng::seed_from_u64(4);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        assert_eq!(
            encrypt_text(&lwe, &keys.public_key, "Ω", &mut rng),
            Err(LweError::UnsupportedCharacter('Ω'))
        );
    }

    #[test]
    fn test_truncated_ciphertext_sequence() {
        let mut rng = ChaCha20Rng::seed_from_u64(6);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        let cts = encrypt_text(&lwe, &keys.public_key, "A", &mut rng).unwrap();
        assert_eq!(
            decrypt_text(&lwe, &keys.secret_key, &cts[..5]),
            Err(LweError::MalformedBitLength(5))
        );
    }
}
