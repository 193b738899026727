//! LWE key generation, bit encryption and bit decryption

use rand::Rng;

use super::types::{BitCiphertext, KeyPair, PublicKey, SecretKey};
use crate::error::{LweError, Result};
use crate::math::{
    dot_mod, inner_product, random_binary_vector, random_matrix, small_error,
    transpose_mat_vec_mod, ModQ,
};
use crate::params::LweParams;

/// LWE bit cryptosystem bound to one immutable parameter set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lwe {
    params: LweParams,
}

impl Lwe {
    /// Build a scheme instance, rejecting invalid parameters
    pub fn new(params: LweParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Scheme at the reference parameters n = 64, q = 2053
    pub fn reference() -> Self {
        Self {
            params: LweParams::reference(),
        }
    }

    pub fn params(&self) -> &LweParams {
        &self.params
    }

    /// Generate a fresh key pair
    ///
    /// One error scalar e is drawn and added to every row:
    /// b[i] = <A[i], s> + e mod q. Rows do not get independent noise.
    pub fn generate_keys<R: Rng + ?Sized>(&self, rng: &mut R) -> KeyPair {
        let LweParams { dim, q } = self.params;

        let s = random_binary_vector(dim, rng);
        let a = random_matrix(dim, dim, q, rng);
        let error = small_error(rng);

        let b = a
            .iter()
            .map(|row| ModQ::from_signed(inner_product(row, &s) + error, q))
            .collect();

        KeyPair {
            public_key: PublicKey { a, b },
            secret_key: SecretKey { coeffs: s },
        }
    }

    /// Encrypt a single bit under `pk`
    ///
    /// Computes u = Aᵗ·r and v = <b, r> + ⌊q/2⌋·bit with a fresh binary r.
    pub fn encrypt_bit<R: Rng + ?Sized>(
        &self,
        pk: &PublicKey,
        bit: u64,
        rng: &mut R,
    ) -> Result<BitCiphertext> {
        pk.check(&self.params)?;
        self.encrypt_bit_unchecked(pk, bit, rng)
    }

    /// `encrypt_bit` without re-validating the public key
    ///
    /// Callers must have run `PublicKey::check` against these parameters.
    pub(crate) fn encrypt_bit_unchecked<R: Rng + ?Sized>(
        &self,
        pk: &PublicKey,
        bit: u64,
        rng: &mut R,
    ) -> Result<BitCiphertext> {
        if bit > 1 {
            return Err(LweError::NonBitPlaintext(bit));
        }
        let LweParams { dim, q } = self.params;

        let r = random_binary_vector(dim, rng);
        let u = transpose_mat_vec_mod(&pk.a, &r, q);
        let v = ModQ::from_signed(
            inner_product(&pk.b, &r) + (self.params.half_q() * bit) as i64,
            q,
        );

        Ok(BitCiphertext { u, v })
    }

    /// Decrypt a single bit
    ///
    /// Returns 0 when |v - <u, s> mod q| < q/4 and 1 otherwise. Noise can
    /// push the difference across the threshold; the result is then a
    /// wrong bit, not an error.
    pub fn decrypt_bit(&self, sk: &SecretKey, ct: &BitCiphertext) -> Result<u64> {
        sk.check(&self.params)?;
        ct.check(&self.params)?;
        Ok(self.decide(self.phase(sk, ct)))
    }

    /// Signed difference v - (<u, s> mod q)
    ///
    /// Not re-centred mod q: a difference that wrapped around the modulus
    /// is classified as is.
    pub fn phase(&self, sk: &SecretKey, ct: &BitCiphertext) -> i64 {
        let inner = dot_mod(&ct.u, &sk.coeffs, self.params.q);
        ct.v as i64 - inner as i64
    }

    /// Map a phase to a bit with the strict `|diff| < q/4` rule
    pub fn decide(&self, diff: i64) -> u64 {
        if self.params.is_near_zero(diff) {
            0
        } else {
            1
        }
    }
}

impl Default for Lwe {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_keygen_shapes_and_ranges() {
        let mut rng = ChaCha20Rng::seed_from_u64(12345);
        let lwe = Lwe::reference();
        let keys = lwe.generate_keys(&mut rng);

        assert_eq!(keys.public_key.dim(), 64);
        assert!(keys.public_key.check(lwe.params()).is_ok());
        assert!(keys.secret_key.check(lwe.params()).is_ok());
    }

    #[test]
    fn test_keygen_shares_one_error_across_rows() {
        let mut rng = ChaCha20Rng::seed_from_u64(777);
        let lwe = Lwe::reference();
        let q = lwe.params().q;

        let keys = lwe.generate_keys(&mut rng);
        let errors: Vec<i64> = keys
            .public_key
            .a
            .iter()
            .zip(keys.public_key.b.iter())
            .map(|(row, &b)| {
                let clean = dot_mod(row, &keys.secret_key.coeffs, q);
                let e = ModQ::from_signed(b as i64 - clean as i64, q);
                if e > q / 2 {
                    e as i64 - q as i64
                } else {
                    e as i64
                }
            })
            .collect();

        assert!((-1..=1).contains(&errors[0]));
        assert!(errors.iter().all(|&e| e == errors[0]));
    }

    #[test]
    fn test_encrypt_matches_formula() {
        let lwe = Lwe::new(LweParams { dim: 2, q: 17 }).unwrap();
        let pk = PublicKey {
            a: vec![vec![1, 2], vec![3, 4]],
            b: vec![5, 16],
        };
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        for bit in [0, 1] {
            let ct = lwe.encrypt_bit(&pk, bit, &mut rng).unwrap();
            // Recover r from u: each r is one of four binary vectors
            let candidates = [[0u64, 0], [0, 1], [1, 0], [1, 1]];
            let r = candidates
                .iter()
                .find(|r| transpose_mat_vec_mod(&pk.a, &r[..], 17) == ct.u)
                .expect("u must equal Aᵗ·r for a binary r");
            let expected_v = (dot_mod(&pk.b, &r[..], 17) + 8 * bit) % 17;
            assert_eq!(ct.v, expected_v);
        }
    }

    #[test]
    fn test_noise_free_roundtrip() {
        // e = 0 keys decrypt without error
        let lwe = Lwe::reference();
        let mut rng = ChaCha20Rng::seed_from_u64(2024);
        let keys = loop {
            let keys = lwe.generate_keys(&mut rng);
            let q = lwe.params().q;
            let clean = dot_mod(&keys.public_key.a[0], &keys.secret_key.coeffs, q);
            if clean == keys.public_key.b[0] {
                break keys;
            }
        };

        for i in 0..200 {
            let bit = i % 2;
            let ct = lwe.encrypt_bit(&keys.public_key, bit, &mut rng).unwrap();
            assert_eq!(lwe.decrypt_bit(&keys.secret_key, &ct).unwrap(), bit);
        }
    }

    #[test]
    fn test_rejects_non_bit_plaintext() {
        let lwe = Lwe::reference();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let keys = lwe.generate_keys(&mut rng);

        assert_eq!(
            lwe.encrypt_bit(&keys.public_key, 2, &mut rng),
            Err(LweError::NonBitPlaintext(2))
        );
    }

    #[test]
    fn test_rejects_dimension_mismatch() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let small = Lwe::new(LweParams { dim: 16, q: 2053 }).unwrap();
        let big = Lwe::reference();

        let small_keys = small.generate_keys(&mut rng);
        let big_keys = big.generate_keys(&mut rng);

        assert!(matches!(
            big.encrypt_bit(&small_keys.public_key, 1, &mut rng),
            Err(LweError::DimensionMismatch { .. })
        ));

        let ct = small.encrypt_bit(&small_keys.public_key, 1, &mut rng).unwrap();
        assert!(matches!(
            big.decrypt_bit(&big_keys.secret_key, &ct),
            Err(LweError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_decide_threshold() {
        let lwe = Lwe::reference();
        assert_eq!(lwe.decide(0), 0);
        assert_eq!(lwe.decide(513), 0);
        assert_eq!(lwe.decide(-513), 0);
        assert_eq!(lwe.decide(514), 1);
        assert_eq!(lwe.decide(1026), 1);
        // Wrapped difference stays uncorrected
        assert_eq!(lwe.decide(-2040), 1);
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert_eq!(
            Lwe::new(LweParams { dim: 0, q: 2053 }),
            Err(LweError::InvalidParams("dim must be positive"))
        );
    }
}
