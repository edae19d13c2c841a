//! Generation of random primes.

use num_bigint::BigUint;
use rand_core::CryptoRngCore;

use crate::errors::{Error, Result};
use crate::prime::{probably_prime, DEFAULT_ROUNDS};

/// A generic trait for generating random primes.
///
/// *Warning*: This is highly dependent on the provided random number generator
/// to provide actually random primes.
///
/// # Example
/// ```
/// use rand::thread_rng;
/// use textbook_rsa::RandPrime;
///
/// let mut rng = thread_rng();
/// let p = rng.gen_prime(128).unwrap();
/// assert_eq!(p.bits(), 128);
/// ```
pub trait RandPrime {
    /// Generate a random odd probable prime with exactly `bit_size` bits.
    ///
    /// Candidates are resampled until one passes [`DEFAULT_ROUNDS`] rounds of
    /// Miller-Rabin; there is no attempt limit.
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint> {
        if bit_size < 2 {
            return Err(Error::PrimeSizeTooSmall);
        }

        // bits used in the leading byte, 1..=8
        let b = match bit_size % 8 {
            0 => 8,
            b => b,
        };

        let bytes_len = (bit_size + 7) / 8;
        let mut bytes = vec![0u8; bytes_len];
        let mut attempts = 0usize;

        loop {
            attempts += 1;
            self.fill_bytes(&mut bytes);

            // Clear bits in the first byte to make sure the candidate has a size <= bits.
            bytes[0] &= ((1u32 << b) - 1) as u8;
            // Pin the length with the top bit and make the candidate odd.
            bytes[0] |= 1u8 << (b - 1);
            bytes[bytes_len - 1] |= 1;

            let p = BigUint::from_bytes_be(&bytes);
            if probably_prime(&mut *self, &p, DEFAULT_ROUNDS) {
                tracing::trace!(bit_size, attempts, "found probable prime");
                return Ok(p);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_integer::Integer;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_prime_small() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        for n in 2..10 {
            let p = rng.gen_prime(n).unwrap();

            assert_eq!(p.bits(), n);
            assert!(p.is_odd());
            assert!(probably_prime(&mut rng, &p, 32));
        }
    }

    #[test]
    fn test_prime_two_bits_is_three() {
        let mut rng = ChaCha8Rng::from_seed([9u8; 32]);
        for _ in 0..8 {
            assert_eq!(rng.gen_prime(2).unwrap(), BigUint::from(3u32));
        }
    }

    #[test]
    fn test_prime_bit_lengths() {
        let mut rng = ChaCha8Rng::from_seed([3u8; 32]);
        for n in [8, 9, 15, 16, 17, 31, 64, 65, 100, 127] {
            for _ in 0..5 {
                let p = rng.gen_prime(n).unwrap();
                assert_eq!(p.bits(), n, "{} should have {} bits", p, n);
                assert!(p.is_odd());
            }
        }
    }

    #[test]
    fn test_gen_prime_512() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        let p = rng.gen_prime(512).unwrap();
        assert_eq!(p.bits(), 512);
        assert!(probably_prime(&mut rng, &p, 20));
    }

    #[test]
    fn test_prime_too_small() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        assert_eq!(rng.gen_prime(0), Err(Error::PrimeSizeTooSmall));
        assert_eq!(rng.gen_prime(1), Err(Error::PrimeSizeTooSmall));
    }
}
