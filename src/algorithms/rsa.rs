//! Generic RSA implementation

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};
use crate::math::mod_inverse;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw RSA encryption of m with the public key. No padding is performed.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// `m` is not checked against the modulus: any `m ≥ n` is silently reduced
/// and will not survive a round trip.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts>(key: &K, m: &BigUint) -> Result<BigUint> {
    if key.n().is_zero() {
        return Err(Error::InvalidModulus);
    }

    Ok(m.modpow(key.e(), key.n()))
}

/// ⚠️ Performs raw RSA decryption with no padding or range checks.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! The ciphertext is not checked against
/// the modulus.
#[inline]
pub fn rsa_decrypt(priv_key: &impl PrivateKeyParts, c: &BigUint) -> Result<BigUint> {
    if priv_key.n().is_zero() {
        return Err(Error::InvalidModulus);
    }

    Ok(c.modpow(priv_key.d(), priv_key.n()))
}

/// Compute the modulus of a key from its primes.
pub(crate) fn compute_modulus(primes: &[BigUint]) -> BigUint {
    primes.iter().fold(BigUint::one(), |n, prime| n * prime)
}

/// Compute Euler's totient φ(n) = Π(pᵢ - 1) from the primes of a key.
pub(crate) fn compute_euler_totient(primes: &[BigUint]) -> Result<BigUint> {
    if primes.len() < 2 {
        return Err(Error::InvalidPrime);
    }

    let mut totient = BigUint::one();
    for prime in primes {
        if prime <= &BigUint::one() {
            return Err(Error::InvalidPrime);
        }
        totient *= prime - BigUint::one();
    }

    Ok(totient)
}

/// Compute the private exponent from its primes (p and q) and public exponent.
/// This uses Euler's totient function.
pub(crate) fn compute_private_exponent_euler_totient(
    primes: &[BigUint],
    exp: &BigUint,
) -> Result<BigUint> {
    let totient = compute_euler_totient(primes)?;
    mod_inverse(exp, &totient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn primes_from_u64(primes: &[u64]) -> Vec<BigUint> {
        primes.iter().map(|&p| BigUint::from(p)).collect()
    }

    #[test]
    fn test_compute_modulus_and_totient() {
        let primes = primes_from_u64(&[181, 151]);
        assert_eq!(compute_modulus(&primes), BigUint::from(27331u32));
        assert_eq!(
            compute_euler_totient(&primes).unwrap(),
            BigUint::from(27000u32)
        );
    }

    #[test]
    fn test_compute_private_exponent() {
        let primes = primes_from_u64(&[61, 53]);
        let d = compute_private_exponent_euler_totient(&primes, &BigUint::from(17u32)).unwrap();
        assert_eq!(d, BigUint::from(2753u32));

        // 3 divides φ = 3120
        assert_eq!(
            compute_private_exponent_euler_totient(&primes, &BigUint::from(3u32)),
            Err(Error::NoInverse)
        );
    }

    #[test]
    fn test_totient_rejects_bad_primes() {
        assert_eq!(
            compute_euler_totient(&primes_from_u64(&[7])),
            Err(Error::InvalidPrime)
        );
        assert_eq!(
            compute_euler_totient(&primes_from_u64(&[7, 1])),
            Err(Error::InvalidPrime)
        );
    }
}
