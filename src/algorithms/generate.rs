//! Generate prime components for the RSA Private Key

use alloc::vec::Vec;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;

use crate::{
    algorithms::rsa::{
        compute_euler_totient, compute_modulus, compute_private_exponent_euler_totient,
    },
    errors::{Error, Result},
    key::DEFAULT_PUBLIC_EXPONENT,
    prime_rand::RandPrime,
};

pub(crate) struct RsaPrivateKeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: Vec<BigUint>,
}

/// Generates a two-prime RSA key of the given bit size from the given random source.
///
/// Both primes are drawn with `bit_size / 2` bits, so the modulus has
/// `bit_size` or `bit_size - 1` bits. The primes are not checked for
/// distinctness: with small key sizes `p == q` can occur, and the resulting
/// key will not decrypt correctly.
pub(crate) fn generate_key_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<RsaPrivateKeyComponents> {
    if bit_size < 4 {
        return Err(Error::KeySizeTooSmall);
    }

    tracing::debug!(bit_size, "generating RSA key pair");

    let prime_bits = bit_size / 2;
    let p = rng.gen_prime(prime_bits)?;
    let q = rng.gen_prime(prime_bits)?;
    if p == q {
        tracing::warn!(prime_bits, "generated primes are equal");
    }

    let primes = vec![p, q];
    let n = compute_modulus(&primes);
    let totient = compute_euler_totient(&primes)?;

    let e = select_public_exponent(rng, &totient)?;
    let d = compute_private_exponent_euler_totient(&primes, &e)?;

    Ok(RsaPrivateKeyComponents { n, e, d, primes })
}

/// Picks a public exponent `e` with `1 < e < φ` and `gcd(e, φ) = 1`.
///
/// [`DEFAULT_PUBLIC_EXPONENT`] is used whenever it qualifies. Otherwise `e`
/// is resampled uniformly from `[2, φ - 1]` until a coprime value turns up.
pub(crate) fn select_public_exponent<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    totient: &BigUint,
) -> Result<BigUint> {
    let exp = BigUint::from(DEFAULT_PUBLIC_EXPONENT);
    if &exp < totient && exp.gcd(totient).is_one() {
        return Ok(exp);
    }

    let two = BigUint::from(2u32);
    if totient <= &two {
        return Err(Error::InvalidModulus);
    }

    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let e = rng.gen_biguint_range(&two, totient);
        if e.gcd(totient).is_one() {
            tracing::debug!(attempts, "resampled public exponent");
            return Ok(e);
        }
    }
}
