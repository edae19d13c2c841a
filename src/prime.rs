//! Probabilistic primality testing.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds used when the caller has no preference.
pub const DEFAULT_ROUNDS: usize = 5;

/// Reports whether `n` is probably prime,
/// applying the Miller-Rabin test with `rounds` bases drawn uniformly from `[2, n-2]`.
///
/// If `n` is prime, `probably_prime` always returns true.
/// If `n` is composite, it returns true with probability at most ¼ʳᵒᵘⁿᵈˢ.
/// The first failing round rejects `n`; no further bases are drawn.
///
/// Not suitable for judging numbers that an adversary may have crafted to
/// fool the test.
pub fn probably_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    if n <= &BigUint::one() {
        return false;
    }

    if let Some(small) = n.to_u64() {
        if small == 2 || small == 3 {
            return true;
        }
    }

    if n.is_even() {
        return false;
    }

    probably_prime_miller_rabin(rng, n, rounds)
}

/// Reports whether the odd number `n > 3` passes `reps` rounds of the
/// Miller-Rabin primality test.
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub(crate) fn probably_prime_miller_rabin<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    n: &BigUint,
    reps: usize,
) -> bool {
    let nm1 = n - BigUint::one();

    // determine d, s such that nm1 = d << s
    let mut d = nm1.clone();
    let mut s = 0usize;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    let two = BigUint::from(2u32);

    'next: for _ in 0..reps {
        // upper bound is exclusive, so this samples [2, n-2]
        let a = rng.gen_biguint_range(&two, &nm1);

        let mut x = a.modpow(&d, n);
        if x.is_one() || x == nm1 {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == nm1 {
                continue 'next;
            }
        }

        return false;
    }

    true
}
