//! Extended Euclidean algorithm and modular inversion.

#![allow(clippy::many_single_char_names)]

use core::mem;

use num_bigint::Sign::Plus;
use num_bigint::{BigInt, BigUint, ToBigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::errors::{Error, Result};

/// Returns `(g, x, y)` such that `a·x + b·y = g = gcd(a, b)`.
///
/// The coefficients are the ones produced by the classic recursion
/// `egcd(0, b) = (b, 0, 1)` and
/// `egcd(a, b) = (g, y' - (b / a)·x', x')` where `(g, x', y') = egcd(b mod a, a)`,
/// computed here with running Bézout coefficients instead of recursion so deep
/// remainder chains cannot exhaust the stack.
pub fn extended_gcd(a: &BigUint, b: &BigUint) -> (BigInt, BigInt, BigInt) {
    // Euclid runs on (b, a); `s` tracks the coefficient of b, `t` that of a.
    let mut old_r = BigInt::from_biguint(Plus, b.clone());
    let mut r = BigInt::from_biguint(Plus, a.clone());
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let q = old_r.div_floor(&r);

        let next_r = &old_r - &q * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &q * &s;
        old_s = mem::replace(&mut s, next_s);

        let next_t = &old_t - &q * &t;
        old_t = mem::replace(&mut t, next_t);
    }

    (old_r, old_t, old_s)
}

/// Calculates the [modular multiplicative inverse] of `a` modulo `m`.
///
/// Returns the unique `x` in `[0, m)` with `a·x ≡ 1 (mod m)`, or
/// [`Error::NoInverse`] when `gcd(a, m) ≠ 1` or `m` is zero.
///
/// [modular multiplicative inverse]: https://en.wikipedia.org/wiki/Modular_multiplicative_inverse
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if m.is_zero() {
        return Err(Error::NoInverse);
    }

    let (g, x, _) = extended_gcd(&(a % m), m);
    if !g.is_one() {
        return Err(Error::NoInverse);
    }

    let m = BigInt::from_biguint(Plus, m.clone());
    x.mod_floor(&m).to_biguint().ok_or(Error::Internal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::FromPrimitive;

    fn big(n: u64) -> BigUint {
        BigUint::from_u64(n).unwrap()
    }

    fn int(n: i64) -> BigInt {
        BigInt::from_i64(n).unwrap()
    }

    /// The textbook recursive form, kept as an oracle for the iterative one.
    fn extended_gcd_recursive(a: i64, b: i64) -> (i64, i64, i64) {
        if a == 0 {
            return (b, 0, 1);
        }
        let (g, x, y) = extended_gcd_recursive(b % a, a);
        (g, y - (b / a) * x, x)
    }

    #[test]
    fn test_extended_gcd_matches_recursion() {
        for a in 0..120i64 {
            for b in 0..120i64 {
                let (g, x, y) = extended_gcd(&big(a as u64), &big(b as u64));
                let (eg, ex, ey) = extended_gcd_recursive(a, b);
                assert_eq!((g.clone(), x.clone(), y.clone()), (int(eg), int(ex), int(ey)), "egcd({}, {})", a, b);
                assert_eq!(int(a) * x + int(b) * y, g);
            }
        }
    }

    #[test]
    fn test_extended_gcd_base_case() {
        assert_eq!(
            extended_gcd(&big(0), &big(42)),
            (int(42), int(0), int(1))
        );
    }

    #[test]
    fn test_extended_gcd_large() {
        let a = BigUint::parse_bytes(b"239487239847", 10).unwrap();
        let b = BigUint::parse_bytes(
            b"2410312426921032588552076022197566074856950548502459942654116941958108831682612228890093858261341614673227141477904012196503648957050582631942730706805009223062734745341073406696246014589361659774041027169249453200378729434170325843778659198143763193776859869524088940195577346119843545301547043747207749969763750084308926339295559968882457872412993810129130294592999947926365264059284647209730384947211681434464714438488520940127459844288859336526896320919633919",
            10,
        )
        .unwrap();

        let (g, x, y) = extended_gcd(&a, &b);
        let lhs = BigInt::from_biguint(Plus, a) * x + BigInt::from_biguint(Plus, b) * y;
        assert_eq!(lhs, g);
        assert!(g.is_one());
    }

    #[test]
    fn test_mod_inverse() {
        let tests = [
            ["1234567", "458948883992"],
            ["239487239847", "2410312426921032588552076022197566074856950548502459942654116941958108831682612228890093858261341614673227141477904012196503648957050582631942730706805009223062734745341073406696246014589361659774041027169249453200378729434170325843778659198143763193776859869524088940195577346119843545301547043747207749969763750084308926339295559968882457872412993810129130294592999947926365264059284647209730384947211681434464714438488520940127459844288859336526896320919633919"],
        ];

        for test in &tests {
            let element = BigUint::parse_bytes(test[0].as_bytes(), 10).unwrap();
            let modulus = BigUint::parse_bytes(test[1].as_bytes(), 10).unwrap();

            let inverse = mod_inverse(&element, &modulus).unwrap();
            assert!(inverse < modulus);
            let cmp = (&inverse * &element) % &modulus;
            assert!(
                cmp.is_one(),
                "mod_inverse({}, {}) * {} % {} = {}, not 1",
                &element,
                &modulus,
                &element,
                &modulus,
                &cmp
            );
        }

        // exhaustive tests for small numbers
        for n in 2..100u64 {
            let modulus = big(n);
            for x in 0..2 * n {
                let element = big(x);
                let result = mod_inverse(&element, &modulus);

                if !element.gcd(&modulus).is_one() {
                    assert_eq!(result, Err(Error::NoInverse), "{} mod {}", x, n);
                    continue;
                }

                let inverse = result.unwrap();
                assert!(inverse < modulus);
                let cmp = (&inverse * &element) % &modulus;
                assert!(
                    cmp.is_one(),
                    "mod_inverse({}, {})*{}%{}={}, not 1",
                    &element,
                    &modulus,
                    &element,
                    &modulus,
                    &cmp
                );
            }
        }
    }

    #[test]
    fn test_mod_inverse_textbook_values() {
        assert_eq!(mod_inverse(&big(17), &big(3120)), Ok(big(2753)));
        assert_eq!(mod_inverse(&big(3), &big(11)), Ok(big(4)));
    }

    #[test]
    fn test_mod_inverse_zero_modulus() {
        assert_eq!(mod_inverse(&big(3), &big(0)), Err(Error::NoInverse));
    }
}
