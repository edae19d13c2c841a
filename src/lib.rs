#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Building blocks
//!
//! The crate is layered the way the algorithm is taught:
//!
//! - [`prime::probably_prime`]: Miller-Rabin probabilistic primality test.
//! - [`RandPrime::gen_prime`]: random odd primes of an exact bit length.
//! - [`math::extended_gcd`] and [`math::mod_inverse`]: Bézout coefficients
//!   and modular inversion.
//! - [`generate_key_pair`]: two primes, the modulus, φ(n), and the exponents.
//! - [`textbook::encrypt`] and [`textbook::decrypt`]: unpadded modular
//!   exponentiation of messages read as big-endian integers.
//!
//! Every randomized operation takes its random source explicitly.
//!
//! ```
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//! use textbook_rsa::{math::mod_inverse, prime::probably_prime, BigUint, RandPrime};
//!
//! let mut rng = ChaCha8Rng::from_seed([7; 32]);
//!
//! let p = rng.gen_prime(64).unwrap();
//! assert_eq!(p.bits(), 64);
//! assert!(probably_prime(&mut rng, &p, 20));
//!
//! let inverse = mod_inverse(&BigUint::from(17u32), &BigUint::from(3120u32)).unwrap();
//! assert_eq!(inverse, BigUint::from(2753u32));
//! ```

#[cfg(doctest)]
pub struct ReadmeDoctests;

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod errors;
pub mod math;
pub mod prime;
mod prime_rand;
pub mod textbook;
pub mod traits;

mod key;

pub use crate::{
    errors::{Error, Result},
    key::{
        generate_default_key_pair, generate_key_pair, KeyPair, RsaPrivateKey, RsaPublicKey,
        DEFAULT_KEY_BITS, DEFAULT_PUBLIC_EXPONENT,
    },
    prime::DEFAULT_ROUNDS,
    prime_rand::RandPrime,
};

#[cfg(feature = "hazmat")]
pub mod hazmat;
