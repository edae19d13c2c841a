//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds functions that apply RSA's core encryption and decryption
//! primitives to raw integers without any range checks. In particular
//! [`rsa_encrypt`] accepts messages `m ≥ n`, which are silently reduced modulo
//! `n` and decrypt to the wrong value. Use [`crate::textbook`] for checked
//! message handling.

pub use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
