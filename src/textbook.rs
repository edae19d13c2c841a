//! Textbook RSA encryption: messages are turned into a single integer and
//! exponentiated directly, with no padding and no randomization.
//!
//! A message is read as one big-endian unsigned integer `m`, which must be
//! strictly smaller than the modulus. Encryption is deterministic, so the same
//! message and key always produce the same ciphertext.
//!
//! Leading zero bytes of a message do not survive a round trip: they carry no
//! value in the integer form, and decryption emits the minimal big-endian
//! encoding of `ceil(bits / 8)` bytes.
//!
//! # Usage
//!
//! ```
//! use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
//! use textbook_rsa::generate_key_pair;
//!
//! let mut rng = ChaCha8Rng::from_seed([42; 32]);
//! let (public_key, private_key) = generate_key_pair(&mut rng, 256).unwrap().into_parts();
//!
//! let ciphertext = public_key.encrypt("Hi").unwrap();
//! assert_eq!(private_key.decrypt(&ciphertext).unwrap(), "Hi");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::algorithms::pad::{be_bytes_to_uint, uint_to_minimal_be};
use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Encrypts UTF-8 text: `m^e mod n` where `m` is the big-endian integer of
/// the text's bytes.
///
/// Fails with [`Error::MessageTooLong`] when `m ≥ n`.
pub fn encrypt<K: PublicKeyParts>(pub_key: &K, msg: &str) -> Result<BigUint> {
    encrypt_bytes(pub_key, msg.as_bytes())
}

/// Encrypts raw bytes: `m^e mod n` where `m` is the big-endian integer of `msg`.
///
/// Fails with [`Error::MessageTooLong`] when `m ≥ n`, since such a message
/// would be reduced modulo `n` and could not be recovered.
pub fn encrypt_bytes<K: PublicKeyParts>(pub_key: &K, msg: &[u8]) -> Result<BigUint> {
    let m = Zeroizing::new(be_bytes_to_uint(msg));
    if &*m >= pub_key.n() {
        return Err(Error::MessageTooLong);
    }

    rsa_encrypt(pub_key, &m)
}

/// Decrypts a ciphertext back into UTF-8 text.
///
/// Fails with [`Error::Decode`] when the recovered bytes are not valid UTF-8.
pub fn decrypt(priv_key: &impl PrivateKeyParts, ciphertext: &BigUint) -> Result<String> {
    let bytes = decrypt_bytes(priv_key, ciphertext)?;
    String::from_utf8(bytes).map_err(|_| Error::Decode)
}

/// Decrypts a ciphertext into the minimal big-endian bytes of `c^d mod n`.
///
/// Fails with [`Error::Decryption`] when the ciphertext is not below the modulus.
pub fn decrypt_bytes(priv_key: &impl PrivateKeyParts, ciphertext: &BigUint) -> Result<Vec<u8>> {
    if ciphertext >= priv_key.n() {
        return Err(Error::Decryption);
    }

    let m = Zeroizing::new(rsa_decrypt(priv_key, ciphertext)?);
    Ok(uint_to_minimal_be(&m))
}
