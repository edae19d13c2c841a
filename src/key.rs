use alloc::string::String;
use alloc::vec::Vec;
use core::hash::{Hash, Hasher};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::generate::generate_key_components;
use crate::algorithms::rsa::{compute_euler_totient, compute_modulus};
use crate::errors::{Error, Result};
use crate::textbook;
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Key size used by [`generate_default_key_pair`].
pub const DEFAULT_KEY_BITS: usize = 1024;

/// Public exponent tried first during key generation.
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus: product of prime numbers `p` and `q`
    n: BigUint,
    /// Public exponent: `1 < e < φ(n)`, coprime to `φ(n)`.
    e: BigUint,
}

/// Represents a whole RSA key, public and private parts.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    /// Public components of the private key.
    pubkey_components: RsaPublicKey,
    /// Private exponent
    d: BigUint,
    /// Prime factors of N, contains >= 2 elements.
    primes: Vec<BigUint>,
}

impl Eq for RsaPrivateKey {}
impl PartialEq for RsaPrivateKey {
    #[inline]
    fn eq(&self, other: &RsaPrivateKey) -> bool {
        self.pubkey_components == other.pubkey_components
            && self.d == other.d
            && self.primes == other.primes
    }
}

impl AsRef<RsaPublicKey> for RsaPrivateKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.pubkey_components
    }
}

impl Hash for RsaPrivateKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Domain separator for RSA private keys
        state.write(b"RsaPrivateKey");
        Hash::hash(&self.pubkey_components, state);
    }
}

impl Hash for RsaPublicKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Domain separator for RSA public keys
        state.write(b"RsaPublicKey");
        Hash::hash(&self.n, state);
        Hash::hash(&self.e, state);
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
        self.primes.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.to_public_key()
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPublicKey {
    /// Create a new public key from its components.
    ///
    /// Requires `n > 1` and `1 < e < n`.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        let k = Self { n, e };
        check_public(&k)?;
        Ok(k)
    }

    /// Create a new public key, bypassing checks around the modulus and
    /// public exponent size.
    pub fn new_unchecked(n: BigUint, e: BigUint) -> Self {
        Self { n, e }
    }

    /// Encrypt UTF-8 text with textbook RSA. See [`textbook::encrypt`].
    pub fn encrypt(&self, msg: &str) -> Result<BigUint> {
        textbook::encrypt(self, msg)
    }

    /// Encrypt raw bytes with textbook RSA. See [`textbook::encrypt_bytes`].
    pub fn encrypt_bytes(&self, msg: &[u8]) -> Result<BigUint> {
        textbook::encrypt_bytes(self, msg)
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }

    fn primes(&self) -> &[BigUint] {
        &self.primes
    }
}

impl RsaPrivateKey {
    /// Generate a new RSA key pair of the given bit size using the passed in `rng`.
    ///
    /// The modulus has `bit_size` or `bit_size - 1` bits.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaPrivateKey> {
        let components = generate_key_components(rng, bit_size)?;
        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey {
                n: components.n,
                e: components.e,
            },
            d: components.d,
            primes: components.primes,
        })
    }

    /// Constructs an RSA key pair from individual components and validates it.
    pub fn from_components(
        n: BigUint,
        e: BigUint,
        d: BigUint,
        primes: Vec<BigUint>,
    ) -> Result<RsaPrivateKey> {
        let k = RsaPrivateKey {
            pubkey_components: RsaPublicKey { n, e },
            d,
            primes,
        };
        k.validate()?;
        Ok(k)
    }

    /// Get the public key from the private key, cloning `n` and `e`.
    ///
    /// Generally this is not needed since `RsaPrivateKey` implements the `PublicKeyParts` trait,
    /// but it can occasionally be useful to discard the private information entirely.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.pubkey_components.clone()
    }

    /// Performs basic sanity checks on the key.
    /// Returns `Ok(())` if everything is good, otherwise an appropriate error.
    pub fn validate(&self) -> Result<()> {
        check_public(self)?;

        let totient = compute_euler_totient(&self.primes)?;

        // Check that Πprimes == n.
        if compute_modulus(&self.primes) != self.pubkey_components.n {
            return Err(Error::InvalidModulus);
        }

        if self.e() >= &totient {
            return Err(Error::InvalidExponent);
        }

        // Check that de ≡ 1 mod φ(n), which also bounds d away from zero.
        if self.d.is_zero() || self.d >= totient {
            return Err(Error::InvalidExponent);
        }
        if !((&self.d * self.e()) % &totient).is_one() {
            return Err(Error::InvalidExponent);
        }

        Ok(())
    }

    /// Decrypt a ciphertext into UTF-8 text. See [`textbook::decrypt`].
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<String> {
        textbook::decrypt(self, ciphertext)
    }

    /// Decrypt a ciphertext into raw bytes. See [`textbook::decrypt_bytes`].
    pub fn decrypt_bytes(&self, ciphertext: &BigUint) -> Result<Vec<u8>> {
        textbook::decrypt_bytes(self, ciphertext)
    }
}

/// A matching pair of public and private keys sharing one modulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public_key: RsaPublicKey,
    private_key: RsaPrivateKey,
}

impl KeyPair {
    /// Generate a new key pair of the given bit size using the passed in `rng`.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<Self> {
        RsaPrivateKey::new(rng, bit_size).map(Self::from)
    }

    /// The public half.
    pub fn public_key(&self) -> &RsaPublicKey {
        &self.public_key
    }

    /// The private half.
    pub fn private_key(&self) -> &RsaPrivateKey {
        &self.private_key
    }

    /// Splits the pair into `(public, private)`.
    pub fn into_parts(self) -> (RsaPublicKey, RsaPrivateKey) {
        (self.public_key, self.private_key)
    }
}

impl From<RsaPrivateKey> for KeyPair {
    fn from(private_key: RsaPrivateKey) -> Self {
        Self {
            public_key: private_key.to_public_key(),
            private_key,
        }
    }
}

/// Generate a key pair of `bit_size` bits.
///
/// Both primes have `bit_size / 2` bits. The public exponent is 65537 when
/// it is valid for the generated totient, and a random coprime value otherwise.
pub fn generate_key_pair<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<KeyPair> {
    KeyPair::generate(rng, bit_size)
}

/// Generate a key pair of [`DEFAULT_KEY_BITS`] bits.
pub fn generate_default_key_pair<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<KeyPair> {
    KeyPair::generate(rng, DEFAULT_KEY_BITS)
}

/// Check that the public key is well formed.
#[inline]
pub(crate) fn check_public(public_key: &impl PublicKeyParts) -> Result<()> {
    if public_key.n() <= &BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    if public_key.e() <= &BigUint::one() || public_key.e() >= public_key.n() {
        return Err(Error::InvalidExponent);
    }

    Ok(())
}
