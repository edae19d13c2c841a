//! Error types.

/// Alias for [`core::result::Result`] with the `textbook_rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The element has no multiplicative inverse for the given modulus.
    NoInverse,

    /// Decrypted bytes are not valid UTF-8.
    Decode,

    /// Message integer does not fit below the modulus.
    MessageTooLong,

    /// Decryption error.
    Decryption,

    /// Requested prime is shorter than 2 bits.
    PrimeSizeTooSmall,

    /// Requested key is shorter than 4 bits.
    KeySizeTooSmall,

    /// Invalid prime value.
    InvalidPrime,

    /// Invalid modulus.
    InvalidModulus,

    /// Invalid exponent.
    InvalidExponent,

    /// Internal error.
    Internal,
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::NoInverse => write!(f, "modular inverse does not exist"),
            Error::Decode => write!(f, "decrypted message is not valid UTF-8"),
            Error::MessageTooLong => write!(f, "message too long"),
            Error::Decryption => write!(f, "decryption error"),
            Error::PrimeSizeTooSmall => write!(f, "prime size must be at least 2 bits"),
            Error::KeySizeTooSmall => write!(f, "key size must be at least 4 bits"),
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::Internal => write!(f, "internal error"),
        }
    }
}
