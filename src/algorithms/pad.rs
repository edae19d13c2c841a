//! Special handling for converting between messages and BigUint

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// Interprets `input` as one big-endian unsigned integer.
///
/// Leading zero bytes carry no value and are lost.
#[inline]
pub(crate) fn be_bytes_to_uint(input: &[u8]) -> BigUint {
    BigUint::from_bytes_be(input)
}

/// Converts `input` to its minimal big-endian form of `ceil(bits / 8)` bytes.
/// Zero encodes to the empty vector.
#[inline]
pub(crate) fn uint_to_minimal_be(input: &BigUint) -> Vec<u8> {
    if input.is_zero() {
        return Vec::new();
    }

    input.to_bytes_be()
}
