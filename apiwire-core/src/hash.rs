//! 32-byte identifier
//!
//! [`Hash`] carries block hashes, transaction hashes and state roots. It is
//! always encoded at full width (`0x` + 64 digits) with leading zero bytes
//! preserved. Decoding is lenient about length: shorter inputs are
//! right-aligned and zero-padded, longer inputs keep only their rightmost 32
//! bytes.

use crate::codec::HexCodec;
use crate::error::{HexError, TargetType};
use crate::wire::{impl_hex_serde, HexWire};
use num_bigint::BigUint;
use std::fmt;
use std::str::FromStr;

/// Length of a hash in bytes
pub const HASH_LENGTH: usize = 32;

/// Copy `bytes` into the low-order end of an `N`-byte array
///
/// Inputs longer than `N` are cropped from the left.
pub(crate) fn right_aligned<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let bytes = &bytes[bytes.len().saturating_sub(N)..];
    let mut out = [0u8; N];
    out[N - bytes.len()..].copy_from_slice(bytes);
    out
}

/// A 32-byte big-endian identifier
///
/// # Example
///
/// ```rust
/// use apiwire_core::Hash;
///
/// let hash = Hash::from_bytes(&[0x01, 0x02]);
/// assert_eq!(
///     hash.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000000102"
/// );
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash([u8; HASH_LENGTH]);

impl Hash {
    /// The all-zero hash
    pub const ZERO: Self = Self([0u8; HASH_LENGTH]);

    /// Creates a hash from a 32-byte array
    pub const fn new(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates a hash from a slice of any length, see [`set_bytes`](Self::set_bytes)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(right_aligned(bytes))
    }

    /// Creates a hash holding the big-endian bytes of `value`
    ///
    /// Values wider than 256 bits are cropped from the left.
    pub fn from_big(value: &BigUint) -> Self {
        Self::from_bytes(&value.to_bytes_be())
    }

    /// Parses a literal that is known to be valid, panicking otherwise
    ///
    /// Only for constants; request input goes through [`from_hex`](Self::from_hex).
    pub fn from_trusted_literal(literal: &str) -> Self {
        Self::from_bytes(&HexCodec::STANDARD.decode_trusted(literal))
    }

    /// Replaces the contents with `bytes`
    ///
    /// More than 32 bytes: only the rightmost 32 are kept. Fewer: the bytes
    /// occupy the low-order positions and the rest is zeroed.
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.0 = right_aligned(bytes);
    }

    /// Decodes a prefixed hex string
    ///
    /// The even-length rule applies. Fewer than 32 bytes are zero-padded.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        HexCodec::STANDARD
            .decode(input)
            .map(|bytes| Self::from_bytes(&bytes))
    }

    /// Encodes as `0x` followed by exactly 64 digits
    pub fn to_hex(&self) -> String {
        HexCodec::STANDARD.encode(self.0)
    }

    /// The hash as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The hash as a fixed-size array
    pub const fn as_fixed_bytes(&self) -> &[u8; HASH_LENGTH] {
        &self.0
    }

    /// Interprets the hash as a big-endian integer
    pub fn to_big(&self) -> BigUint {
        BigUint::from_bytes_be(&self.0)
    }

    /// Checks for the all-zero hash
    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }

    /// Shortened form for log lines: first and last three bytes
    pub fn terminal_string(&self) -> String {
        format!(
            "{}…{}",
            hex::encode(&self.0[..3]),
            hex::encode(&self.0[HASH_LENGTH - 3..])
        )
    }
}

impl HexWire for Hash {
    const TARGET: TargetType = TargetType::Hash;

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl_hex_serde!(Hash);

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Hash {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; HASH_LENGTH]> for Hash {
    fn from(bytes: [u8; HASH_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl From<Hash> for [u8; HASH_LENGTH] {
    fn from(hash: Hash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
