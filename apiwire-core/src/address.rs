//! 20-byte account identifier
//!
//! Follows the same rules as [`Hash`](crate::Hash) at a width of 20 bytes:
//! encoded as `0x` + 40 digits, decoded leniently with left padding or
//! cropping.

use crate::codec::HexCodec;
use crate::error::{HexError, TargetType};
use crate::hash::right_aligned;
use crate::wire::{impl_hex_serde, HexWire};
use std::fmt;
use std::str::FromStr;

/// Length of an address in bytes
pub const ADDRESS_LENGTH: usize = 20;

/// A 20-byte account address
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    /// The zero address
    pub const ZERO: Self = Self([0u8; ADDRESS_LENGTH]);

    /// Creates an address from a 20-byte array
    pub const fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Creates an address from a slice, cropping or padding on the left
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(right_aligned(bytes))
    }

    /// Parses a literal that is known to be valid, panicking otherwise
    pub fn from_trusted_literal(literal: &str) -> Self {
        Self::from_bytes(&HexCodec::STANDARD.decode_trusted(literal))
    }

    /// Replaces the contents with `bytes`, cropping or padding on the left
    pub fn set_bytes(&mut self, bytes: &[u8]) {
        self.0 = right_aligned(bytes);
    }

    /// Decodes a prefixed hex string
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        HexCodec::STANDARD
            .decode(input)
            .map(|bytes| Self::from_bytes(&bytes))
    }

    /// Encodes as `0x` followed by exactly 40 digits
    pub fn to_hex(&self) -> String {
        HexCodec::STANDARD.encode(self.0)
    }

    /// The address as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl HexWire for Address {
    const TARGET: TargetType = TargetType::Address;

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl_hex_serde!(Address);

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Address {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; ADDRESS_LENGTH]> for Address {
    fn from(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
