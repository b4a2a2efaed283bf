//! DATA wire type
//!
//! Variable-length payloads such as transaction input. The encoding keeps every
//! byte, leading zeros included, so the digit count is always even. Both `""`
//! and `"0x"` decode to an empty payload.

use crate::codec::HexCodec;
use crate::error::{HexError, TargetType};
use crate::wire::{impl_hex_serde, HexWire};
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// A hex-encoded byte payload
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    /// Copies `data` into a new payload
    pub fn new(data: &[u8]) -> Self {
        Self(data.to_vec())
    }

    /// Decodes a DATA string
    ///
    /// `""` and `"0x"` are accepted aliases for the empty payload. Anything else
    /// must pass [`HexCodec::decode`].
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        if input.is_empty() || input == HexCodec::STANDARD.prefix() {
            return Ok(Self::default());
        }
        HexCodec::STANDARD.decode(input).map(Self)
    }

    /// Encodes every byte; the empty payload encodes to `"0x"`
    pub fn to_hex(&self) -> String {
        HexCodec::STANDARD.encode(&self.0)
    }

    /// Borrows the payload
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Takes the payload
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl HexWire for Bytes {
    const TARGET: TargetType = TargetType::Bytes;

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl_hex_serde!(Bytes);

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes({})", self.to_hex())
    }
}

impl fmt::Display for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Bytes {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Deref for Bytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for Bytes {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl<const N: usize> From<[u8; N]> for Bytes {
    fn from(data: [u8; N]) -> Self {
        Self(data.to_vec())
    }
}

impl From<Bytes> for Vec<u8> {
    fn from(bytes: Bytes) -> Self {
        bytes.0
    }
}
