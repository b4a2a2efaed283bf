//! QUANTITY wire types
//!
//! Non-negative integers encoded as `0x` followed by the minimal lowercase hex
//! digits, with `0x0` for zero. Three widths are provided:
//!
//! - [`Big`]: arbitrary precision on encode, at most 256 bits on decode
//! - [`Uint64`]: 64 bits
//! - [`Uint<BITS>`](Uint): 32 or 64 bits, chosen explicitly by the caller
//!
//! Decoding accepts the empty string as zero. This shortcut is part of the
//! wire format existing clients rely on.
//!
//! # Examples
//!
//! ```rust
//! use apiwire_core::{Big, HexError, Uint, Uint64};
//!
//! assert_eq!(Uint64(436).to_string(), "0x1b4");
//! assert_eq!("0x1b4".parse::<Uint64>().unwrap(), Uint64(436));
//! assert_eq!("".parse::<Big>().unwrap(), Big::zero());
//!
//! let wide = "0xffffffffffffffff";
//! assert!(wide.parse::<Uint<64>>().is_ok());
//! assert_eq!(wide.parse::<Uint<32>>(), Err(HexError::UintRange { bits: 32 }));
//! ```

use crate::codec::HexCodec;
use crate::error::{Error, HexError, TargetType};
use crate::wire::{impl_hex_serde, HexWire};
use num_bigint::{BigInt, BigUint};
use std::fmt;
use std::str::FromStr;

/// Arbitrary precision non-negative integer
///
/// Wraps a [`BigUint`], so negative values cannot be constructed. Conversion
/// from a signed [`BigInt`] is fallible. Values wider than 256 bits are
/// rejected by decode but encode without error.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Big(pub BigUint);

impl Big {
    /// Maximum number of digits accepted on decode (256 bits)
    pub const MAX_DIGITS: usize = 64;

    /// The value zero
    pub fn zero() -> Self {
        Self(BigUint::default())
    }

    /// Borrow the underlying integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Take the underlying integer
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Decode a QUANTITY string of at most 64 digits
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let codec = HexCodec::STANDARD;
        let Some(digits) = codec.quantity_digits(input, Self::MAX_DIGITS, HexError::Big256Range)?
        else {
            return Ok(Self::zero());
        };
        let mut value = BigUint::default();
        for nibble in codec.nibbles(digits) {
            value = value * 16u32 + u32::from(nibble?);
        }
        Ok(Self(value))
    }

    /// Encode with minimal digits
    pub fn to_hex(&self) -> String {
        HexCodec::STANDARD.encode_big(&self.0)
    }
}

impl HexWire for Big {
    const TARGET: TargetType = TargetType::Big;

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl_hex_serde!(Big);

impl fmt::Display for Big {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Big {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<BigUint> for Big {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Big {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<u128> for Big {
    fn from(value: u128) -> Self {
        Self(BigUint::from(value))
    }
}

impl From<Uint64> for Big {
    fn from(value: Uint64) -> Self {
        Self::from(value.0)
    }
}

impl TryFrom<BigInt> for Big {
    type Error = Error;

    /// Reject negative values at the boundary
    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        value.to_biguint().map(Self).ok_or(Error::NegativeQuantity)
    }
}

impl TryFrom<i64> for Big {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self::from)
            .map_err(|_| Error::NegativeQuantity)
    }
}

/// 64-bit QUANTITY
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint64(pub u64);

impl Uint64 {
    /// Maximum number of digits accepted on decode
    pub const MAX_DIGITS: usize = 16;

    /// The wrapped value
    pub fn get(self) -> u64 {
        self.0
    }

    /// Decode a QUANTITY string of at most 16 digits
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        let codec = HexCodec::STANDARD;
        let Some(digits) = codec.quantity_digits(input, Self::MAX_DIGITS, HexError::Uint64Range)?
        else {
            return Ok(Self(0));
        };
        let mut value = 0u64;
        for nibble in codec.nibbles(digits) {
            // 16 digits cannot overflow
            value = (value << 4) | u64::from(nibble?);
        }
        Ok(Self(value))
    }

    /// Encode with minimal digits
    pub fn to_hex(self) -> String {
        HexCodec::STANDARD.encode_u64(self.0)
    }
}

impl HexWire for Uint64 {
    const TARGET: TargetType = TargetType::Uint64;

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl_hex_serde!(Uint64);

impl fmt::Display for Uint64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Uint64 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<u64> for Uint64 {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Uint64> for u64 {
    fn from(value: Uint64) -> Self {
        value.0
    }
}

/// QUANTITY with an explicit bit width
///
/// `BITS` must be 32 or 64. Constructing, encoding or naming the target tag of
/// any other width fails to compile. The width is part of the type rather than
/// being derived from the build target, so `Uint<32>` behaves the same on every
/// platform.
///
/// ```rust
/// use apiwire_core::Uint;
///
/// let index = Uint::<32>::from(7u32);
/// assert_eq!(index.to_string(), "0x7");
/// assert!(Uint::<32>::try_from(u64::MAX).is_err());
/// ```
///
/// ```rust,compile_fail
/// use apiwire_core::Uint;
///
/// let _ = Uint::<16>::default().to_hex();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Uint<const BITS: u32>(u64);

/// 32-bit QUANTITY
pub type Uint32 = Uint<32>;

impl<const BITS: u32> Uint<BITS> {
    const WIDTH_CHECK: () = assert!(BITS == 32 || BITS == 64, "Uint width must be 32 or 64 bits");

    /// Largest representable value
    pub const MAX: u64 = {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        u64::MAX >> (64 - BITS)
    };

    /// Maximum number of digits accepted on decode
    pub const MAX_DIGITS: usize = (BITS / 4) as usize;

    /// Wrap `value`, failing if it does not fit in `BITS`
    pub fn new(value: u64) -> Result<Self, HexError> {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        if value > Self::MAX {
            return Err(HexError::UintRange { bits: BITS });
        }
        Ok(Self(value))
    }

    /// The wrapped value
    pub fn get(self) -> u64 {
        self.0
    }

    /// The configured width
    pub const fn bits() -> u32 {
        BITS
    }

    /// Decode as a `Uint64`, then apply the width check
    ///
    /// A `Uint64Range` failure is reported as `UintRange` so callers only see
    /// errors that mention the configured width.
    pub fn from_hex(input: &str) -> Result<Self, HexError> {
        match Uint64::from_hex(input) {
            Ok(value) => Self::new(value.0),
            Err(HexError::Uint64Range) => Err(HexError::UintRange { bits: BITS }),
            Err(err) => Err(err),
        }
    }

    /// Encode with minimal digits
    pub fn to_hex(self) -> String {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        HexCodec::STANDARD.encode_u64(self.0)
    }
}

impl<const BITS: u32> Default for Uint<BITS> {
    fn default() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        Self(0)
    }
}

impl<const BITS: u32> HexWire for Uint<BITS> {
    const TARGET: TargetType = {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        TargetType::Uint { bits: BITS }
    };

    fn decode_hex(input: &str) -> Result<Self, HexError> {
        Self::from_hex(input)
    }

    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl<const BITS: u32> serde::Serialize for Uint<BITS> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const BITS: u32> serde::Deserialize<'de> for Uint<BITS> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(crate::wire::HexVisitor::<Self>::new())
    }
}

impl<const BITS: u32> fmt::Display for Uint<BITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const BITS: u32> FromStr for Uint<BITS> {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl<const BITS: u32> From<u32> for Uint<BITS> {
    fn from(value: u32) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        Self(u64::from(value))
    }
}

impl<const BITS: u32> TryFrom<u64> for Uint<BITS> {
    type Error = HexError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<const BITS: u32> TryFrom<usize> for Uint<BITS> {
    type Error = HexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map_err(|_| HexError::UintRange { bits: BITS })
            .and_then(Self::new)
    }
}

impl From<Uint<64>> for Uint64 {
    fn from(value: Uint<64>) -> Self {
        Self(value.0)
    }
}

impl From<Uint64> for Uint<64> {
    fn from(value: Uint64) -> Self {
        Self(value.0)
    }
}
