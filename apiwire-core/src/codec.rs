//! Prefixed hex codec
//!
//! [`HexCodec`] is the substrate every wire type is built on. It translates
//! between byte slices and `0x`-prefixed hex strings and implements the
//! structural checks shared by all of them: prefix detection, parity and
//! character validation. It also hosts the QUANTITY digit grammar used by
//! [`Big`](crate::Big), [`Uint64`](crate::Uint64) and [`Uint`](crate::Uint).
//!
//! # Configuration
//!
//! A codec is an immutable value holding its prefix. The serde hooks of the
//! wire types always use [`HexCodec::STANDARD`]; there is no mutable global.
//!
//! # Examples
//!
//! ```rust
//! use apiwire_core::{HexCodec, HexError};
//!
//! let codec = HexCodec::STANDARD;
//! assert_eq!(codec.encode([0u8, 0, 1, 2]), "0x00000102");
//! assert_eq!(codec.decode("0X0102").unwrap(), vec![1, 2]);
//! assert_eq!(codec.decode("0x0"), Err(HexError::OddLength));
//! ```

use crate::error::HexError;
use num_bigint::BigUint;
use std::fmt;

/// The prefix emitted on every encoded value
pub const PREFIX: &str = "0x";

/// Encoder/decoder for prefixed hex strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexCodec {
    prefix: &'static str,
}

impl Default for HexCodec {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl HexCodec {
    /// The `0x` codec used by every wire type
    pub const STANDARD: HexCodec = HexCodec::new(PREFIX);

    /// Create a codec with a custom prefix
    ///
    /// The prefix is matched case-insensitively on decode and emitted verbatim
    /// on encode.
    pub const fn new(prefix: &'static str) -> Self {
        Self { prefix }
    }

    /// The prefix this codec emits
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Check whether `input` starts with the prefix, ignoring ASCII case
    ///
    /// This is a structural check only; the rest of the input is not looked at.
    pub fn has_prefix(&self, input: &str) -> bool {
        input
            .get(..self.prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(self.prefix))
    }

    /// Return the digits after the prefix, or `None` if the prefix is absent
    pub fn strip_prefix<'a>(&self, input: &'a str) -> Option<&'a str> {
        if self.has_prefix(input) {
            input.get(self.prefix.len()..)
        } else {
            None
        }
    }

    /// Length of the string produced by [`encode`](Self::encode) for `n` bytes
    pub fn encoded_len(&self, n: usize) -> usize {
        self.prefix.len() + n * 2
    }

    /// Number of bytes an encoded string of length `n` decodes to
    ///
    /// Lengths that do not exceed the prefix decode to zero bytes.
    pub fn decoded_len(&self, n: usize) -> usize {
        n.saturating_sub(self.prefix.len()) / 2
    }

    /// Encode bytes as the prefix followed by two lowercase digits per byte
    ///
    /// Always succeeds; an empty slice encodes to the bare prefix.
    pub fn encode(&self, bytes: impl AsRef<[u8]>) -> String {
        let bytes = bytes.as_ref();
        let mut out = String::with_capacity(self.encoded_len(bytes.len()));
        out.push_str(self.prefix);
        out.push_str(&hex::encode(bytes));
        out
    }

    /// Decode a prefixed hex string into bytes
    ///
    /// # Errors
    ///
    /// - `EmptyData` for the empty string
    /// - `MissingPrefix` if the input does not start with the prefix
    /// - `OddLength` if the digit count is odd
    /// - `Syntax` for the first character that is not a hex digit
    pub fn decode(&self, input: &str) -> Result<Vec<u8>, HexError> {
        if input.is_empty() {
            return Err(HexError::EmptyData);
        }
        let digits = self.strip_prefix(input).ok_or(HexError::MissingPrefix)?;
        hex::decode(digits).map_err(|err| self.explain(digits, err))
    }

    /// Decode a literal that is known to be valid, panicking otherwise
    ///
    /// Only for compile-time constants and startup configuration. Request
    /// input must go through [`decode`](Self::decode).
    pub fn decode_trusted(&self, literal: &str) -> Vec<u8> {
        match self.decode(literal) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!(literal, error = %err, "invalid trusted hex literal");
                panic!("invalid trusted hex literal {:?}: {}", literal, err)
            }
        }
    }

    /// Render a 64-bit quantity with minimal digits
    pub fn encode_u64(&self, value: u64) -> String {
        format!("{}{:x}", self.prefix, value)
    }

    /// Render an arbitrary precision quantity with minimal digits
    pub fn encode_big(&self, value: &BigUint) -> String {
        format!("{}{:x}", self.prefix, value)
    }

    /// Validate the QUANTITY grammar and return the digits to parse
    ///
    /// Returns `Ok(None)` for the empty string, which every quantity type
    /// treats as zero. `range` is the error reported when the digit count
    /// exceeds `max_digits`. Individual digits are not checked here; use
    /// [`nibbles`](Self::nibbles) for that.
    pub fn quantity_digits<'a>(
        &self,
        input: &'a str,
        max_digits: usize,
        range: HexError,
    ) -> Result<Option<&'a str>, HexError> {
        if input.is_empty() {
            return Ok(None);
        }
        let digits = self.strip_prefix(input).ok_or(HexError::MissingPrefix)?;
        if digits.is_empty() {
            return Err(HexError::EmptyNumber);
        }
        if digits.len() > 1 && digits.starts_with('0') {
            return Err(HexError::LeadingZero);
        }
        if digits.len() > max_digits {
            return Err(range);
        }
        Ok(Some(digits))
    }

    /// Iterate over the values of `digits`, most significant first
    ///
    /// The first non-hex character yields a `Syntax` error positioned
    /// relative to the full input (prefix included).
    pub fn nibbles<'a>(
        &self,
        digits: &'a str,
    ) -> impl Iterator<Item = Result<u8, HexError>> + 'a {
        let offset = self.prefix.len();
        digits.char_indices().map(move |(index, character)| {
            decode_nibble(character).ok_or(HexError::Syntax {
                character,
                index: index + offset,
            })
        })
    }

    /// `hex` reports the offending byte; map it back to the full character
    fn explain(&self, digits: &str, err: hex::FromHexError) -> HexError {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => HexError::Syntax {
                character: digits
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(c),
                index: index + self.prefix.len(),
            },
            hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
                HexError::OddLength
            }
        }
    }
}

impl fmt::Display for HexCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hex with prefix {}", self.prefix)
    }
}

fn decode_nibble(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}
