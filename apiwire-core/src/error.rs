//! Error types for apiwire
//!
//! This module provides the error hierarchy used by the hex wire codec and by
//! the RPC-facing helpers built on top of it. It defines three layers:
//!
//! - **HexError**: The most specific failure, returned by the codec itself
//! - **Error**: Application-level errors that attach the target wire type
//!   (and, for request parameters, the field name) to a `HexError`
//! - **JsonRpcErrorData**: Wire-format error objects as defined by JSON-RPC 2.0
//!
//! # Error Kinds
//!
//! Codec failures fall into three groups, see [`ErrorKind`]:
//! - **Structural**: empty data, missing prefix, odd length, invalid character
//! - **Quantity**: `"0x"` with no digits, leading zero digits
//! - **Range**: the value does not fit the declared bit width
//!
//! None of them are fatal. Parsing is deterministic, so a failed decode is
//! always caused by malformed input and is never worth retrying.
//!
//! # Examples
//!
//! ```rust
//! use apiwire_core::{Error, HexError, JsonRpcErrorData, TargetType};
//!
//! let error = Error::Decode {
//!     target: TargetType::Uint64,
//!     source: HexError::LeadingZero,
//! };
//!
//! let json_error = JsonRpcErrorData::from(error);
//! assert_eq!(json_error.code, -32602);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for apiwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Low-level codec error
///
/// Returned by [`HexCodec`](crate::HexCodec) and by the `from_hex` constructors
/// of every wire type. The variants carry no allocation so the error is `Copy`
/// and cheap to compare in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexError {
    /// The input was the empty string where data was required
    #[error("empty hex string")]
    EmptyData,

    /// The input does not start with `0x` or `0X`
    #[error("hex string without 0x prefix")]
    MissingPrefix,

    /// The digits after the prefix do not form whole bytes
    #[error("hex string of odd length")]
    OddLength,

    /// A character that is not a hex digit was found
    #[error("invalid hex character {character:?} at position {index}")]
    Syntax {
        /// The offending character
        character: char,
        /// Byte offset of the character in the original input, prefix included
        index: usize,
    },

    /// The input was exactly the prefix, with no digits
    #[error("hex string \"0x\"")]
    EmptyNumber,

    /// A quantity had more than one digit and started with `0`
    #[error("hex number with leading zero digits")]
    LeadingZero,

    /// A `Big` quantity had more than 64 digits
    #[error("hex number > 256 bits")]
    Big256Range,

    /// A `Uint64` quantity had more than 16 digits
    #[error("hex number > 64 bits")]
    Uint64Range,

    /// A `Uint` quantity does not fit its configured width
    #[error("hex number > {bits} bits")]
    UintRange {
        /// The configured width of the target type
        bits: u32,
    },
}

/// Coarse classification of a [`HexError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Prefix, parity or character problems
    Structural,
    /// Violations of the QUANTITY grammar
    Quantity,
    /// Value exceeds the type's bit width
    Range,
}

impl HexError {
    /// Returns the group this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            HexError::EmptyData
            | HexError::MissingPrefix
            | HexError::OddLength
            | HexError::Syntax { .. } => ErrorKind::Structural,
            HexError::EmptyNumber | HexError::LeadingZero => ErrorKind::Quantity,
            HexError::Big256Range | HexError::Uint64Range | HexError::UintRange { .. } => {
                ErrorKind::Range
            }
        }
    }
}

/// The wire type a value was being decoded into
///
/// Attached to decode errors so callers can report which type rejected the
/// input without any runtime type introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    /// Arbitrary precision quantity, decoded up to 256 bits
    Big,
    /// 64-bit quantity
    Uint64,
    /// Quantity with an explicit width
    Uint {
        /// Width in bits (32 or 64)
        bits: u32,
    },
    /// 32-byte identifier
    Hash,
    /// 20-byte account identifier
    Address,
    /// Variable-length payload
    Bytes,
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Big => f.write_str("Big"),
            TargetType::Uint64 => f.write_str("Uint64"),
            TargetType::Uint { bits } => write!(f, "Uint<{}>", bits),
            TargetType::Hash => f.write_str("Hash"),
            TargetType::Address => f.write_str("Address"),
            TargetType::Bytes => f.write_str("Bytes"),
        }
    }
}

/// Application-level error type for apiwire operations
///
/// Wraps codec failures with the context needed by the RPC layer: which wire
/// type was targeted and, for request parameters, which field was being
/// parsed. Every variant can be converted into a [`JsonRpcErrorData`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A JSON string could not be decoded into the target type
    #[error("cannot decode {target}: {source}")]
    Decode {
        /// The type being decoded
        target: TargetType,
        /// The underlying codec error
        #[source]
        source: HexError,
    },

    /// A JSON value other than a string was supplied
    #[error("cannot decode non-string JSON value into {target}")]
    NonString {
        /// The type being decoded
        target: TargetType,
    },

    /// A named request parameter failed to decode
    ///
    /// The failure only concerns this field; fields decoded before it are
    /// unaffected.
    #[error("invalid field {field:?}: {source}")]
    Field {
        /// Name (or positional index) of the offending parameter
        field: String,
        /// The decode failure
        #[source]
        source: Box<Error>,
    },

    /// Request parameters have the wrong overall shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A signed integer below zero was offered as a quantity
    #[error("negative quantities cannot be encoded")]
    NegativeQuantity,

    /// Serialization or deserialization error from serde
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns the target type for decode failures
    pub fn target(&self) -> Option<TargetType> {
        match self {
            Error::Decode { target, .. } | Error::NonString { target } => Some(*target),
            Error::Field { source, .. } => source.target(),
            _ => None,
        }
    }

    /// Returns the codec error at the bottom of the chain, if any
    pub fn hex_error(&self) -> Option<HexError> {
        match self {
            Error::Decode { source, .. } => Some(*source),
            Error::Field { source, .. } => source.hex_error(),
            _ => None,
        }
    }

    /// Returns the parameter name for field failures
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Field { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Wraps this error as a failure of the named parameter
    pub fn in_field(self, field: impl Into<String>) -> Self {
        Error::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// JSON-RPC 2.0 error object
///
/// This structure represents the exact wire format for JSON-RPC errors. The
/// gateway only ever produces two codes from this crate:
/// - `-32602`: Invalid params (every decode failure)
/// - `-32603`: Internal error (encode-side failures)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcErrorData {
    /// Numeric error code indicating the error type
    pub code: i32,

    /// Human-readable error message
    pub message: String,

    /// Optional additional error information
    ///
    /// For parameter failures this holds `field`, `type` and `reason`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl JsonRpcErrorData {
    /// Code for "Invalid params"
    pub const INVALID_PARAMS: i32 = -32602;

    /// Code for "Internal error"
    pub const INTERNAL_ERROR: i32 = -32603;

    /// Create a new JSON-RPC error with code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new JSON-RPC error with additional data
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an invalid params error (-32602)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use apiwire_core::JsonRpcErrorData;
    ///
    /// let error = JsonRpcErrorData::invalid_params("missing field \"from\"");
    /// assert_eq!(error.code, -32602);
    /// ```
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        Self::new(Self::INVALID_PARAMS, msg)
    }

    /// Create an internal error (-32603)
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::new(Self::INTERNAL_ERROR, msg)
    }
}

impl fmt::Display for JsonRpcErrorData {
    /// Formats as "[code] message"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for JsonRpcErrorData {}

impl From<Error> for JsonRpcErrorData {
    /// Render an apiwire error as the response the gateway sends back
    ///
    /// Decode failures become "Invalid params" naming the target type (and the
    /// field when known). Everything else is an internal error.
    fn from(err: Error) -> Self {
        let message = err.to_string();
        match &err {
            Error::Field { field, source } => {
                let mut data = serde_json::json!({
                    "field": field,
                    "reason": source.to_string(),
                });
                if let Some(target) = source.target() {
                    data["type"] = serde_json::Value::String(target.to_string());
                }
                Self::with_data(Self::INVALID_PARAMS, message, data)
            }
            Error::Decode { target, .. } | Error::NonString { target } => Self::with_data(
                Self::INVALID_PARAMS,
                message,
                serde_json::json!({ "type": target.to_string() }),
            ),
            Error::InvalidParams(_) => Self::invalid_params(message),
            Error::NegativeQuantity | Error::Serialization(_) => Self::internal_error(message),
        }
    }
}
