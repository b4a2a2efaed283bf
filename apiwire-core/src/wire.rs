//! Common interface of the wire types and their serde plumbing
//!
//! Every wire type implements [`HexWire`]: a target tag plus an encode/decode
//! pair over unquoted strings. The serde implementations and the
//! `serde_json::Value` helpers are written once against this trait, so the
//! JSON behaviour is identical across types:
//!
//! - serialization always produces a JSON string
//! - deserialization accepts only JSON strings
//! - a failed decode names the target type in the error

use crate::error::{Error, HexError, Result, TargetType};
use serde::de::{self, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A value with a canonical hex representation on the wire
pub trait HexWire: Sized {
    /// Tag reported in decode errors
    const TARGET: TargetType;

    /// Parse the unquoted wire string
    fn decode_hex(input: &str) -> std::result::Result<Self, HexError>;

    /// Render the canonical wire string
    fn encode_hex(&self) -> String;
}

/// Decode a wire value out of a parsed JSON document
///
/// # Errors
///
/// - `Error::NonString` if `value` is not a JSON string
/// - `Error::Decode` if the string is not a valid encoding of `T`
pub fn from_json_value<T: HexWire>(value: &serde_json::Value) -> Result<T> {
    match value {
        serde_json::Value::String(s) => decode_str(s),
        _ => Err(Error::NonString { target: T::TARGET }),
    }
}

/// Encode a wire value as a JSON string value
pub fn to_json_value<T: HexWire>(value: &T) -> serde_json::Value {
    serde_json::Value::String(value.encode_hex())
}

/// Decode an unquoted string, tagging failures with the target type
pub fn decode_str<T: HexWire>(input: &str) -> Result<T> {
    T::decode_hex(input).map_err(|source| Error::Decode {
        target: T::TARGET,
        source,
    })
}

/// Visitor used by every wire type's `Deserialize` impl
pub(crate) struct HexVisitor<T>(PhantomData<T>);

impl<T> HexVisitor<T> {
    pub(crate) fn new() -> Self {
        Self(PhantomData)
    }
}

impl<'de, T: HexWire> Visitor<'de> for HexVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a hex string encoding {}", T::TARGET)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<T, E> {
        decode_str(v).map_err(E::custom)
    }
}

/// Implement `Serialize` and `Deserialize` through [`HexWire`]
macro_rules! impl_hex_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::wire::HexWire::encode_hex(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                deserializer.deserialize_str($crate::wire::HexVisitor::<$ty>::new())
            }
        }
    };
}

pub(crate) use impl_hex_serde;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Bytes, Uint64};
    use serde_json::json;

    #[test]
    fn test_from_json_value_string() {
        let value: Uint64 = from_json_value(&json!("0x1b4")).unwrap();
        assert_eq!(value, Uint64(0x1b4));
    }

    #[test]
    fn test_from_json_value_non_string() {
        let err = from_json_value::<Uint64>(&json!(436)).unwrap_err();
        assert_eq!(
            err,
            Error::NonString {
                target: TargetType::Uint64
            }
        );
    }

    #[test]
    fn test_from_json_value_bad_string() {
        let err = from_json_value::<Bytes>(&json!("0x123")).unwrap_err();
        assert_eq!(err.target(), Some(TargetType::Bytes));
        assert_eq!(err.hex_error(), Some(HexError::OddLength));
    }

    #[test]
    fn test_to_json_value() {
        assert_eq!(to_json_value(&Uint64(0)), json!("0x0"));
        assert_eq!(to_json_value(&Bytes::default()), json!("0x"));
    }

    #[test]
    fn test_serde_rejects_non_string() {
        let err = serde_json::from_str::<Uint64>("12").unwrap_err();
        assert!(err.to_string().contains("a hex string encoding Uint64"));
    }

    #[test]
    fn test_serde_error_names_target() {
        let err = serde_json::from_str::<Uint64>(r#""12""#).unwrap_err();
        assert!(err
            .to_string()
            .contains("cannot decode Uint64: hex string without 0x prefix"));
    }
}
