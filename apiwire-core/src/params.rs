//! Request parameter decoding
//!
//! RPC handlers receive their parameters as a `serde_json::Value`, either an
//! object keyed by name or a positional array. The helpers here pull a single
//! wire value out of that structure and attach the parameter name to any
//! failure, so the gateway can answer with an "Invalid params" error that
//! points at the offending field.
//!
//! Each field is decoded independently. A failure in one field never touches
//! values already decoded from its siblings.
//!
//! # Examples
//!
//! ```rust
//! use apiwire_core::params::{decode_field, decode_optional_field};
//! use apiwire_core::{Hash, Uint64};
//! use serde_json::json;
//!
//! let params = json!({ "nonce": "0x1b4", "blockHash": null });
//!
//! let nonce: Uint64 = decode_field(&params, "nonce").unwrap();
//! assert_eq!(nonce.get(), 436);
//!
//! let block: Option<Hash> = decode_optional_field(&params, "blockHash").unwrap();
//! assert!(block.is_none());
//! ```

use crate::error::{Error, Result};
use crate::wire::{self, HexWire};
use serde_json::Value;

pub use crate::wire::{from_json_value, to_json_value};

/// Decode a required named parameter
///
/// # Errors
///
/// - `Error::InvalidParams` if `params` is not an object or the field is absent
/// - `Error::Field` wrapping the decode failure otherwise
pub fn decode_field<T: HexWire>(params: &Value, field: &str) -> Result<T> {
    match lookup(params, field)? {
        Some(value) if !value.is_null() => decode_value(value, field),
        _ => Err(Error::InvalidParams(format!("missing field {:?}", field))),
    }
}

/// Decode an optional named parameter
///
/// An absent field and an explicit `null` both yield `None`.
pub fn decode_optional_field<T: HexWire>(params: &Value, field: &str) -> Result<Option<T>> {
    match lookup(params, field)? {
        Some(value) if !value.is_null() => decode_value(value, field).map(Some),
        _ => Ok(None),
    }
}

/// Decode a required positional parameter
///
/// Failures are reported with the index as the field name.
pub fn decode_positional<T: HexWire>(params: &Value, index: usize) -> Result<T> {
    let items = params
        .as_array()
        .ok_or_else(|| Error::InvalidParams("expected positional parameters".to_string()))?;

    match items.get(index) {
        Some(value) if !value.is_null() => decode_value(value, &index.to_string()),
        _ => Err(Error::InvalidParams(format!(
            "missing parameter at position {}",
            index
        ))),
    }
}

fn lookup<'a>(params: &'a Value, field: &str) -> Result<Option<&'a Value>> {
    params
        .as_object()
        .map(|object| object.get(field))
        .ok_or_else(|| Error::InvalidParams("expected named parameters".to_string()))
}

fn decode_value<T: HexWire>(value: &Value, field: &str) -> Result<T> {
    wire::from_json_value(value).map_err(|err| {
        tracing::debug!(field, target = %T::TARGET, error = %err, "rejected parameter");
        err.in_field(field)
    })
}
