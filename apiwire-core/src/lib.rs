//! Hex wire-format codec for the JSON-RPC API gateway
//!
//! Every binary value crossing the gateway's JSON-RPC boundary travels as a
//! `0x`-prefixed hexadecimal JSON string. This crate owns that encoding:
//!
//! - **Codec**: [`HexCodec`], the prefix-aware byte codec everything builds on
//! - **Quantities**: [`Big`], [`Uint64`] and [`Uint<BITS>`](Uint), minimal-digit
//!   non-negative integers
//! - **Identifiers**: [`Hash`] (32 bytes) and [`Address`] (20 bytes), always
//!   encoded at full width
//! - **Data**: [`Bytes`], variable-length payloads with leading zeros preserved
//! - **Error handling**: codec errors, decode context and JSON-RPC error objects
//! - **Logging**: an optional `tracing` subscriber setup
//!
//! # Overview
//!
//! Two encodings coexist on the wire:
//!
//! | Kind     | Zero    | Leading zeros | Empty input      |
//! |----------|---------|---------------|------------------|
//! | QUANTITY | `"0x0"` | rejected      | `""` means zero  |
//! | DATA     | `"0x"`  | preserved     | `""` is an error |
//!
//! `Bytes` additionally accepts `""` as the empty payload. All decoding is
//! case-insensitive and all encoding is lowercase.
//!
//! # Architecture
//!
//! Each wire type implements [`HexWire`], and its serde impls delegate to
//! that trait. Deserialization accepts JSON strings only. The [`params`]
//! module decodes individual request parameters and names the offending field
//! in any error, which converts into a JSON-RPC "Invalid params" response.
//!
//! # Example
//!
//! ```rust
//! use apiwire_core::{Big, Bytes, Hash, Uint64};
//! use num_bigint::BigUint;
//!
//! let gas: Uint64 = serde_json::from_str(r#""0x5208""#).unwrap();
//! assert_eq!(gas.get(), 21000);
//!
//! let value = Big::from(BigUint::from(10u32).pow(18));
//! assert_eq!(value.to_string(), "0xde0b6b3a7640000");
//!
//! let data: Bytes = serde_json::from_str(r#""0x0001""#).unwrap();
//! assert_eq!(data.as_slice(), &[0x00, 0x01]);
//!
//! let hash = Hash::from_bytes(&[0xab]);
//! assert_eq!(hash.to_string().len(), 66);
//! ```

pub mod address;
pub mod bytes;
pub mod codec;
pub mod error;
pub mod hash;
pub mod observability;
pub mod params;
pub mod quantity;
pub mod wire;

pub use address::{Address, ADDRESS_LENGTH};
pub use bytes::Bytes;
pub use codec::{HexCodec, PREFIX};
pub use error::{Error, ErrorKind, HexError, JsonRpcErrorData, Result, TargetType};
pub use hash::{Hash, HASH_LENGTH};
pub use observability::{init_logging, LogConfig};
pub use quantity::{Big, Uint, Uint32, Uint64};
pub use wire::{from_json_value, to_json_value, HexWire};
