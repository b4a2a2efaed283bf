//! apiwire - hex wire format for the JSON-RPC API gateway
//!
//! This is the convenience crate that re-exports the apiwire sub-crates. Use
//! it if you want a single dependency that provides both the codec and the
//! RPC result types.
//!
//! # Architecture
//!
//! apiwire is organized into two crates:
//!
//! - **apiwire-core**: Hex codec, wire types, error handling, parameter
//!   decoding, logging setup
//! - **apiwire-types**: Block, transaction, receipt and argument structs built
//!   from the wire types
//!
//! # Quick Start - Decoding a request
//!
//! ```rust
//! use apiwire::params::decode_field;
//! use apiwire::{JsonRpcErrorData, Uint64};
//! use serde_json::json;
//!
//! let params = json!({ "gas": "0x5208", "nonce": "0x01" });
//!
//! let gas: Uint64 = decode_field(&params, "gas").unwrap();
//! assert_eq!(gas.get(), 21000);
//!
//! let err = decode_field::<Uint64>(&params, "nonce").unwrap_err();
//! let response = JsonRpcErrorData::from(err);
//! assert_eq!(response.code, -32602);
//! assert_eq!(response.data.unwrap()["field"], "nonce");
//! ```
//!
//! # Quick Start - Rendering a result
//!
//! ```rust
//! use apiwire::types::BlockData;
//! use apiwire::Uint64;
//!
//! let block = BlockData {
//!     number: Uint64(436),
//!     ..Default::default()
//! };
//!
//! let json = serde_json::to_value(&block).unwrap();
//! assert_eq!(json["number"], "0x1b4");
//! ```

// Re-export all public APIs from sub-crates
pub use apiwire_core as core;
pub use apiwire_types as types;

// Convenience re-exports of the most commonly used items
pub use apiwire_core::{
    init_logging, params, Address, Big, Bytes, Error, Hash, HexCodec, HexError, HexWire,
    JsonRpcErrorData, LogConfig, Result, TargetType, Uint, Uint32, Uint64,
};
