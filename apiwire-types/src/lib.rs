//! JSON-RPC result and argument types for the API gateway
//!
//! Every binary field in these structs is one of the wire types from
//! [`apiwire_core`], so a derived `Serialize`/`Deserialize` is all it takes to
//! produce or accept the gateway's hex encoding. Field names follow the
//! camelCase convention of the Ethereum-style RPC surface.
//!
//! - [`BlockData`] and [`BlockTransaction`]: block query results
//! - [`RpcTransaction`]: a transaction with its inclusion context
//! - [`RpcReceipt`] and [`RpcLog`]: execution results
//! - [`SendTxArgs`] and [`StringArgs`]: request arguments
//! - [`NodeInfo`], [`ChannelInfo`] and [`ResultEcho`]: plain string results
//!
//! Optional fields are rendered as `null` when absent rather than omitted,
//! matching what existing clients of the gateway expect.
//!
//! # Example
//!
//! ```rust
//! use apiwire_types::SendTxArgs;
//!
//! let args: SendTxArgs = serde_json::from_str(r#"{
//!     "from": "0x1ed53d680b8890dae2a63f673a85ffde1fd5c7a2",
//!     "gas": "0x5208",
//!     "input": "0x6080"
//! }"#).unwrap();
//!
//! assert_eq!(args.gas.unwrap().get(), 21000);
//! assert_eq!(args.payload().unwrap().as_slice(), &[0x60, 0x80]);
//! ```

pub mod args;
pub mod block;
pub mod info;
pub mod receipt;
pub mod transaction;

pub use args::{SendTxArgs, StringArgs};
pub use block::{BlockData, BlockTransaction};
pub use info::{ChannelInfo, NodeInfo, ResultEcho};
pub use receipt::{RpcLog, RpcReceipt};
pub use transaction::RpcTransaction;
