//! Request arguments

use apiwire_core::{Address, Big, Bytes, Uint64};
use serde::{Deserialize, Serialize};

/// Arguments for submitting a new transaction to the pool
///
/// The payload may arrive as `data` or as `input`. Both names are accepted;
/// `input` is the newer one and wins when both are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTxArgs {
    pub from: Address,
    pub to: Option<Address>,
    pub gas: Option<Uint64>,
    pub gas_price: Option<Big>,
    pub value: Option<Big>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Uint64>,
    pub data: Option<Bytes>,
    pub input: Option<Bytes>,
}

impl SendTxArgs {
    /// The transaction payload, preferring `input` over `data`
    pub fn payload(&self) -> Option<&Bytes> {
        self.input.as_ref().or(self.data.as_ref())
    }

    /// Takes the payload, defaulting to empty when neither field is set
    pub fn into_payload(self) -> Bytes {
        self.input.or(self.data).unwrap_or_default()
    }
}

/// A single string argument, used by the echo endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringArgs {
    pub from: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_prefers_input() {
        let args = SendTxArgs {
            data: Some(Bytes(vec![0x01])),
            input: Some(Bytes(vec![0x02])),
            ..Default::default()
        };
        assert_eq!(args.payload(), Some(&Bytes(vec![0x02])));
        assert_eq!(args.into_payload(), Bytes(vec![0x02]));
    }

    #[test]
    fn test_payload_falls_back_to_data() {
        let args = SendTxArgs {
            data: Some(Bytes(vec![0x01])),
            ..Default::default()
        };
        assert_eq!(args.payload(), Some(&Bytes(vec![0x01])));
    }

    #[test]
    fn test_payload_absent() {
        let args = SendTxArgs::default();
        assert_eq!(args.payload(), None);
        assert!(args.into_payload().is_empty());
    }

    #[test]
    fn test_nonce_omitted_when_absent() {
        let value = serde_json::to_value(SendTxArgs::default()).unwrap();
        assert!(value.get("nonce").is_none());
        assert_eq!(value["to"], json!(null));
    }

    #[test]
    fn test_string_args() {
        let args: StringArgs = serde_json::from_value(json!({ "from": "hello" })).unwrap();
        assert_eq!(args.from, "hello");
    }
}
