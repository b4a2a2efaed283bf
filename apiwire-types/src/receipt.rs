//! Transaction receipts and event logs

use apiwire_core::{Address, Big, Bytes, Hash, Uint32, Uint64};
use serde::{Deserialize, Serialize};

/// Execution result of a transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    pub block_hash: Hash,
    pub block_number: Option<Big>,
    pub transaction_hash: Option<Hash>,
    pub transaction_index: Uint32,
    pub from: Option<Address>,
    pub to: Option<Address>,
    /// Post-transaction state root, for receipts that carry one
    pub root: Option<Bytes>,
    /// `1` for success, `0` for failure
    pub status: Option<Uint64>,
    pub gas_used: Option<Uint64>,
    pub cumulative_gas_used: Option<Uint64>,
    pub logs_bloom: Bytes,
    #[serde(default)]
    pub logs: Vec<RpcLog>,
    /// Set when the transaction created a contract
    pub contract_address: Option<Address>,
}

impl RpcReceipt {
    /// Receipt status for successful execution
    pub const STATUS_SUCCESS: u64 = 1;

    /// Checks the status field, treating a missing status as failure
    pub fn succeeded(&self) -> bool {
        self.status.map(Uint64::get) == Some(Self::STATUS_SUCCESS)
    }
}

/// An event emitted during execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLog {
    /// Contract that emitted the event
    pub address: Address,
    /// Indexed topics
    pub topics: Vec<Hash>,
    /// Non-indexed data
    pub data: Bytes,
    pub block_number: Uint64,
    pub transaction_hash: Hash,
    pub transaction_index: Uint32,
    pub block_hash: Hash,
    /// Position of the log within the block
    pub log_index: Uint32,
    /// Set when a chain reorganisation dropped the log
    #[serde(default)]
    pub removed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_status() {
        let mut receipt = RpcReceipt::default();
        assert!(!receipt.succeeded());

        receipt.status = Some(Uint64(1));
        assert!(receipt.succeeded());

        receipt.status = Some(Uint64(0));
        assert!(!receipt.succeeded());
    }

    #[test]
    fn test_log_removed_defaults_false() {
        let mut value = serde_json::to_value(RpcLog::default()).unwrap();
        value.as_object_mut().unwrap().remove("removed");

        let log: RpcLog = serde_json::from_value(value).unwrap();
        assert!(!log.removed);
        assert_eq!(log.data, Bytes::default());
    }
}
