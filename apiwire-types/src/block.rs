//! Block query results

use apiwire_core::{Address, Big, Bytes, Hash, Uint64};
use serde::{Deserialize, Serialize};

/// A block header together with its transactions
///
/// `transactions` is empty when the caller did not ask for full transaction
/// objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    /// Block height
    pub number: Uint64,
    /// Header hash
    pub hash: Hash,
    /// Hash of the previous block
    pub parent_hash: Hash,
    /// Consensus mix digest
    pub mix_hash: Hash,
    /// State trie root after this block
    pub state_root: Hash,
    /// Block producer
    pub miner: Address,
    /// Unix timestamp in seconds
    pub timestamp: Uint64,
    /// Root of the transaction trie
    pub transactions_root: Hash,
    /// Root of the receipt trie
    pub receipts_root: Hash,
    /// Full transaction objects
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
}

impl BlockData {
    /// Number of transactions included in the result
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }
}

/// A transaction as embedded in a [`BlockData`]
///
/// Carries no inclusion context since the enclosing block provides it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockTransaction {
    pub from: Option<Address>,
    pub gas: Uint64,
    pub gas_price: Option<Big>,
    pub hash: Option<Hash>,
    pub input: Bytes,
    pub nonce: Option<Uint64>,
    /// `None` for contract creation
    pub to: Option<Address>,
    pub value: Option<Big>,
    pub v: Option<Big>,
    pub r: Option<Big>,
    pub s: Option<Big>,
}

impl BlockTransaction {
    /// Checks whether the transaction deploys a contract
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_field_names() {
        let block = BlockData {
            number: Uint64(0x1b4),
            timestamp: Uint64(0x5c6e6f1b),
            ..Default::default()
        };
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["number"], "0x1b4");
        assert_eq!(value["timestamp"], "0x5c6e6f1b");
        assert!(value.get("parentHash").is_some());
        assert!(value.get("transactionsRoot").is_some());
        assert_eq!(value["transactions"], json!([]));
    }

    #[test]
    fn test_block_without_transactions_field() {
        let mut value = serde_json::to_value(BlockData::default()).unwrap();
        value.as_object_mut().unwrap().remove("transactions");

        let block: BlockData = serde_json::from_value(value).unwrap();
        assert_eq!(block.transaction_count(), 0);
    }

    #[test]
    fn test_absent_pointers_render_null() {
        let tx = BlockTransaction::default();
        let value = serde_json::to_value(&tx).unwrap();

        assert!(tx.is_contract_creation());
        assert_eq!(value["to"], json!(null));
        assert_eq!(value["gasPrice"], json!(null));
        assert_eq!(value["input"], "0x");
        assert_eq!(value["gas"], "0x0");
    }
}
