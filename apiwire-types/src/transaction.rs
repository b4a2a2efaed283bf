//! Transaction query results

use crate::block::BlockTransaction;
use apiwire_core::{Address, Big, Bytes, Hash, Uint32, Uint64};
use serde::{Deserialize, Serialize};

/// A transaction together with the block that included it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    /// Hash of the including block
    pub block_hash: Hash,
    /// Height of the including block
    pub block_number: Uint64,
    pub from: Option<Address>,
    pub gas: Uint64,
    pub gas_price: Option<Big>,
    pub hash: Option<Hash>,
    pub input: Bytes,
    pub nonce: Option<Uint64>,
    /// `None` for contract creation
    pub to: Option<Address>,
    /// Position within the block
    pub transaction_index: Uint32,
    pub value: Option<Big>,
    pub v: Option<Big>,
    pub r: Option<Big>,
    pub s: Option<Big>,
}

impl RpcTransaction {
    /// Attach inclusion context to a block-embedded transaction
    pub fn from_block_transaction(
        tx: BlockTransaction,
        block_hash: Hash,
        block_number: Uint64,
        transaction_index: Uint32,
    ) -> Self {
        Self {
            block_hash,
            block_number,
            from: tx.from,
            gas: tx.gas,
            gas_price: tx.gas_price,
            hash: tx.hash,
            input: tx.input,
            nonce: tx.nonce,
            to: tx.to,
            transaction_index,
            value: tx.value,
            v: tx.v,
            r: tx.r,
            s: tx.s,
        }
    }
}
