//! Raw parent-chain records of a rollup-creation transaction.

use alloy_primitives::{Address, Bytes, Log, B256};

/// The parts of a parent-chain transaction needed to decode a rollup creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupTransaction {
    /// The transaction hash.
    pub hash: B256,
    /// The callee. `None` for contract creations.
    pub to: Option<Address>,
    /// The calldata.
    pub input: Bytes,
    /// The block the transaction was included in, if mined.
    pub block_number: Option<u64>,
}

/// The parts of a parent-chain receipt needed to decode a rollup creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupReceipt {
    /// The hash of the transaction this receipt belongs to.
    pub transaction_hash: B256,
    /// Whether the transaction executed successfully.
    pub status: bool,
    /// The block the transaction was included in, if mined.
    pub block_number: Option<u64>,
    /// The logs emitted by the transaction.
    pub logs: Vec<Log>,
}
