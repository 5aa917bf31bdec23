//! JSON-RPC response bodies, reduced to the fields the rollup decoders read.

use alloy_primitives::{Address, Bytes, Log, B256, U64};
use orbit_rollup::{RollupReceipt, RollupTransaction};
use serde::Deserialize;

/// An `eth_getTransactionByHash` result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    /// The transaction hash.
    pub hash: B256,
    /// The recipient. `None` for contract creations.
    #[serde(default)]
    pub to: Option<Address>,
    /// The calldata.
    pub input: Bytes,
    /// The including block. `None` while pending.
    #[serde(default)]
    pub block_number: Option<U64>,
}

impl From<RpcTransaction> for RollupTransaction {
    fn from(tx: RpcTransaction) -> Self {
        Self {
            hash: tx.hash,
            to: tx.to,
            input: tx.input,
            block_number: tx.block_number.map(|n| n.to()),
        }
    }
}

/// An `eth_getTransactionReceipt` result.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcReceipt {
    /// The transaction hash.
    pub transaction_hash: B256,
    /// `0x1` on success, `0x0` on revert. Absent on pre-Byzantium receipts.
    #[serde(default)]
    pub status: Option<U64>,
    /// The including block.
    #[serde(default)]
    pub block_number: Option<U64>,
    /// The emitted logs.
    pub logs: Vec<RpcLog>,
}

impl From<RpcReceipt> for RollupReceipt {
    fn from(receipt: RpcReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            status: receipt.status.is_some_and(|s| s == U64::from(1)),
            block_number: receipt.block_number.map(|n| n.to()),
            logs: receipt.logs.into_iter().map(Into::into).collect(),
        }
    }
}

/// A receipt log.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RpcLog {
    /// The emitting contract.
    pub address: Address,
    /// The indexed topics.
    pub topics: Vec<B256>,
    /// The non-indexed data.
    pub data: Bytes,
}

impl From<RpcLog> for Log {
    fn from(log: RpcLog) -> Self {
        Self::new_unchecked(log.address, log.topics, log.data)
    }
}
