//! Fetching the rollup-creation records from the parent chain.

use crate::{ChainReader, ConfigError, ConfigResult};
use alloy_primitives::B256;
use orbit_rollup::{RollupReceipt, RollupTransaction};
use std::str::FromStr;
use tracing::debug;

/// Parses a transaction hash in its canonical `0x`-prefixed, 64 hex digit form.
pub fn parse_tx_hash(s: &str) -> ConfigResult<B256> {
    let digits = s
        .strip_prefix("0x")
        .filter(|d| d.len() == 64)
        .ok_or_else(|| ConfigError::InvalidTransactionHash(s.to_string()))?;
    B256::from_str(digits).map_err(|_| ConfigError::InvalidTransactionHash(s.to_string()))
}

/// Fetches the transaction and receipt for `hash`.
///
/// Both lookups are issued concurrently. A lookup that returns no result maps to
/// [ConfigError::TransactionNotFound] and a transport failure to [ConfigError::RpcUnavailable].
pub async fn fetch_transaction_data<R: ChainReader>(
    reader: &R,
    hash: B256,
) -> ConfigResult<(RollupTransaction, RollupReceipt)> {
    debug!(target: "chain_reader", "Fetching transaction and receipt for {hash}");
    let (tx, receipt) =
        tokio::join!(reader.transaction_by_hash(hash), reader.receipt_by_hash(hash));

    let tx = tx
        .map_err(|e| ConfigError::RpcUnavailable(e.to_string()))?
        .ok_or(ConfigError::TransactionNotFound(hash))?;
    let receipt = receipt
        .map_err(|e| ConfigError::RpcUnavailable(e.to_string()))?
        .ok_or(ConfigError::TransactionNotFound(hash))?;

    debug!(
        target: "chain_reader",
        "Fetched transaction {hash} with {} calldata bytes and {} receipt logs",
        tx.input.len(),
        receipt.logs.len()
    );
    Ok((tx, receipt))
}
