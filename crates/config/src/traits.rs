//! Traits for the `orbit-config` crate.

use alloy_primitives::B256;
use async_trait::async_trait;
use core::fmt::Display;
use orbit_rollup::{RollupReceipt, RollupTransaction};

/// Describes the interface for reading rollup-creation records from the parent chain.
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// The transport error type.
    type Error: Display + Send;

    /// Fetches a transaction by its hash. Returns `None` if the parent chain does not know it.
    async fn transaction_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<RollupTransaction>, Self::Error>;

    /// Fetches the receipt of a transaction by its hash. Returns `None` if the parent chain does
    /// not know it.
    async fn receipt_by_hash(&self, hash: B256) -> Result<Option<RollupReceipt>, Self::Error>;
}
