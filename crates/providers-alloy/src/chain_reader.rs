//! A [ChainReader] that uses an alloy provider on the backend.

use crate::{RpcReceipt, RpcTransaction};
use alloy_primitives::B256;
use alloy_provider::{Provider, ReqwestProvider};
use alloy_transport::{RpcError, TransportErrorKind};
use async_trait::async_trait;
use orbit_config::ChainReader;
use orbit_rollup::{RollupReceipt, RollupTransaction};
use tracing::trace;

/// The [AlloyChainReader] is a concrete implementation of the [ChainReader] trait, reading
/// rollup-creation records over Ethereum JSON-RPC using an alloy provider as the backend.
///
/// Only the `eth` namespace is used, so public parent-chain endpoints are sufficient.
#[derive(Debug, Clone)]
pub struct AlloyChainReader {
    /// The inner Ethereum JSON-RPC provider.
    inner: ReqwestProvider,
}

impl AlloyChainReader {
    /// Creates a new [AlloyChainReader] with the given alloy provider.
    pub const fn new(inner: ReqwestProvider) -> Self {
        Self { inner }
    }

    /// Creates a new [AlloyChainReader] from the provided [reqwest::Url].
    pub fn new_http(url: reqwest::Url) -> Self {
        let inner = ReqwestProvider::new_http(url);
        Self::new(inner)
    }

    /// Returns the chain ID of the endpoint.
    pub async fn chain_id(&self) -> Result<u64, RpcError<TransportErrorKind>> {
        self.inner.get_chain_id().await
    }
}

#[async_trait]
impl ChainReader for AlloyChainReader {
    type Error = RpcError<TransportErrorKind>;

    async fn transaction_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<RollupTransaction>, Self::Error> {
        let tx: Option<RpcTransaction> =
            self.inner.raw_request("eth_getTransactionByHash".into(), [hash]).await?;
        trace!(
            target: "alloy_chain_reader",
            "eth_getTransactionByHash {hash}: found={}",
            tx.is_some()
        );
        Ok(tx.map(Into::into))
    }

    async fn receipt_by_hash(&self, hash: B256) -> Result<Option<RollupReceipt>, Self::Error> {
        let receipt: Option<RpcReceipt> =
            self.inner.raw_request("eth_getTransactionReceipt".into(), [hash]).await?;
        trace!(
            target: "alloy_chain_reader",
            "eth_getTransactionReceipt {hash}: found={}",
            receipt.is_some()
        );
        Ok(receipt.map(Into::into))
    }
}
