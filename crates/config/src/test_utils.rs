//! Test utilities for `orbit-config`.

#![allow(missing_docs, unreachable_pub)]

use crate::{ChainReader, GeneratorConfig, OperatorKeys, ParentChain, DEFAULT_MIN_L2_BASE_FEE};
use alloy_primitives::B256;
use async_trait::async_trait;
use orbit_rollup::{RollupReceipt, RollupTransaction};
use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};
use thiserror::Error;

/// The deployer key used across tests. Derives `0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266`.
pub const DEPLOYER_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// The validator key used across tests. Derives `0x70997970C51812dc3A010C7d01b50e0d17dc79C8`.
pub const VALIDATOR_KEY: &str =
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
/// The batch poster key used across tests. Derives `0x3C44CdDdB6a900fa2b585dd299e03d12FA4293BC`.
pub const BATCH_POSTER_KEY: &str =
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

/// Returns the [OperatorKeys] built from the test keys.
pub fn operator_keys() -> OperatorKeys {
    OperatorKeys {
        deployer: DEPLOYER_KEY.parse().unwrap(),
        validator: VALIDATOR_KEY.parse().unwrap(),
        batch_poster: BATCH_POSTER_KEY.parse().unwrap(),
    }
}

/// Returns a [GeneratorConfig] for `my-chain` on Arbitrum Sepolia writing to `output_dir`.
pub fn generator_config(output_dir: impl Into<PathBuf>) -> GeneratorConfig {
    GeneratorConfig {
        chain_name: "my-chain".to_string(),
        keys: operator_keys(),
        parent_chain: ParentChain::arbitrum_sepolia(),
        min_l2_base_fee: DEFAULT_MIN_L2_BASE_FEE,
        output_dir: output_dir.into(),
    }
}

/// An in-memory [ChainReader].
#[derive(Debug, Clone, Default)]
pub struct MockChainReader {
    /// Transactions by hash.
    pub transactions: HashMap<B256, RollupTransaction>,
    /// Receipts by transaction hash.
    pub receipts: HashMap<B256, RollupReceipt>,
    /// Fail every request as if the endpoint were down.
    pub unavailable: bool,
    calls: Arc<AtomicUsize>,
}

/// The error returned by an unavailable [MockChainReader].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("connection refused")]
pub struct MockChainReaderError;

impl MockChainReader {
    /// A reader whose every request fails.
    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Default::default() }
    }

    /// Registers a creation transaction and its receipt.
    pub fn with_creation(mut self, tx: RollupTransaction, receipt: RollupReceipt) -> Self {
        self.receipts.insert(tx.hash, receipt);
        self.transactions.insert(tx.hash, tx);
        self
    }

    /// The number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record_call(&self) -> Result<(), MockChainReaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
            return Err(MockChainReaderError);
        }
        Ok(())
    }
}

#[async_trait]
impl ChainReader for MockChainReader {
    type Error = MockChainReaderError;

    async fn transaction_by_hash(
        &self,
        hash: B256,
    ) -> Result<Option<RollupTransaction>, Self::Error> {
        self.record_call()?;
        Ok(self.transactions.get(&hash).cloned())
    }

    async fn receipt_by_hash(&self, hash: B256) -> Result<Option<RollupReceipt>, Self::Error> {
        self.record_call()?;
        Ok(self.receipts.get(&hash).cloned())
    }
}
