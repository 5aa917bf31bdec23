//! The config generation pipeline.

use crate::{
    artifacts::{write_artifact, ArtifactEncoding, L3_CONFIG_FILE, NODE_CONFIG_FILE},
    fetch_transaction_data, parse_tx_hash, synthesize, ChainReader, ConfigResult, OperatorKeys,
    ParentChain, SynthesisInputs,
};
use alloy_primitives::B256;
use orbit_rollup::{decode_creation_receipt, decode_creation_transaction};
use std::path::PathBuf;
use tracing::{debug, info};

/// The operator-supplied inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// The chain name written to both artifacts.
    pub chain_name: String,
    /// The operator keys.
    pub keys: OperatorKeys,
    /// The parent chain the rollup was created on.
    pub parent_chain: ParentChain,
    /// The minimum L2 base fee written to the L3 config, in wei.
    pub min_l2_base_fee: u64,
    /// The directory the artifacts are written to.
    pub output_dir: PathBuf,
}

/// The files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifacts {
    /// The path of the node config.
    pub node_config: PathBuf,
    /// The path of the L3 config.
    pub l3_config: PathBuf,
}

/// Generates the node and L3 configs of a rollup from its creation transaction.
#[derive(Debug, Clone)]
pub struct ConfigGenerator<R> {
    reader: R,
    cfg: GeneratorConfig,
}

impl<R: ChainReader> ConfigGenerator<R> {
    /// Creates a new [ConfigGenerator] reading from `reader`.
    pub const fn new(reader: R, cfg: GeneratorConfig) -> Self {
        Self { reader, cfg }
    }

    /// Validates `tx_hash` and runs [ConfigGenerator::generate]. A malformed hash is rejected
    /// before any request reaches the parent chain.
    pub async fn generate_from_str(&self, tx_hash: &str) -> ConfigResult<GeneratedArtifacts> {
        let hash = parse_tx_hash(tx_hash)?;
        self.generate(hash).await
    }

    /// Fetches and decodes the creation transaction `tx_hash`, then writes `node-config.json`
    /// and `l3-config.json` to the output directory.
    ///
    /// Nothing is written unless fetching, decoding and synthesis all succeed. The two files are
    /// written one after the other, so a failure writing the second leaves the first in place.
    pub async fn generate(&self, tx_hash: B256) -> ConfigResult<GeneratedArtifacts> {
        info!(target: "generator", "Generating configs from creation transaction {tx_hash}");

        let (tx, receipt) = fetch_transaction_data(&self.reader, tx_hash).await?;
        let creation = decode_creation_transaction(&tx)?;
        let contracts = decode_creation_receipt(&receipt)?;
        info!(
            target: "generator",
            "Decoded {} rollup creation for chain {}: rollup {}, deployed at block {}",
            creation.version,
            creation.chain_config.chain_id,
            contracts.rollup,
            contracts.deployed_at_block_number
        );
        debug!(
            target: "generator",
            "Rollup owner {}, {} validator(s), {} batch poster(s), batch poster manager {:?}, \
             native token {}",
            creation.owner,
            creation.validators.len(),
            creation.batch_posters.len(),
            creation.batch_poster_manager,
            creation.native_token
        );
        debug!(
            target: "generator",
            "Max data size {}, confirm period {} blocks, base stake {} wei, wasm module root {}, \
             L2 factories deployed: {}",
            creation.max_data_size,
            creation.confirm_period_blocks,
            creation.base_stake,
            creation.wasm_module_root,
            creation.deploy_factories_to_l2
        );

        let (node_config, l3_config) = synthesize(&SynthesisInputs {
            chain_config: &creation.chain_config,
            core_contracts: &contracts,
            keys: &self.cfg.keys,
            parent_chain: &self.cfg.parent_chain,
            chain_name: &self.cfg.chain_name,
            deployed_at_block: contracts.deployed_at_block_number,
            min_l2_base_fee: self.cfg.min_l2_base_fee,
        })?;

        let node_path = self.cfg.output_dir.join(NODE_CONFIG_FILE);
        write_artifact(&node_path, &node_config, ArtifactEncoding::Pretty).await?;
        info!(target: "generator", "Node config written to {}", node_path.display());

        let l3_path = self.cfg.output_dir.join(L3_CONFIG_FILE);
        write_artifact(&l3_path, &l3_config, ArtifactEncoding::Compact).await?;
        info!(target: "generator", "L3 config written to {}", l3_path.display());

        Ok(GeneratedArtifacts { node_config: node_path, l3_config: l3_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        test_utils::{generator_config, MockChainReader},
        ConfigError, L3Config, NodeConfig,
    };
    use orbit_rollup::test_utils::{
        creation_receipt, creation_transaction, sample_core_contracts, v2_creation_calldata,
        CREATION_TX_HASH, SAMPLE_CHAIN_CONFIG,
    };
    use std::path::Path;

    fn reader_with(calldata: alloy_primitives::Bytes) -> MockChainReader {
        let receipt = creation_receipt(&sample_core_contracts());
        MockChainReader::default().with_creation(creation_transaction(calldata), receipt)
    }

    fn assert_nothing_written(dir: &Path) {
        assert!(!dir.join(NODE_CONFIG_FILE).exists());
        assert!(!dir.join(L3_CONFIG_FILE).exists());
    }

    #[tokio::test]
    async fn test_generate_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let reader = reader_with(v2_creation_calldata(412346, SAMPLE_CHAIN_CONFIG));
        let generator = ConfigGenerator::new(reader, generator_config(dir.path()));

        let written = generator.generate(CREATION_TX_HASH).await.unwrap();
        assert_eq!(written.node_config, dir.path().join(NODE_CONFIG_FILE));
        assert_eq!(written.l3_config, dir.path().join(L3_CONFIG_FILE));

        let node: NodeConfig =
            serde_json::from_str(&std::fs::read_to_string(&written.node_config).unwrap()).unwrap();
        let l3_raw = std::fs::read_to_string(&written.l3_config).unwrap();
        let l3: L3Config = serde_json::from_str(&l3_raw).unwrap();

        assert!(!l3_raw.contains('\n'));
        assert!(l3_raw.contains(r#""chainName":"my-chain""#));
        assert_eq!(l3.chain_id, 412346);
        assert_eq!(node.parent_chain_id(), Some(l3.parent_chain_id));
        assert_eq!(l3.rollup, sample_core_contracts().rollup);
        assert_eq!(l3.deployed_at_block_number, sample_core_contracts().deployed_at_block_number);
    }

    #[tokio::test]
    async fn test_generate_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let reader = reader_with(v2_creation_calldata(412346, SAMPLE_CHAIN_CONFIG));
        let generator = ConfigGenerator::new(reader, generator_config(dir.path()));

        let written = generator.generate(CREATION_TX_HASH).await.unwrap();
        let first = std::fs::read(&written.l3_config).unwrap();
        generator.generate(CREATION_TX_HASH).await.unwrap();
        assert_eq!(std::fs::read(&written.l3_config).unwrap(), first);
    }

    #[tokio::test]
    async fn test_malformed_calldata_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let reader = reader_with(alloy_primitives::Bytes::from_static(b"not a createRollup call"));
        let generator = ConfigGenerator::new(reader, generator_config(dir.path()));

        let err = generator.generate(CREATION_TX_HASH).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnrecognizedTransactionShape(_)));
        assert_nothing_written(dir.path());
    }

    #[tokio::test]
    async fn test_malformed_receipt_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let tx = creation_transaction(v2_creation_calldata(412346, SAMPLE_CHAIN_CONFIG));
        let mut receipt = creation_receipt(&sample_core_contracts());
        receipt.logs.clear();
        let reader = MockChainReader::default().with_creation(tx, receipt);
        let generator = ConfigGenerator::new(reader, generator_config(dir.path()));

        let err = generator.generate(CREATION_TX_HASH).await.unwrap_err();
        assert!(matches!(err, ConfigError::UnrecognizedReceiptShape(_)));
        assert_nothing_written(dir.path());
    }

    #[tokio::test]
    async fn test_malformed_hash_skips_rpc() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            ConfigGenerator::new(MockChainReader::default(), generator_config(dir.path()));

        let err = generator.generate_from_str("0x1234").await.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTransactionHash(_)));
        assert_eq!(generator.reader.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_from_str() {
        let dir = tempfile::tempdir().unwrap();
        let reader = reader_with(v2_creation_calldata(412346, SAMPLE_CHAIN_CONFIG));
        let generator = ConfigGenerator::new(reader, generator_config(dir.path()));

        generator.generate_from_str(&CREATION_TX_HASH.to_string()).await.unwrap();
        assert!(dir.path().join(L3_CONFIG_FILE).exists());
    }

    #[tokio::test]
    async fn test_unknown_transaction() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            ConfigGenerator::new(MockChainReader::default(), generator_config(dir.path()));

        let err = generator.generate(B256::repeat_byte(0x42)).await.unwrap_err();
        assert!(matches!(err, ConfigError::TransactionNotFound(_)));
        assert_nothing_written(dir.path());
    }

    #[tokio::test]
    async fn test_unavailable_rpc() {
        let dir = tempfile::tempdir().unwrap();
        let generator =
            ConfigGenerator::new(MockChainReader::unavailable(), generator_config(dir.path()));

        let err = generator.generate(CREATION_TX_HASH).await.unwrap_err();
        assert!(matches!(err, ConfigError::RpcUnavailable(_)));
        assert_nothing_written(dir.path());
    }

    #[tokio::test]
    async fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let reader = reader_with(v2_creation_calldata(412346, SAMPLE_CHAIN_CONFIG));
        let generator = ConfigGenerator::new(reader, generator_config(dir.path().join("absent")));

        let err = generator.generate(CREATION_TX_HASH).await.unwrap_err();
        assert!(matches!(err, ConfigError::Persistence { .. }));
    }
}
