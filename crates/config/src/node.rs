//! The Nitro node startup config.

use crate::serde_utils::{checksum, json_string};
use alloy_primitives::Address;
use orbit_rollup::ChainConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The config a Nitro node reads at startup to sequence, batch-post and validate an Orbit chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeConfig {
    /// The chain the node runs.
    pub chain: NodeChain,
    /// The parent chain the node settles to.
    pub parent_chain: NodeParentChain,
    /// The HTTP RPC server.
    pub http: NodeHttp,
    /// Consensus-side node settings.
    pub node: NodeSettings,
    /// Execution-side settings.
    pub execution: NodeExecution,
}

impl NodeConfig {
    /// Returns the description of the chain the node runs.
    pub fn chain_info(&self) -> Option<&ChainInfo> {
        self.chain.info_json.first()
    }

    /// Returns the parent chain ID recorded in the chain info.
    pub fn parent_chain_id(&self) -> Option<u64> {
        self.chain_info().map(|info| info.parent_chain_id)
    }
}

/// The `chain` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeChain {
    /// The known chains, embedded as a JSON string.
    #[serde(with = "json_string")]
    pub info_json: Vec<ChainInfo>,
    /// The name of the chain to run, matching one of the entries in `info_json`.
    pub name: String,
}

/// One entry of `chain.info-json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainInfo {
    /// The chain ID.
    pub chain_id: u64,
    /// The parent chain ID.
    pub parent_chain_id: u64,
    /// The chain name.
    pub chain_name: String,
    /// The chain config.
    pub chain_config: ChainConfig,
    /// The core contracts the node interacts with.
    pub rollup: RollupAddresses,
}

/// The `rollup` section of a [ChainInfo].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RollupAddresses {
    /// The bridge.
    #[serde(with = "checksum")]
    pub bridge: Address,
    /// The delayed inbox.
    #[serde(with = "checksum")]
    pub inbox: Address,
    /// The sequencer inbox.
    #[serde(with = "checksum")]
    pub sequencer_inbox: Address,
    /// The rollup proxy.
    #[serde(with = "checksum")]
    pub rollup: Address,
    /// The validator utilities contract.
    #[serde(with = "checksum")]
    pub validator_utils: Address,
    /// The validator wallet creator.
    #[serde(with = "checksum")]
    pub validator_wallet_creator: Address,
    /// The parent-chain block the contracts were deployed at.
    pub deployed_at: u64,
}

/// The `parent-chain` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeParentChain {
    /// The parent-chain RPC connection.
    pub connection: Connection,
}

/// An RPC connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    /// The endpoint URL.
    pub url: String,
}

/// The `http` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeHttp {
    /// The bind address.
    pub addr: String,
    /// The listening port.
    pub port: u16,
    /// Accepted virtual hostnames.
    pub vhosts: Vec<String>,
    /// Accepted CORS origins.
    pub corsdomain: Vec<String>,
    /// Exposed RPC namespaces.
    pub api: Vec<String>,
}

impl Default for NodeHttp {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0".to_string(),
            port: 8449,
            vhosts: vec!["*".to_string()],
            corsdomain: vec!["*".to_string()],
            api: ["eth", "net", "web3", "arb", "debug"].map(String::from).to_vec(),
        }
    }
}

/// The `node` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeSettings {
    /// Whether the node sequences.
    pub sequencer: bool,
    /// Delayed inbox sequencing.
    pub delayed_sequencer: DelayedSequencer,
    /// Batch posting.
    pub batch_poster: BatchPoster,
    /// Staking and validation.
    pub staker: Staker,
    /// Settings that are unsafe outside a single-sequencer deployment.
    pub dangerous: Dangerous,
    /// The data availability committee client, for AnyTrust chains.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_availability: Option<DataAvailability>,
}

/// The `node.delayed-sequencer` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DelayedSequencer {
    /// Whether delayed messages are sequenced.
    pub enable: bool,
    /// Whether to wait for parent-chain finality before sequencing delayed messages.
    pub use_merge_finality: bool,
    /// Parent-chain blocks to wait before sequencing delayed messages.
    pub finalize_distance: u64,
}

impl Default for DelayedSequencer {
    fn default() -> Self {
        Self { enable: true, use_merge_finality: false, finalize_distance: 1 }
    }
}

/// The `node.batch-poster` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BatchPoster {
    /// The maximum batch size, in bytes.
    pub max_size: u64,
    /// Whether batch posting is enabled.
    pub enable: bool,
    /// The wallet batches are posted from.
    pub parent_chain_wallet: ParentChainWallet,
}

/// The `node.staker` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Staker {
    /// Whether the staker is enabled.
    pub enable: bool,
    /// The staking strategy.
    pub strategy: String,
    /// The wallet the staker stakes from.
    pub parent_chain_wallet: ParentChainWallet,
}

/// A parent-chain wallet backed by a raw private key.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParentChainWallet {
    /// The private key, as bare hex.
    pub private_key: String,
}

impl fmt::Debug for ParentChainWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParentChainWallet").field("private_key", &"<redacted>").finish()
    }
}

/// The `node.dangerous` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Dangerous {
    /// Run the sequencer without a coordinator.
    pub no_sequencer_coordinator: bool,
}

/// The `node.data-availability` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct DataAvailability {
    /// Whether the committee client is enabled.
    pub enable: bool,
    /// The sequencer inbox the committee certificates are checked against.
    #[serde(with = "checksum")]
    pub sequencer_inbox_address: Address,
    /// The parent-chain RPC endpoint.
    pub parent_chain_node_url: String,
    /// The REST aggregator batch data is fetched from.
    pub rest_aggregator: RestAggregator,
}

/// The `node.data-availability.rest-aggregator` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestAggregator {
    /// Whether the aggregator is enabled.
    pub enable: bool,
    /// The committee member REST endpoints.
    pub urls: Vec<String>,
}

impl Default for RestAggregator {
    fn default() -> Self {
        Self { enable: true, urls: vec!["http://localhost:9876".to_string()] }
    }
}

/// The `execution` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct NodeExecution {
    /// Where to forward transactions when not sequencing. Empty for the sequencer itself.
    pub forwarding_target: String,
    /// Sequencer execution settings.
    pub sequencer: ExecutionSequencer,
    /// State caching.
    pub caching: Caching,
}

impl Default for NodeExecution {
    fn default() -> Self {
        Self {
            forwarding_target: String::new(),
            sequencer: ExecutionSequencer::default(),
            caching: Caching { archive: true },
        }
    }
}

/// The `execution.sequencer` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ExecutionSequencer {
    /// Whether the sequencer is enabled.
    pub enable: bool,
    /// The maximum calldata size of a sequenced transaction, in bytes.
    pub max_tx_data_size: u64,
    /// The block production interval.
    pub max_block_speed: String,
}

impl Default for ExecutionSequencer {
    fn default() -> Self {
        Self { enable: true, max_tx_data_size: 85_000, max_block_speed: "250ms".to_string() }
    }
}

/// The `execution.caching` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caching {
    /// Whether to keep the full state history.
    pub archive: bool,
}
