#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod errors;
pub use errors::{ConfigError, ConfigResult};

mod keys;
pub use keys::{derive_address, KeyError, OperatorAddresses, OperatorKeys, PrivateKey};

mod traits;
pub use traits::ChainReader;

mod reader;
pub use reader::{fetch_transaction_data, parse_tx_hash};

pub mod serde_utils;

mod node;
pub use node::{
    BatchPoster, Caching, ChainInfo, Connection, Dangerous, DataAvailability, DelayedSequencer,
    ExecutionSequencer, NodeChain, NodeConfig, NodeExecution, NodeHttp, NodeParentChain,
    NodeSettings, ParentChainWallet, RestAggregator, RollupAddresses, Staker,
};

mod l3;
pub use l3::L3Config;

mod synth;
pub use synth::{
    synthesize, ParentChain, SynthesisInputs, ARBITRUM_SEPOLIA_CHAIN_ID, ARBITRUM_SEPOLIA_RPC_URL,
    DEFAULT_MIN_L2_BASE_FEE,
};

mod artifacts;
pub use artifacts::{
    encode_artifact, write_artifact, ArtifactEncoding, L3_CONFIG_FILE, NODE_CONFIG_FILE,
};

mod generator;
pub use generator::{ConfigGenerator, GeneratedArtifacts, GeneratorConfig};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
