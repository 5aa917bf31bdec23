//! Synthesis of the node and L3 configs from decoded rollup data.

use crate::{
    BatchPoster, ChainInfo, ConfigResult, Connection, Dangerous, DataAvailability,
    DelayedSequencer, L3Config, NodeChain, NodeConfig, NodeExecution, NodeHttp, NodeParentChain,
    NodeSettings, OperatorKeys, ParentChainWallet, RestAggregator, RollupAddresses, Staker,
};
use orbit_rollup::{ChainConfig, CoreContracts};
use tracing::debug;

/// The chain ID of Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_CHAIN_ID: u64 = 421_614;

/// The public RPC endpoint of Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_RPC_URL: &str = "https://sepolia-rollup.arbitrum.io/rpc";

/// The minimum L2 base fee written to the L3 config unless overridden: 0.1 gwei.
pub const DEFAULT_MIN_L2_BASE_FEE: u64 = 100_000_000;

/// The largest batch the batch poster submits, in bytes.
const BATCH_POSTER_MAX_SIZE: u64 = 90_000;

/// The chain an Orbit rollup settles to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentChain {
    /// The parent chain ID.
    pub id: u64,
    /// The parent-chain RPC endpoint. Used for reading the creation transaction and written to
    /// both artifacts.
    pub rpc_url: String,
}

impl ParentChain {
    /// Arbitrum Sepolia, reached through its public RPC endpoint.
    pub fn arbitrum_sepolia() -> Self {
        Self { id: ARBITRUM_SEPOLIA_CHAIN_ID, rpc_url: ARBITRUM_SEPOLIA_RPC_URL.to_string() }
    }
}

/// Everything [synthesize] combines into the two artifacts.
#[derive(Debug, Clone, Copy)]
pub struct SynthesisInputs<'a> {
    /// The decoded chain config.
    pub chain_config: &'a ChainConfig,
    /// The decoded core contracts.
    pub core_contracts: &'a CoreContracts,
    /// The operator keys.
    pub keys: &'a OperatorKeys,
    /// The parent chain.
    pub parent_chain: &'a ParentChain,
    /// The operator-chosen chain name.
    pub chain_name: &'a str,
    /// The parent-chain block the creation transaction was included in.
    pub deployed_at_block: u64,
    /// The minimum L2 base fee, in wei.
    pub min_l2_base_fee: u64,
}

/// Builds the [NodeConfig] and [L3Config] for a decoded rollup.
///
/// Performs no I/O. The only fallible step is deriving the operator addresses.
pub fn synthesize(inputs: &SynthesisInputs<'_>) -> ConfigResult<(NodeConfig, L3Config)> {
    let node = node_config(inputs);
    let l3 = l3_config(inputs)?;
    debug!(
        target: "synth",
        "Synthesized configs for chain {} ({}) on parent chain {}",
        l3.chain_name,
        l3.chain_id,
        l3.parent_chain_id
    );
    Ok((node, l3))
}

fn node_config(inputs: &SynthesisInputs<'_>) -> NodeConfig {
    let SynthesisInputs { chain_config, core_contracts: c, keys, parent_chain, chain_name, .. } =
        *inputs;

    let info = ChainInfo {
        chain_id: chain_config.chain_id,
        parent_chain_id: parent_chain.id,
        chain_name: chain_name.to_string(),
        chain_config: chain_config.clone(),
        rollup: RollupAddresses {
            bridge: c.bridge,
            inbox: c.inbox,
            sequencer_inbox: c.sequencer_inbox,
            rollup: c.rollup,
            validator_utils: c.validator_utils,
            validator_wallet_creator: c.validator_wallet_creator,
            deployed_at: inputs.deployed_at_block,
        },
    };

    let data_availability = chain_config.is_anytrust().then(|| DataAvailability {
        enable: true,
        sequencer_inbox_address: c.sequencer_inbox,
        parent_chain_node_url: parent_chain.rpc_url.clone(),
        rest_aggregator: RestAggregator::default(),
    });

    NodeConfig {
        chain: NodeChain { info_json: vec![info], name: chain_name.to_string() },
        parent_chain: NodeParentChain {
            connection: Connection { url: parent_chain.rpc_url.clone() },
        },
        http: NodeHttp::default(),
        node: NodeSettings {
            sequencer: true,
            delayed_sequencer: DelayedSequencer::default(),
            batch_poster: BatchPoster {
                max_size: BATCH_POSTER_MAX_SIZE,
                enable: true,
                parent_chain_wallet: ParentChainWallet {
                    private_key: keys.batch_poster.to_unprefixed_hex(),
                },
            },
            staker: Staker {
                enable: true,
                strategy: "MakeNodes".to_string(),
                parent_chain_wallet: ParentChainWallet {
                    private_key: keys.validator.to_unprefixed_hex(),
                },
            },
            dangerous: Dangerous { no_sequencer_coordinator: true },
            data_availability,
        },
        execution: NodeExecution::default(),
    }
}

fn l3_config(inputs: &SynthesisInputs<'_>) -> ConfigResult<L3Config> {
    let SynthesisInputs { chain_config, core_contracts: c, keys, parent_chain, chain_name, .. } =
        *inputs;
    let roles = keys.addresses()?;

    Ok(L3Config {
        network_fee_receiver: roles.deployer,
        infrastructure_fee_collector: roles.deployer,
        staker: roles.validator,
        batch_poster: roles.batch_poster,
        chain_owner: roles.deployer,
        chain_id: chain_config.chain_id,
        chain_name: chain_name.to_string(),
        min_l2_base_fee: inputs.min_l2_base_fee,
        parent_chain_id: parent_chain.id,
        parent_chain_node_url: parent_chain.rpc_url.clone(),
        utils: c.validator_utils,
        rollup: c.rollup,
        inbox: c.inbox,
        native_token: c.native_token,
        outbox: c.outbox,
        rollup_event_inbox: c.rollup_event_inbox,
        challenge_manager: c.challenge_manager,
        admin_proxy: c.admin_proxy,
        sequencer_inbox: c.sequencer_inbox,
        bridge: c.bridge,
        upgrade_executor: c.upgrade_executor,
        validator_utils: c.validator_utils,
        validator_wallet_creator: c.validator_wallet_creator,
        deployed_at_block_number: inputs.deployed_at_block,
    })
}
