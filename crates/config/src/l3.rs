//! The L3 deployment config consumed by staking and token-bridge tooling.

use crate::serde_utils::{checksum, decimal};
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// The roles and contracts of a deployed Orbit chain.
///
/// Field order matches the document downstream tooling was written against. `validatorUtils` is
/// present twice, as `utils` and `validatorUtils`, and both always carry the same address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L3Config {
    /// Receives the network fee. The deployer.
    #[serde(with = "checksum")]
    pub network_fee_receiver: Address,
    /// Receives the infrastructure fee. The deployer.
    #[serde(with = "checksum")]
    pub infrastructure_fee_collector: Address,
    /// The validator.
    #[serde(with = "checksum")]
    pub staker: Address,
    /// The batch poster.
    #[serde(with = "checksum")]
    pub batch_poster: Address,
    /// The chain owner. The deployer.
    #[serde(with = "checksum")]
    pub chain_owner: Address,
    /// The chain ID.
    pub chain_id: u64,
    /// The chain name.
    pub chain_name: String,
    /// The minimum L2 base fee, in wei.
    #[serde(rename = "minL2BaseFee")]
    pub min_l2_base_fee: u64,
    /// The parent chain ID.
    pub parent_chain_id: u64,
    /// The parent-chain RPC endpoint.
    #[serde(rename = "parent-chain-node-url")]
    pub parent_chain_node_url: String,
    /// The validator utilities contract, under its legacy key.
    #[serde(with = "checksum")]
    pub utils: Address,
    /// The rollup proxy.
    #[serde(with = "checksum")]
    pub rollup: Address,
    /// The delayed inbox.
    #[serde(with = "checksum")]
    pub inbox: Address,
    /// The fee token. Zero for ETH-native chains.
    #[serde(with = "checksum")]
    pub native_token: Address,
    /// The outbox.
    #[serde(with = "checksum")]
    pub outbox: Address,
    /// The rollup event inbox.
    #[serde(with = "checksum")]
    pub rollup_event_inbox: Address,
    /// The challenge manager.
    #[serde(with = "checksum")]
    pub challenge_manager: Address,
    /// The proxy admin.
    #[serde(with = "checksum")]
    pub admin_proxy: Address,
    /// The sequencer inbox.
    #[serde(with = "checksum")]
    pub sequencer_inbox: Address,
    /// The bridge.
    #[serde(with = "checksum")]
    pub bridge: Address,
    /// The upgrade executor.
    #[serde(with = "checksum")]
    pub upgrade_executor: Address,
    /// The validator utilities contract.
    #[serde(with = "checksum")]
    pub validator_utils: Address,
    /// The validator wallet creator.
    #[serde(with = "checksum")]
    pub validator_wallet_creator: Address,
    /// The parent-chain block the contracts were deployed at, as a decimal string.
    #[serde(with = "decimal")]
    pub deployed_at_block_number: u64,
}
