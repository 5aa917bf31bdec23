//! The core contracts deployed for a rollup.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// The contract topology the `RollupCreator` deploys for a new rollup, along with the parent-chain
/// block the deployment landed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreContracts {
    /// The rollup proxy.
    pub rollup: Address,
    /// The fee token of the chain. Zero for ETH-native chains.
    pub native_token: Address,
    /// The delayed inbox.
    pub inbox: Address,
    /// The outbox.
    pub outbox: Address,
    /// The rollup event inbox.
    pub rollup_event_inbox: Address,
    /// The challenge manager.
    pub challenge_manager: Address,
    /// The proxy admin of the deployed proxies.
    pub admin_proxy: Address,
    /// The sequencer inbox.
    pub sequencer_inbox: Address,
    /// The bridge.
    pub bridge: Address,
    /// The upgrade executor that owns the deployment.
    pub upgrade_executor: Address,
    /// The validator utilities contract.
    pub validator_utils: Address,
    /// The validator wallet creator.
    pub validator_wallet_creator: Address,
    /// The parent-chain block number the contracts were deployed at.
    pub deployed_at_block_number: u64,
}
