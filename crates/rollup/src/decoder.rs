//! Decoding of rollup-creation transactions and receipts.

use crate::{
    abi::{v1, v2, RollupCreated},
    ChainConfig, CoreContracts, RollupDecodeError, RollupDecodeResult, RollupReceipt,
    RollupTransaction,
};
use alloy_primitives::{hex, Address, B256, U256};
use alloy_sol_types::{SolCall, SolEvent};
use tracing::{debug, trace};

/// The `RollupCreator` release a creation transaction was submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollupCreatorVersion {
    /// v1.1, single batch poster.
    V1,
    /// v2.1, batch poster set with an optional manager.
    V2,
}

impl core::fmt::Display for RollupCreatorVersion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::V1 => write!(f, "v1.1"),
            Self::V2 => write!(f, "v2.1"),
        }
    }
}

/// The decoded parameters of a `createRollup` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollupCreation {
    /// The creator release the call targets.
    pub version: RollupCreatorVersion,
    /// The chain config embedded in the call.
    pub chain_config: ChainConfig,
    /// The chain ID passed alongside the chain config.
    pub chain_id: U256,
    /// The rollup owner.
    pub owner: Address,
    /// The initial validator allowlist.
    pub validators: Vec<Address>,
    /// The initial batch posters.
    pub batch_posters: Vec<Address>,
    /// The batch poster manager, if one was set.
    pub batch_poster_manager: Option<Address>,
    /// The fee token. Zero for ETH-native chains.
    pub native_token: Address,
    /// The maximum size of a batch, in bytes.
    pub max_data_size: U256,
    /// Number of blocks before an assertion can be confirmed.
    pub confirm_period_blocks: u64,
    /// The stake required to become a validator.
    pub base_stake: U256,
    /// The root of the initial WASM replay binary.
    pub wasm_module_root: B256,
    /// Whether the token bridge factories are deployed to the child chain.
    pub deploy_factories_to_l2: bool,
}

/// Decodes a `createRollup` transaction into its [RollupCreation] parameters.
///
/// Bytes trailing the ABI-encoded parameters are ignored, as wallets may append data suffixes.
///
/// Fails with [RollupDecodeError::UnrecognizedTransactionShape] if the transaction deploys a
/// contract, the calldata matches no known `createRollup` selector, fails to ABI-decode, embeds a
/// chain config that is not valid JSON, or embeds a chain config whose chain ID disagrees with the
/// call's `chainId` parameter.
pub fn decode_creation_transaction(tx: &RollupTransaction) -> RollupDecodeResult<RollupCreation> {
    let Some(to) = tx.to else {
        return Err(RollupDecodeError::UnrecognizedTransactionShape(format!(
            "{} is a contract deployment, not a createRollup call",
            tx.hash
        )));
    };
    trace!(target: "decoder", "Decoding call to {to} mined in block {:?}", tx.block_number);

    let input = tx.input.as_ref();
    let Some(selector) = input.get(..4) else {
        return Err(RollupDecodeError::UnrecognizedTransactionShape(format!(
            "calldata of {} is only {} bytes",
            tx.hash,
            input.len()
        )));
    };

    let creation = if selector == v2::createRollupCall::SELECTOR {
        let call = v2::createRollupCall::abi_decode(input, false).map_err(shape_err)?;
        from_v2(call.deployParams)?
    } else if selector == v1::createRollupCall::SELECTOR {
        let call = v1::createRollupCall::abi_decode(input, false).map_err(shape_err)?;
        from_v1(call.deployParams)?
    } else {
        return Err(RollupDecodeError::UnrecognizedTransactionShape(format!(
            "selector 0x{} of {} is not a createRollup call",
            hex::encode(selector),
            tx.hash
        )));
    };

    if creation.chain_id != U256::from(creation.chain_config.chain_id) {
        return Err(RollupDecodeError::UnrecognizedTransactionShape(format!(
            "chain config declares chain id {} but the creation parameters declare {}",
            creation.chain_config.chain_id, creation.chain_id
        )));
    }

    debug!(
        target: "decoder",
        "Decoded {} createRollup call for chain {}",
        creation.version,
        creation.chain_config.chain_id
    );
    Ok(creation)
}

/// Decodes the [CoreContracts] from the `RollupCreated` event of a creation receipt.
///
/// Fails with [RollupDecodeError::UnrecognizedReceiptShape] if the transaction reverted, is not
/// yet mined, or emitted no decodable `RollupCreated` event.
pub fn decode_creation_receipt(receipt: &RollupReceipt) -> RollupDecodeResult<CoreContracts> {
    if !receipt.status {
        return Err(RollupDecodeError::UnrecognizedReceiptShape(format!(
            "transaction {} reverted",
            receipt.transaction_hash
        )));
    }
    let deployed_at_block_number = receipt.block_number.ok_or_else(|| {
        RollupDecodeError::UnrecognizedReceiptShape(format!(
            "receipt of {} has no block number",
            receipt.transaction_hash
        ))
    })?;

    let log = receipt
        .logs
        .iter()
        .find(|log| log.topics().first() == Some(&RollupCreated::SIGNATURE_HASH))
        .ok_or_else(|| {
            RollupDecodeError::UnrecognizedReceiptShape(format!(
                "no RollupCreated event among the {} logs of {}",
                receipt.logs.len(),
                receipt.transaction_hash
            ))
        })?;
    trace!(target: "decoder", "Found RollupCreated event emitted by {}", log.address);

    let event = RollupCreated::decode_log_data(&log.data, true)
        .map_err(|e| RollupDecodeError::UnrecognizedReceiptShape(e.to_string()))?;

    Ok(CoreContracts {
        rollup: event.rollupAddress,
        native_token: event.nativeToken,
        inbox: event.inboxAddress,
        outbox: event.outbox,
        rollup_event_inbox: event.rollupEventInbox,
        challenge_manager: event.challengeManager,
        admin_proxy: event.adminProxy,
        sequencer_inbox: event.sequencerInbox,
        bridge: event.bridge,
        upgrade_executor: event.upgradeExecutor,
        validator_utils: event.validatorUtils,
        validator_wallet_creator: event.validatorWalletCreator,
        deployed_at_block_number,
    })
}

fn shape_err(e: alloy_sol_types::Error) -> RollupDecodeError {
    RollupDecodeError::UnrecognizedTransactionShape(e.to_string())
}

fn parse_chain_config(raw: &str) -> RollupDecodeResult<ChainConfig> {
    serde_json::from_str(raw).map_err(|e| {
        RollupDecodeError::UnrecognizedTransactionShape(format!("invalid chain config: {e}"))
    })
}

fn from_v1(params: v1::RollupDeploymentParams) -> RollupDecodeResult<RollupCreation> {
    let config = params.config;
    Ok(RollupCreation {
        version: RollupCreatorVersion::V1,
        chain_config: parse_chain_config(&config.chainConfig)?,
        chain_id: config.chainId,
        owner: config.owner,
        validators: params.validators,
        batch_posters: vec![params.batchPoster],
        batch_poster_manager: None,
        native_token: params.nativeToken,
        max_data_size: params.maxDataSize,
        confirm_period_blocks: config.confirmPeriodBlocks,
        base_stake: config.baseStake,
        wasm_module_root: config.wasmModuleRoot,
        deploy_factories_to_l2: params.deployFactoriesToL2,
    })
}

fn from_v2(params: v2::RollupDeploymentParams) -> RollupDecodeResult<RollupCreation> {
    let config = params.config;
    Ok(RollupCreation {
        version: RollupCreatorVersion::V2,
        chain_config: parse_chain_config(&config.chainConfig)?,
        chain_id: config.chainId,
        owner: config.owner,
        validators: params.validators,
        batch_posters: params.batchPosters,
        batch_poster_manager: (!params.batchPosterManager.is_zero())
            .then_some(params.batchPosterManager),
        native_token: params.nativeToken,
        max_data_size: params.maxDataSize,
        confirm_period_blocks: config.confirmPeriodBlocks,
        base_stake: config.baseStake,
        wasm_module_root: config.wasmModuleRoot,
        deploy_factories_to_l2: params.deployFactoriesToL2,
    })
}
