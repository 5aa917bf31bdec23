//! Test utilities for building rollup-creation transactions and receipts.

#![allow(missing_docs, unreachable_pub)]

use crate::{
    abi::{v1, v2, RollupCreated},
    CoreContracts, RollupReceipt, RollupTransaction,
};
use alloy_primitives::{address, b256, Address, Bytes, Log, B256, U256};
use alloy_sol_types::{SolCall, SolEvent};

/// The hash used for every fabricated creation transaction.
pub const CREATION_TX_HASH: B256 =
    b256!("8b4fd1ab2b1f1b39a3f1fd24ba4b4a44f67a8b2b4bcb2a7b0e84f1d0e0f2a6c1");

/// The `RollupCreator` address fabricated transactions are sent to.
pub const ROLLUP_CREATOR: Address = address!("fb83e1d4F2e5bd8e9eA5cD2276ccaFD9bB6E28A7");

/// The parent-chain block fabricated receipts are included in.
pub const CREATION_BLOCK: u64 = 93_216_804;

/// A minimal chain config for chain `412346`.
pub const SAMPLE_CHAIN_CONFIG: &str = r#"{"chainId":412346,"homesteadBlock":0,"daoForkBlock":null,"daoForkSupport":true,"eip150Block":0,"eip150Hash":"0x0000000000000000000000000000000000000000000000000000000000000000","eip155Block":0,"eip158Block":0,"byzantiumBlock":0,"constantinopleBlock":0,"petersburgBlock":0,"istanbulBlock":0,"muirGlacierBlock":0,"berlinBlock":0,"londonBlock":0,"clique":{"period":0,"epoch":0},"arbitrum":{"EnableArbOS":true,"AllowDebugPrecompiles":false,"DataAvailabilityCommittee":false,"InitialArbOSVersion":20,"InitialChainOwner":"0x70997970C51812dc3A010C7d01b50e0d17dc79C8","GenesisBlockNum":0}}"#;

const OWNER: Address = address!("70997970C51812dc3A010C7d01b50e0d17dc79C8");
const BATCH_POSTER: Address = address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC");
const VALIDATOR: Address = address!("90F79bf6EB2c4f870365E785982E1f101E93b906");

fn v2_config(chain_id: u64, chain_config: &str) -> v2::Config {
    v2::Config {
        confirmPeriodBlocks: 150,
        extraChallengeTimeBlocks: 0,
        stakeToken: Address::ZERO,
        baseStake: U256::from(100_000_000_000_000_000u64),
        wasmModuleRoot: B256::repeat_byte(0x0e),
        owner: OWNER,
        loserStakeEscrow: Address::ZERO,
        chainId: U256::from(chain_id),
        chainConfig: chain_config.to_string(),
        genesisBlockNum: 0,
        sequencerInboxMaxTimeVariation: v2::MaxTimeVariation {
            delayBlocks: U256::from(5760),
            futureBlocks: U256::from(48),
            delaySeconds: U256::from(86400),
            futureSeconds: U256::from(3600),
        },
    }
}

/// ABI-encodes a v2.1 `createRollup` call.
pub fn v2_creation_calldata(chain_id: u64, chain_config: &str) -> Bytes {
    v2::createRollupCall {
        deployParams: v2::RollupDeploymentParams {
            config: v2_config(chain_id, chain_config),
            validators: vec![VALIDATOR],
            maxDataSize: U256::from(104_857),
            nativeToken: Address::ZERO,
            deployFactoriesToL2: true,
            maxFeePerGasForRetryables: U256::from(100_000_000),
            batchPosters: vec![BATCH_POSTER],
            batchPosterManager: Address::ZERO,
        },
    }
    .abi_encode()
    .into()
}

/// ABI-encodes a v1.1 `createRollup` call.
pub fn v1_creation_calldata(chain_id: u64, chain_config: &str) -> Bytes {
    let c = v2_config(chain_id, chain_config);
    v1::createRollupCall {
        deployParams: v1::RollupDeploymentParams {
            config: v1::Config {
                confirmPeriodBlocks: c.confirmPeriodBlocks,
                extraChallengeTimeBlocks: c.extraChallengeTimeBlocks,
                stakeToken: c.stakeToken,
                baseStake: c.baseStake,
                wasmModuleRoot: c.wasmModuleRoot,
                owner: c.owner,
                loserStakeEscrow: c.loserStakeEscrow,
                chainId: c.chainId,
                chainConfig: c.chainConfig,
                genesisBlockNum: c.genesisBlockNum,
                sequencerInboxMaxTimeVariation: v1::MaxTimeVariation {
                    delayBlocks: c.sequencerInboxMaxTimeVariation.delayBlocks,
                    futureBlocks: c.sequencerInboxMaxTimeVariation.futureBlocks,
                    delaySeconds: c.sequencerInboxMaxTimeVariation.delaySeconds,
                    futureSeconds: c.sequencerInboxMaxTimeVariation.futureSeconds,
                },
            },
            batchPoster: BATCH_POSTER,
            validators: vec![VALIDATOR],
            maxDataSize: U256::from(104_857),
            nativeToken: Address::ZERO,
            deployFactoriesToL2: true,
            maxFeePerGasForRetryables: U256::from(100_000_000),
        },
    }
    .abi_encode()
    .into()
}

/// Wraps calldata in a mined [RollupTransaction] sent to the [ROLLUP_CREATOR].
pub fn creation_transaction(input: Bytes) -> RollupTransaction {
    RollupTransaction {
        hash: CREATION_TX_HASH,
        to: Some(ROLLUP_CREATOR),
        input,
        block_number: Some(CREATION_BLOCK),
    }
}

/// A set of distinct, recognizable core contract addresses.
pub fn sample_core_contracts() -> CoreContracts {
    CoreContracts {
        rollup: Address::repeat_byte(0x11),
        inbox: Address::repeat_byte(0x22),
        outbox: Address::repeat_byte(0x33),
        rollup_event_inbox: Address::repeat_byte(0x44),
        challenge_manager: Address::repeat_byte(0x55),
        admin_proxy: Address::repeat_byte(0x66),
        sequencer_inbox: Address::repeat_byte(0x77),
        bridge: Address::repeat_byte(0x88),
        upgrade_executor: Address::repeat_byte(0x99),
        validator_utils: Address::repeat_byte(0xaa),
        validator_wallet_creator: Address::repeat_byte(0xbb),
        native_token: Address::ZERO,
        deployed_at_block_number: CREATION_BLOCK,
    }
}

/// Builds the `RollupCreated` log the creator emits for `contracts`.
pub fn rollup_created_log(contracts: &CoreContracts) -> Log {
    let event = RollupCreated {
        rollupAddress: contracts.rollup,
        nativeToken: contracts.native_token,
        inboxAddress: contracts.inbox,
        outbox: contracts.outbox,
        rollupEventInbox: contracts.rollup_event_inbox,
        challengeManager: contracts.challenge_manager,
        adminProxy: contracts.admin_proxy,
        sequencerInbox: contracts.sequencer_inbox,
        bridge: contracts.bridge,
        upgradeExecutor: contracts.upgrade_executor,
        validatorUtils: contracts.validator_utils,
        validatorWalletCreator: contracts.validator_wallet_creator,
    };
    Log { address: ROLLUP_CREATOR, data: event.encode_log_data() }
}

/// Builds a successful receipt carrying the `RollupCreated` log for `contracts`.
pub fn creation_receipt(contracts: &CoreContracts) -> RollupReceipt {
    RollupReceipt {
        transaction_hash: CREATION_TX_HASH,
        status: true,
        block_number: Some(contracts.deployed_at_block_number),
        logs: vec![rollup_created_log(contracts)],
    }
}
