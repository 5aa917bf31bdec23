//! Solidity bindings for the Arbitrum `RollupCreator` contract.
//!
//! <https://github.com/OffchainLabs/nitro-contracts/blob/main/src/rollup/RollupCreator.sol>
//!
//! The creator's `createRollup` entrypoint changed its parameter struct between the v1.1 and v2.1
//! releases, which changes the function selector. Each release lives in its own module so that the
//! generated types don't collide.

use alloy_sol_types::sol;

/// Bindings for the v1.1 `RollupCreator`, which accepts a single batch poster.
pub mod v1 {
    use super::sol;

    sol! {
        /// @notice Sequencer inbox delay bounds.
        #[derive(Debug, PartialEq, Eq)]
        struct MaxTimeVariation {
            uint256 delayBlocks;
            uint256 futureBlocks;
            uint256 delaySeconds;
            uint256 futureSeconds;
        }

        /// @notice Rollup configuration passed to the rollup admin logic on creation.
        #[derive(Debug, PartialEq, Eq)]
        struct Config {
            uint64 confirmPeriodBlocks;
            uint64 extraChallengeTimeBlocks;
            address stakeToken;
            uint256 baseStake;
            bytes32 wasmModuleRoot;
            address owner;
            address loserStakeEscrow;
            uint256 chainId;
            string chainConfig;
            uint64 genesisBlockNum;
            MaxTimeVariation sequencerInboxMaxTimeVariation;
        }

        /// @notice Parameters of a single rollup deployment.
        #[derive(Debug, PartialEq, Eq)]
        struct RollupDeploymentParams {
            Config config;
            address batchPoster;
            address[] validators;
            uint256 maxDataSize;
            address nativeToken;
            bool deployFactoriesToL2;
            uint256 maxFeePerGasForRetryables;
        }

        /// @notice Deploys and initializes a new rollup.
        #[derive(Debug, PartialEq, Eq)]
        function createRollup(RollupDeploymentParams calldata deployParams)
            external
            payable
            returns (address);
    }
}

/// Bindings for the v2.1 `RollupCreator`, which accepts a batch poster set and a manager.
pub mod v2 {
    use super::sol;

    sol! {
        /// @notice Sequencer inbox delay bounds.
        #[derive(Debug, PartialEq, Eq)]
        struct MaxTimeVariation {
            uint256 delayBlocks;
            uint256 futureBlocks;
            uint256 delaySeconds;
            uint256 futureSeconds;
        }

        /// @notice Rollup configuration passed to the rollup admin logic on creation.
        #[derive(Debug, PartialEq, Eq)]
        struct Config {
            uint64 confirmPeriodBlocks;
            uint64 extraChallengeTimeBlocks;
            address stakeToken;
            uint256 baseStake;
            bytes32 wasmModuleRoot;
            address owner;
            address loserStakeEscrow;
            uint256 chainId;
            string chainConfig;
            uint64 genesisBlockNum;
            MaxTimeVariation sequencerInboxMaxTimeVariation;
        }

        /// @notice Parameters of a single rollup deployment.
        #[derive(Debug, PartialEq, Eq)]
        struct RollupDeploymentParams {
            Config config;
            address[] validators;
            uint256 maxDataSize;
            address nativeToken;
            bool deployFactoriesToL2;
            uint256 maxFeePerGasForRetryables;
            address[] batchPosters;
            address batchPosterManager;
        }

        /// @notice Deploys and initializes a new rollup.
        #[derive(Debug, PartialEq, Eq)]
        function createRollup(RollupDeploymentParams calldata deployParams)
            external
            payable
            returns (address);
    }
}

sol! {
    /// @notice Emitted by the `RollupCreator` once every core contract has been deployed.
    #[derive(Debug, PartialEq, Eq)]
    event RollupCreated(
        address indexed rollupAddress,
        address indexed nativeToken,
        address inboxAddress,
        address outbox,
        address rollupEventInbox,
        address challengeManager,
        address adminProxy,
        address sequencerInbox,
        address bridge,
        address upgradeExecutor,
        address validatorUtils,
        address validatorWalletCreator
    );
}
