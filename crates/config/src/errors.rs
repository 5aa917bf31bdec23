//! Error types for the `orbit-config` crate.

use crate::KeyError;
use alloy_primitives::B256;
use orbit_rollup::RollupDecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised by any stage of config generation.
///
/// Every stage fails fast, so the variant identifies the stage that stopped the run.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An operator private key is not 32 bytes of hex, or not a valid secp256k1 secret.
    #[error("Invalid private key format: {0}")]
    InvalidKeyFormat(#[from] KeyError),
    /// The transaction hash is not `0x` followed by 64 hex digits.
    #[error("Invalid transaction hash {0:?}: expected 0x followed by 64 hex digits")]
    InvalidTransactionHash(String),
    /// The parent chain has no transaction or receipt for the hash.
    #[error("Transaction {0} not found on the parent chain")]
    TransactionNotFound(B256),
    /// The parent-chain RPC endpoint could not be reached or returned a malformed response.
    #[error("Parent chain RPC unavailable: {0}")]
    RpcUnavailable(String),
    /// The transaction is not a recognized rollup creation.
    #[error("Unrecognized rollup creation transaction: {0}")]
    UnrecognizedTransactionShape(String),
    /// The receipt does not describe a rollup deployment.
    #[error("Unrecognized rollup creation receipt: {0}")]
    UnrecognizedReceiptShape(String),
    /// An artifact could not be encoded.
    #[error("Failed to encode artifact: {0}")]
    Serialization(#[from] serde_json::Error),
    /// An artifact could not be written to disk.
    #[error("Failed to write {}: {source}", path.display())]
    Persistence {
        /// The artifact path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl From<RollupDecodeError> for ConfigError {
    fn from(e: RollupDecodeError) -> Self {
        match e {
            RollupDecodeError::UnrecognizedTransactionShape(msg) => {
                Self::UnrecognizedTransactionShape(msg)
            }
            RollupDecodeError::UnrecognizedReceiptShape(msg) => Self::UnrecognizedReceiptShape(msg),
        }
    }
}

/// A [Result] alias for the [ConfigError] type.
pub type ConfigResult<T> = Result<T, ConfigError>;
