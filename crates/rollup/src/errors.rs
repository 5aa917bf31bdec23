//! Error types for the `orbit-rollup` crate.

use thiserror::Error;

/// An error decoding a rollup-creation transaction or its receipt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RollupDecodeError {
    /// The transaction is not a recognized `createRollup` call, or its embedded chain config
    /// could not be parsed.
    #[error("Unrecognized rollup creation transaction: {0}")]
    UnrecognizedTransactionShape(String),
    /// The receipt does not carry a well-formed `RollupCreated` event.
    #[error("Unrecognized rollup creation receipt: {0}")]
    UnrecognizedReceiptShape(String),
}

/// A [Result] alias for the [RollupDecodeError] type.
pub type RollupDecodeResult<T> = Result<T, RollupDecodeError>;
