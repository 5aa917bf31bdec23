#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod abi;

mod chain_config;
pub use chain_config::{ArbitrumChainParams, ChainConfig};

mod contracts;
pub use contracts::CoreContracts;

mod types;
pub use types::{RollupReceipt, RollupTransaction};

mod decoder;
pub use decoder::{
    decode_creation_receipt, decode_creation_transaction, RollupCreation, RollupCreatorVersion,
};

mod errors;
pub use errors::{RollupDecodeError, RollupDecodeResult};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
