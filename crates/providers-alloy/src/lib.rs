#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod chain_reader;
pub use chain_reader::AlloyChainReader;

mod rpc;
pub use rpc::{RpcLog, RpcReceipt, RpcTransaction};
