//! The chain config embedded in a rollup-creation transaction.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The genesis and runtime parameters of an Orbit chain.
///
/// Only the fields this workspace reads are typed. Everything else in the document is carried
/// through untouched in [ChainConfig::extra] so that re-serializing the config reproduces the
/// content the deployer submitted on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// The chain ID of the rollup.
    pub chain_id: u64,
    /// Arbitrum-specific parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbitrum: Option<ArbitrumChainParams>,
    /// All remaining genesis fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChainConfig {
    /// Returns `true` if the chain posts its data to a data availability committee (AnyTrust)
    /// rather than to the parent chain.
    pub fn is_anytrust(&self) -> bool {
        self.arbitrum.as_ref().and_then(|a| a.data_availability_committee).unwrap_or(false)
    }
}

/// The `arbitrum` section of a [ChainConfig].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArbitrumChainParams {
    /// Whether the chain uses a data availability committee.
    #[serde(
        rename = "DataAvailabilityCommittee",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub data_availability_committee: Option<bool>,
    /// All remaining Arbitrum parameters.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "chainId": 412346,
        "homesteadBlock": 0,
        "daoForkSupport": true,
        "clique": { "period": 0, "epoch": 0 },
        "arbitrum": {
            "EnableArbOS": true,
            "AllowDebugPrecompiles": false,
            "DataAvailabilityCommittee": true,
            "InitialArbOSVersion": 20,
            "InitialChainOwner": "0x70997970C51812dc3A010C7d01b50e0d17dc79C8",
            "GenesisBlockNum": 0
        }
    }"#;

    #[test]
    fn test_deserialize_chain_config() {
        let cfg: ChainConfig = serde_json::from_str(RAW).unwrap();
        assert_eq!(cfg.chain_id, 412346);
        assert!(cfg.is_anytrust());

        let arbitrum = cfg.arbitrum.as_ref().unwrap();
        assert_eq!(arbitrum.data_availability_committee, Some(true));
        assert_eq!(arbitrum.extra.get("InitialArbOSVersion"), Some(&Value::from(20)));
        assert_eq!(cfg.extra.get("daoForkSupport"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_reserialize_keeps_unknown_fields() {
        let cfg: ChainConfig = serde_json::from_str(RAW).unwrap();
        let value = serde_json::to_value(&cfg).unwrap();
        let original: Value = serde_json::from_str(RAW).unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn test_rollup_without_arbitrum_section() {
        let cfg: ChainConfig = serde_json::from_str(r#"{"chainId": 7}"#).unwrap();
        assert_eq!(cfg.chain_id, 7);
        assert!(!cfg.is_anytrust());
        assert!(cfg.extra.is_empty());
    }

    #[test]
    fn test_missing_chain_id_is_rejected() {
        assert!(serde_json::from_str::<ChainConfig>(r#"{"homesteadBlock": 0}"#).is_err());
    }
}
