//! Operator key material and address derivation.

use alloy_primitives::{Address, B256};
use alloy_signer_local::PrivateKeySigner;
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The number of hex digits in a secp256k1 secret.
const KEY_HEX_LEN: usize = 64;

/// An error parsing or using an operator private key.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key does not have 64 hex digits once the `0x` prefix is removed.
    #[error("expected {KEY_HEX_LEN} hex digits, got {0}")]
    InvalidLength(usize),
    /// The key contains non-hex characters.
    #[error("key is not valid hex")]
    InvalidHex,
    /// The key is zero or not below the secp256k1 group order.
    #[error("key is not a valid secp256k1 secret")]
    InvalidScalar,
}

/// A 32-byte secp256k1 signing key.
///
/// Parsing accepts the key with or without its `0x` prefix and rejects secrets outside the
/// secp256k1 scalar range. The [fmt::Debug] output is redacted so that the key never reaches the
/// logs.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(B256);

impl PrivateKey {
    /// Wraps raw key bytes. The scalar is validated when the address is derived.
    pub const fn from_bytes(bytes: B256) -> Self {
        Self(bytes)
    }

    /// Derives the account address controlled by this key.
    pub fn address(&self) -> Result<Address, KeyError> {
        PrivateKeySigner::from_bytes(&self.0)
            .map(|signer| signer.address())
            .map_err(|_| KeyError::InvalidScalar)
    }

    /// Returns the key as `0x`-prefixed hex.
    pub fn to_prefixed_hex(&self) -> String {
        self.0.to_string()
    }

    /// Returns the key as bare hex, the form Nitro's wallet options expect.
    pub fn to_unprefixed_hex(&self) -> String {
        alloy_primitives::hex::encode(self.0)
    }
}

impl FromStr for PrivateKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.len() != KEY_HEX_LEN {
            return Err(KeyError::InvalidLength(digits.len()));
        }
        let key = B256::from_str(digits).map(Self).map_err(|_| KeyError::InvalidHex)?;
        key.address()?;
        Ok(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(<redacted>)")
    }
}

/// Derives the checksummable account address for a hex-encoded private key.
pub fn derive_address(key: &str) -> Result<Address, KeyError> {
    key.parse::<PrivateKey>()?.address()
}

/// The signing keys of the three operator roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorKeys {
    /// Owns the rollup and collects its fees.
    pub deployer: PrivateKey,
    /// Stakes on and validates assertions.
    pub validator: PrivateKey,
    /// Posts batches to the sequencer inbox.
    pub batch_poster: PrivateKey,
}

impl OperatorKeys {
    /// Derives the address of every role.
    pub fn addresses(&self) -> Result<OperatorAddresses, KeyError> {
        Ok(OperatorAddresses {
            deployer: self.deployer.address()?,
            validator: self.validator.address()?,
            batch_poster: self.batch_poster.address()?,
        })
    }
}

/// The addresses derived from [OperatorKeys].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorAddresses {
    /// The deployer's address.
    pub deployer: Address,
    /// The validator's address.
    pub validator: Address,
    /// The batch poster's address.
    pub batch_poster: Address,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use proptest::{prelude::any, proptest};

    const KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn test_derive_known_address() {
        let addr = derive_address(KEY).unwrap();
        assert_eq!(addr, address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"));
        assert_eq!(addr.to_checksum(None), "0x70997970C51812dc3A010C7d01b50e0d17dc79C8");
    }

    #[test]
    fn test_prefix_is_optional() {
        let bare = KEY.strip_prefix("0x").unwrap();
        assert_eq!(derive_address(bare).unwrap(), derive_address(KEY).unwrap());
        assert_eq!(bare.parse::<PrivateKey>().unwrap(), KEY.parse::<PrivateKey>().unwrap());
    }

    #[test]
    fn test_hex_renderings() {
        let key: PrivateKey = KEY.parse().unwrap();
        assert_eq!(key.to_prefixed_hex(), KEY);
        assert_eq!(key.to_unprefixed_hex(), &KEY[2..]);
    }

    #[test]
    fn test_invalid_length() {
        assert_eq!(derive_address("0x1234"), Err(KeyError::InvalidLength(4)));
        assert_eq!(derive_address(""), Err(KeyError::InvalidLength(0)));
        let long = format!("{KEY}00");
        assert_eq!(derive_address(&long), Err(KeyError::InvalidLength(66)));
    }

    #[test]
    fn test_invalid_hex() {
        let key = format!("0x{}", "zz".repeat(32));
        assert_eq!(derive_address(&key), Err(KeyError::InvalidHex));
    }

    #[test]
    fn test_invalid_scalar() {
        let zero = format!("0x{}", "00".repeat(32));
        assert_eq!(derive_address(&zero), Err(KeyError::InvalidScalar));
        let above_order = format!("0x{}", "ff".repeat(32));
        assert_eq!(derive_address(&above_order), Err(KeyError::InvalidScalar));
    }

    #[test]
    fn test_parse_rejects_invalid_scalar() {
        let zero = format!("0x{}", "00".repeat(32));
        assert_eq!(zero.parse::<PrivateKey>(), Err(KeyError::InvalidScalar));
        let order = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";
        assert_eq!(order.parse::<PrivateKey>(), Err(KeyError::InvalidScalar));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key: PrivateKey = KEY.parse().unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains(&KEY[2..]));
        assert_eq!(rendered, "PrivateKey(<redacted>)");
    }

    #[test]
    fn test_operator_addresses() {
        let keys = OperatorKeys {
            deployer: "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse()
                .unwrap(),
            validator: KEY.parse().unwrap(),
            batch_poster: "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a"
                .parse()
                .unwrap(),
        };
        let addresses = keys.addresses().unwrap();
        assert_eq!(addresses.deployer, address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266"));
        assert_eq!(addresses.validator, address!("70997970C51812dc3A010C7d01b50e0d17dc79C8"));
        assert_eq!(addresses.batch_poster, address!("3C44CdDdB6a900fa2b585dd299e03d12FA4293BC"));
    }

    proptest! {
        #[test]
        fn test_derivation_is_deterministic(bytes in any::<[u8; 32]>()) {
            let key = PrivateKey::from_bytes(B256::from(bytes));
            let hex = key.to_prefixed_hex();
            assert_eq!(key.address(), key.address());
            assert_eq!(derive_address(&hex), key.address());
        }
    }
}
