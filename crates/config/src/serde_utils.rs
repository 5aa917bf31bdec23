//! Serde adapters used by the artifact schemas.

/// Encodes integers as decimal strings.
///
/// JSON consumers that parse numbers as IEEE-754 doubles lose precision above 2^53. Fields that
/// may exceed that range are written as strings instead.
pub mod decimal {
    use core::{fmt::Display, str::FromStr};
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serializes `value` as its decimal string.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Display,
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    /// Parses a decimal string.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: FromStr,
        T::Err: Display,
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer)?.parse().map_err(D::Error::custom)
    }
}

/// Encodes addresses with their EIP-55 checksum casing.
pub mod checksum {
    use alloy_primitives::Address;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `address` as a checksummed hex string.
    pub fn serialize<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&address.to_checksum(None))
    }

    /// Parses a hex address of any casing.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        Address::deserialize(deserializer)
    }
}

/// Embeds a value as a JSON document inside a JSON string, as Nitro's `chain.info-json` expects.
pub mod json_string {
    use serde::{
        de::{DeserializeOwned, Error as _},
        ser::Error as _,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    /// Serializes `value` to a JSON string, then serializes that string.
    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        let encoded = serde_json::to_string(value).map_err(S::Error::custom)?;
        serializer.serialize_str(&encoded)
    }

    /// Deserializes a string, then parses its contents as JSON.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let encoded = String::deserialize(deserializer)?;
        serde_json::from_str(&encoded).map_err(D::Error::custom)
    }
}
