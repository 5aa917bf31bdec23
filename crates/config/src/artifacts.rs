//! Serialization and persistence of the generated configs.

use crate::{ConfigError, ConfigResult};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// The file name of the Nitro node config.
pub const NODE_CONFIG_FILE: &str = "node-config.json";

/// The file name of the L3 deployment config.
pub const L3_CONFIG_FILE: &str = "l3-config.json";

/// How an artifact is laid out on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactEncoding {
    /// Indented with two spaces.
    Pretty,
    /// A single line.
    Compact,
}

/// Encodes `value` as JSON.
pub fn encode_artifact<T: Serialize + ?Sized>(
    value: &T,
    encoding: ArtifactEncoding,
) -> ConfigResult<Vec<u8>> {
    let bytes = match encoding {
        ArtifactEncoding::Pretty => serde_json::to_vec_pretty(value)?,
        ArtifactEncoding::Compact => serde_json::to_vec(value)?,
    };
    Ok(bytes)
}

/// Encodes `value` and writes it to `path`, replacing any existing file.
///
/// Fails with [ConfigError::Persistence] if the file cannot be written. The parent directory is
/// not created.
pub async fn write_artifact<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    encoding: ArtifactEncoding,
) -> ConfigResult<()> {
    let bytes = encode_artifact(value, encoding)?;
    tokio::fs::write(path, &bytes)
        .await
        .map_err(|source| ConfigError::Persistence { path: path.to_path_buf(), source })?;
    debug!(target: "artifacts", "Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encodings() {
        let value = json!({ "a": 1 });
        assert_eq!(encode_artifact(&value, ArtifactEncoding::Compact).unwrap(), br#"{"a":1}"#);
        assert_eq!(
            encode_artifact(&value, ArtifactEncoding::Pretty).unwrap(),
            b"{\n  \"a\": 1\n}".to_vec()
        );
    }

    #[tokio::test]
    async fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(L3_CONFIG_FILE);
        std::fs::write(&path, "stale contents that are longer than the artifact").unwrap();

        write_artifact(&path, &json!({ "b": true }), ArtifactEncoding::Compact).await.unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), r#"{"b":true}"#);
    }

    #[tokio::test]
    async fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(NODE_CONFIG_FILE);

        let err = write_artifact(&path, &json!({}), ArtifactEncoding::Pretty).await.unwrap_err();
        match err {
            ConfigError::Persistence { path: failed, .. } => assert_eq!(failed, path),
            e => panic!("unexpected error: {e}"),
        }
    }
}
