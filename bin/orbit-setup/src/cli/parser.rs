//! Parser functions for CLI arguments.

use reqwest::Url;

/// Validates an HTTP(S) RPC endpoint, keeping it as written.
pub(crate) fn parse_rpc_url(s: &str) -> Result<String, String> {
    let url = Url::parse(s).map_err(|e| format!("Invalid URL {s}: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(s.to_string()),
        scheme => Err(format!("Unsupported RPC scheme {scheme}, expected http or https")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rpc_url() {
        let url = "http://localhost:8547";
        assert_eq!(parse_rpc_url(url).unwrap(), url);
        assert!(parse_rpc_url("ws://localhost:8548").is_err());
        assert!(parse_rpc_url("localhost").is_err());
    }
}
