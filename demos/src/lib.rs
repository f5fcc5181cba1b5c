//! # Demos
//!
//! Shared helpers for the demo binaries.

pub mod server;

use std::path::Path;

use anyhow::{Context, Result};
use credibil_saml::Configuration;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Read a JSON Service Provider configuration from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid
/// configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading configuration from {}", path.display()))?;
    parse_config(&json)
}

/// Parse a JSON Service Provider configuration.
///
/// # Errors
///
/// Returns an error if the JSON is not a valid configuration.
pub fn parse_config(json: &str) -> Result<Configuration> {
    serde_json::from_str(json).context("parsing configuration")
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_utils::{CALLBACK_URL, ISSUER, PRIVATE_KEY, SIGNING_CERT};

    use super::*;

    #[test]
    fn parse() {
        let json = json!({
            "issuer": ISSUER,
            "callbackUrl": CALLBACK_URL,
            "signingCerts": SIGNING_CERT.pem,
            "privateKey": *PRIVATE_KEY
        })
        .to_string();

        let config = parse_config(&json).expect("should parse");
        assert_eq!(config.issuer, ISSUER);
        assert_eq!(config.signing_certs.as_slice(), [SIGNING_CERT.pem.clone()]);
    }

    #[test]
    fn parse_missing_callback() {
        let err = parse_config(&json!({"issuer": ISSUER}).to_string()).expect_err("should fail");
        assert!(err.to_string().contains("parsing configuration"));
    }
}
