//! # Precondition Validation
//!
//! Key material in a [`Configuration`] enables capabilities in the metadata:
//! a signing key enables signed requests and a decryption key enables
//! encrypted assertions. A private key is only usable when the matching
//! certificate is published, so a key without its certificate is rejected.
//!
//! A certificate supplied without its private key does not enable anything
//! and is dropped from the metadata.

use tracing::{debug, warn};

use crate::config::{Configuration, SigningCerts};
use crate::error::config_error;
use crate::Result;

/// Capabilities resolved from a validated [`Configuration`].
///
/// Only [`validate`] creates `Capabilities`, so a document assembled from
/// them never publishes an unchecked certificate.
///
/// ```compile_fail
/// let caps = credibil_saml::Capabilities { signing_certs: vec![""], decryption_cert: None };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Capabilities<'a> {
    /// Signing certificates, in the caller's order. Empty when signing is
    /// disabled.
    pub(crate) signing_certs: Vec<&'a str>,

    /// Certificate advertised for encryption, when decryption is enabled.
    pub(crate) decryption_cert: Option<&'a str>,
}

impl<'a> Capabilities<'a> {
    /// Signing certificates, in the caller's order. Empty when signing is
    /// disabled.
    #[must_use]
    pub fn signing_certs(&self) -> &[&'a str] {
        &self.signing_certs
    }

    /// Certificate advertised for encryption, when decryption is enabled.
    #[must_use]
    pub const fn decryption_cert(&self) -> Option<&'a str> {
        self.decryption_cert
    }

    /// Returns `true` if any certificate will be published.
    #[must_use]
    pub const fn has_keys(&self) -> bool {
        !self.signing_certs.is_empty() || self.decryption_cert.is_some()
    }
}

/// Check the cross-field rules between private keys and certificates,
/// resolving the capabilities the metadata will advertise.
///
/// The decryption pairing is checked before the signing pairing.
///
/// # Errors
///
/// Returns `Error::ConfigurationError` if a decryption key is supplied
/// without a decryption certificate, or a signing key without at least one
/// signing certificate.
pub fn validate(config: &Configuration) -> Result<Capabilities<'_>> {
    let decryption_cert = if config.decryption_pvk.is_some() {
        let Some(cert) = config.decryption_cert.as_deref().filter(|c| !is_blank(c)) else {
            return Err(config_error!(
                "missing decryption certificate: decryptionPvk supplied without decryptionCert"
            ));
        };
        Some(cert)
    } else {
        if config.decryption_cert.is_some() {
            warn!("decryption certificate ignored: no decryption key supplied");
        }
        debug!("decryption disabled");
        None
    };

    let signing_certs = if config.private_key.is_some() {
        signing_certs(&config.signing_certs)?
    } else {
        if !config.signing_certs.is_none() {
            warn!("signing certificates ignored: no private key supplied");
        }
        debug!("signing disabled");
        vec![]
    };

    Ok(Capabilities { signing_certs, decryption_cert })
}

fn signing_certs(certs: &SigningCerts) -> Result<Vec<&str>> {
    let certs = certs.as_slice();
    if certs.is_empty() || (certs.len() == 1 && is_blank(&certs[0])) {
        return Err(config_error!(
            "missing signing certificate: privateKey supplied without signingCerts"
        ));
    }
    if let Some(pos) = certs.iter().position(|c| is_blank(c)) {
        return Err(config_error!("empty signing certificate at position {pos}"));
    }
    Ok(certs.iter().map(String::as_str).collect())
}

fn is_blank(cert: &str) -> bool {
    cert.trim().is_empty()
}
