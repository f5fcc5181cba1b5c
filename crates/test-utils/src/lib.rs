//! # Test Fixtures
//!
//! Certificates and keys used by the SAML metadata tests. The certificates
//! are well-formed PEM envelopes around synthetic DER bytes; they are not
//! parseable X.509 and must never be used outside tests.

use std::sync::LazyLock;

use base64ct::{Base64, Encoding};

/// Service Provider entity identifier.
pub const ISSUER: &str = "https://sp.example.com/saml";

/// Assertion Consumer Service URL.
pub const CALLBACK_URL: &str = "https://sp.example.com/saml/acs";

/// Single Logout URL.
pub const LOGOUT_URL: &str = "https://sp.example.com/saml/slo";

/// Email `NameID` format.
pub const EMAIL_FORMAT: &str = "urn:oasis:names:tc:SAML:1.1:nameid-format:emailAddress";

/// Current signing certificate.
pub static SIGNING_CERT: LazyLock<Certificate> = LazyLock::new(|| Certificate::new(b"signing"));

/// Next signing certificate, published ahead of a key rollover.
pub static ROLLOVER_CERT: LazyLock<Certificate> = LazyLock::new(|| Certificate::new(b"rollover"));

/// Encryption certificate.
pub static DECRYPTION_CERT: LazyLock<Certificate> =
    LazyLock::new(|| Certificate::new(b"decryption"));

/// Signing private key.
pub static PRIVATE_KEY: LazyLock<String> = LazyLock::new(|| pem("PRIVATE KEY", b"signing key"));

/// Decryption private key.
pub static DECRYPTION_KEY: LazyLock<String> =
    LazyLock::new(|| pem("PRIVATE KEY", b"decryption key"));

/// A synthetic certificate in PEM and bare base64 form.
#[derive(Clone, Debug)]
pub struct Certificate {
    /// PEM encoding, with envelope and line breaks.
    pub pem: String,

    /// Base64 content, as embedded in metadata.
    pub base64: String,
}

impl Certificate {
    /// Create a certificate from a label. The label is repeated to give the
    /// DER bytes a realistic length so the PEM body spans several lines.
    #[must_use]
    pub fn new(label: &[u8]) -> Self {
        let mut der = vec![0x30, 0x82, 0x01, 0x0a];
        der.extend(label.iter().cycle().take(180));
        Self { pem: pem("CERTIFICATE", &der), base64: Base64::encode_string(&der) }
    }
}

/// Encode bytes as a PEM block with 64-character lines.
#[must_use]
pub fn pem(label: &str, der: &[u8]) -> String {
    let encoded = Base64::encode_string(der);
    let mut pem = format!("-----BEGIN {label}-----\n");
    for line in encoded.as_bytes().chunks(64) {
        pem.push_str(&String::from_utf8_lossy(line));
        pem.push('\n');
    }
    pem.push_str(&format!("-----END {label}-----\n"));
    pem
}
