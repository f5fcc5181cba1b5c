//! # SAML 2.0 Service Provider Metadata
//!
//! Generate the [SAML 2.0 metadata] document an Identity Provider uses to
//! configure its trust relationship with a Service Provider: endpoint URLs,
//! supported bindings, certificates for signature verification and
//! encryption, and requested assertion behaviour.
//!
//! Generation runs in three steps:
//!
//! 1. [`validate`] checks that each private key is accompanied by its
//!    certificate and resolves the capabilities to advertise.
//! 2. [`assemble`] builds the [`EntityDescriptor`] document.
//! 3. [`EntityDescriptor::to_xml`] renders the document.
//!
//! [`generate`] performs all three.
//!
//! ```rust
//! use credibil_saml::Configuration;
//!
//! let config = Configuration::builder()
//!     .issuer("https://sp.example.com")
//!     .callback_url("https://sp.example.com/saml/acs")
//!     .want_assertions_signed(true)
//!     .build();
//!
//! let xml = credibil_saml::generate(&config).expect("should generate");
//! assert!(xml.contains(r#"entityID="https://sp.example.com""#));
//! ```
//!
//! [SAML 2.0 metadata]: https://docs.oasis-open.org/security/saml/v2.0/saml-metadata-2.0-os.pdf

mod config;
mod error;
mod metadata;
mod validate;

pub use credibil_xml::pem;
use tracing::instrument;

pub use self::config::*;
pub use self::error::Error;
pub use self::metadata::*;
pub use self::validate::*;

/// Result type for metadata generation.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Build the metadata document for a Service Provider.
///
/// # Errors
///
/// Returns `Error::ConfigurationError` if a private key is supplied without
/// its certificate.
#[instrument(level = "debug", skip_all, fields(issuer = %config.issuer))]
pub fn metadata(config: &Configuration) -> Result<EntityDescriptor> {
    let caps = validate(config)?;
    tracing::debug!(
        signing_keys = caps.signing_certs.len(),
        encryption = caps.decryption_cert.is_some(),
        "assembling metadata"
    );
    Ok(assemble(config, &caps))
}

/// Generate pretty-printed metadata XML for a Service Provider.
///
/// # Errors
///
/// Returns `Error::ConfigurationError` if a private key is supplied without
/// its certificate, or `Error::Render` if the document cannot be rendered.
pub fn generate(config: &Configuration) -> Result<String> {
    metadata(config)?.to_xml(true)
}
