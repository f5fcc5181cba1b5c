//! # Service Provider Metadata
//!
//! The SAML 2.0 metadata document describing a Service Provider: an
//! `EntityDescriptor` containing a single `SPSSODescriptor`.
//!
//! Child elements of the `SPSSODescriptor` are declared in the order the
//! metadata schema requires: `KeyDescriptor`, `SingleLogoutService`,
//! `NameIDFormat`, then `AssertionConsumerService`.
//!
//! See <https://docs.oasis-open.org/security/saml/v2.0/saml-metadata-2.0-os.pdf>

use credibil_xml::pem;
use serde::Serialize;

use crate::validate::Capabilities;
use crate::{Configuration, Result};

/// The SAML 2.0 metadata namespace.
pub const METADATA_NS: &str = "urn:oasis:names:tc:SAML:2.0:metadata";

/// The XML Digital Signature namespace, bound to the `ds` prefix.
pub const XMLDSIG_NS: &str = "http://www.w3.org/2000/09/xmldsig#";

/// The SAML 2.0 protocol identifier advertised in
/// `protocolSupportEnumeration`.
pub const PROTOCOL_NS: &str = "urn:oasis:names:tc:SAML:2.0:protocol";

/// Media type for publishing SAML metadata.
pub const METADATA_CONTENT_TYPE: &str = "application/samlmetadata+xml";

/// Content encryption algorithms advertised for encrypted assertions, in
/// order of preference.
///
/// This list must match what the assertion decryption code accepts.
/// Advertising an algorithm that cannot be decrypted will break logins.
pub const ENCRYPTION_ALGORITHMS: [EncryptionAlgorithm; 4] = [
    EncryptionAlgorithm::Aes256Gcm,
    EncryptionAlgorithm::Aes128Gcm,
    EncryptionAlgorithm::Aes256Cbc,
    EncryptionAlgorithm::Aes128Cbc,
];

/// Root metadata element.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Default namespace.
    #[serde(rename = "@xmlns")]
    pub xmlns: String,

    /// Namespace for embedded X.509 data.
    #[serde(rename = "@xmlns:ds")]
    pub xmlns_ds: String,

    /// The Service Provider's entity identifier.
    #[serde(rename = "@entityID")]
    pub entity_id: String,

    /// Document identifier derived from the entity identifier.
    #[serde(rename = "@ID")]
    pub id: String,

    /// The Service Provider role descriptor.
    #[serde(rename = "SPSSODescriptor")]
    pub sp_sso_descriptor: SpSsoDescriptor,
}

impl EntityDescriptor {
    /// Render the document as XML.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be serialized.
    pub fn to_xml(&self, pretty: bool) -> Result<String> {
        Ok(credibil_xml::render(self, pretty)?)
    }
}

/// Service Provider SSO role descriptor.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SpSsoDescriptor {
    /// Supported protocols.
    #[serde(rename = "@protocolSupportEnumeration")]
    pub protocol_support_enumeration: String,

    /// Set when the Service Provider signs its authentication requests.
    #[serde(rename = "@AuthnRequestsSigned", skip_serializing_if = "Option::is_none")]
    pub authn_requests_signed: Option<bool>,

    /// Set when the Service Provider requires signed assertions. Never
    /// written as `false`.
    #[serde(rename = "@WantAssertionsSigned", skip_serializing_if = "Option::is_none")]
    pub want_assertions_signed: Option<bool>,

    /// Published keys. `None` when no key material is configured; never an
    /// empty list.
    #[serde(rename = "KeyDescriptor", skip_serializing_if = "Option::is_none")]
    pub key_descriptors: Option<Vec<KeyDescriptor>>,

    /// Single Logout endpoint.
    #[serde(rename = "SingleLogoutService", skip_serializing_if = "Option::is_none")]
    pub single_logout_service: Option<Endpoint>,

    /// Requested `NameID` format.
    #[serde(rename = "NameIDFormat", skip_serializing_if = "Option::is_none")]
    pub name_id_format: Option<String>,

    /// Assertion Consumer Service endpoint.
    #[serde(rename = "AssertionConsumerService")]
    pub assertion_consumer_service: IndexedEndpoint,
}

/// A published key and its intended use.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct KeyDescriptor {
    /// Key use.
    #[serde(rename = "@use")]
    pub key_use: KeyUse,

    /// The certificate.
    #[serde(rename = "ds:KeyInfo")]
    pub key_info: KeyInfo,

    /// Supported encryption methods (encryption keys only).
    #[serde(rename = "EncryptionMethod", skip_serializing_if = "Vec::is_empty")]
    pub encryption_methods: Vec<EncryptionMethod>,
}

/// XML-DSig `KeyInfo`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct KeyInfo {
    /// X.509 data.
    #[serde(rename = "ds:X509Data")]
    pub x509_data: X509Data,
}

/// XML-DSig `X509Data`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct X509Data {
    /// Base64 DER certificate, without PEM envelope.
    #[serde(rename = "ds:X509Certificate")]
    pub x509_certificate: X509Certificate,
}

/// XML-DSig `X509Certificate`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct X509Certificate {
    /// Base64 content.
    #[serde(rename = "$text")]
    pub value: String,
}

impl KeyInfo {
    /// Wrap a PEM or bare base64 certificate.
    #[must_use]
    pub fn from_certificate(cert: &str) -> Self {
        Self {
            x509_data: X509Data {
                x509_certificate: X509Certificate { value: pem::normalize(cert) },
            },
        }
    }
}

/// Key use.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyUse {
    /// Signature verification.
    Signing,

    /// Encryption.
    Encryption,
}

impl KeyUse {
    /// The `use` attribute value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signing => "signing",
            Self::Encryption => "encryption",
        }
    }
}

/// An `EncryptionMethod` element.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct EncryptionMethod {
    /// Algorithm URI.
    #[serde(rename = "@Algorithm")]
    pub algorithm: EncryptionAlgorithm,
}

/// XML Encryption content algorithms.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    /// AES-256 in GCM mode.
    #[serde(rename = "http://www.w3.org/2009/xmlenc11#aes256-gcm")]
    Aes256Gcm,

    /// AES-128 in GCM mode.
    #[serde(rename = "http://www.w3.org/2009/xmlenc11#aes128-gcm")]
    Aes128Gcm,

    /// AES-256 in CBC mode.
    #[serde(rename = "http://www.w3.org/2001/04/xmlenc#aes256-cbc")]
    Aes256Cbc,

    /// AES-128 in CBC mode.
    #[serde(rename = "http://www.w3.org/2001/04/xmlenc#aes128-cbc")]
    Aes128Cbc,
}

impl EncryptionAlgorithm {
    /// The algorithm URI.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::Aes256Gcm => "http://www.w3.org/2009/xmlenc11#aes256-gcm",
            Self::Aes128Gcm => "http://www.w3.org/2009/xmlenc11#aes128-gcm",
            Self::Aes256Cbc => "http://www.w3.org/2001/04/xmlenc#aes256-cbc",
            Self::Aes128Cbc => "http://www.w3.org/2001/04/xmlenc#aes128-cbc",
        }
    }
}

/// SAML protocol bindings.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub enum Binding {
    /// HTTP POST binding.
    #[serde(rename = "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST")]
    HttpPost,
}

impl Binding {
    /// The binding URI.
    #[must_use]
    pub const fn uri(self) -> &'static str {
        match self {
            Self::HttpPost => "urn:oasis:names:tc:SAML:2.0:bindings:HTTP-POST",
        }
    }
}

/// A protocol endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Endpoint {
    /// Binding.
    #[serde(rename = "@Binding")]
    pub binding: Binding,

    /// Endpoint URL.
    #[serde(rename = "@Location")]
    pub location: String,
}

/// An indexed protocol endpoint.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct IndexedEndpoint {
    /// Endpoint index.
    #[serde(rename = "@index")]
    pub index: u16,

    /// Whether this is the default endpoint.
    #[serde(rename = "@isDefault")]
    pub is_default: bool,

    /// Binding.
    #[serde(rename = "@Binding")]
    pub binding: Binding,

    /// Endpoint URL.
    #[serde(rename = "@Location")]
    pub location: String,
}

/// Assemble the metadata document for a validated configuration.
///
/// Signing keys are listed before the encryption key. No key list is
/// created when `caps` holds no certificates.
#[must_use]
pub fn assemble(config: &Configuration, caps: &Capabilities<'_>) -> EntityDescriptor {
    let key_descriptors = caps.has_keys().then(|| {
        let signing = caps.signing_certs.iter().map(|cert| KeyDescriptor {
            key_use: KeyUse::Signing,
            key_info: KeyInfo::from_certificate(cert),
            encryption_methods: vec![],
        });
        let encryption = caps.decryption_cert.map(|cert| KeyDescriptor {
            key_use: KeyUse::Encryption,
            key_info: KeyInfo::from_certificate(cert),
            encryption_methods: ENCRYPTION_ALGORITHMS
                .iter()
                .map(|&algorithm| EncryptionMethod { algorithm })
                .collect(),
        });
        signing.chain(encryption).collect::<Vec<_>>()
    });

    let single_logout_service = config
        .logout_callback_url
        .as_ref()
        .map(|url| Endpoint { binding: Binding::HttpPost, location: url.clone() });

    let assertion_consumer_service = IndexedEndpoint {
        index: 1,
        is_default: true,
        binding: Binding::HttpPost,
        location: config.callback_url.clone(),
    };

    let sp_sso_descriptor = SpSsoDescriptor {
        protocol_support_enumeration: PROTOCOL_NS.to_string(),
        authn_requests_signed: (!caps.signing_certs.is_empty()).then_some(true),
        want_assertions_signed: config.want_assertions_signed.then_some(true),
        key_descriptors,
        single_logout_service,
        name_id_format: config.identifier_format.clone(),
        assertion_consumer_service,
    };

    EntityDescriptor {
        xmlns: METADATA_NS.to_string(),
        xmlns_ds: XMLDSIG_NS.to_string(),
        entity_id: config.issuer.clone(),
        id: entity_id_to_xml_id(&config.issuer),
        sp_sso_descriptor,
    }
}

/// Derive an XML `ID` from an entity identifier by replacing every character
/// other than an ASCII letter, digit or underscore with `_`.
///
/// The result has the same UTF-16 length as the identifier: a character
/// outside the Basic Multilingual Plane becomes two underscores.
#[must_use]
pub fn entity_id_to_xml_id(entity_id: &str) -> String {
    let mut id = String::with_capacity(entity_id.len());
    for c in entity_id.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            id.push(c);
        } else {
            id.extend(std::iter::repeat_n('_', c.len_utf16()));
        }
    }
    id
}
