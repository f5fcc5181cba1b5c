//! # XML Rendering
//!
//! Helpers shared by the Credibil SAML crates for turning typed SAML
//! structures into XML text.
//!
//! Structures are described with `serde` attributes understood by
//! [`quick_xml::se`]: field names prefixed with `@` are written as XML
//! attributes, `$text` denotes element text content, and sequences are
//! written as repeated sibling elements.
//!
//! The [`pem`] module normalizes X.509 certificates before they are embedded
//! as element text.

pub mod pem;

use quick_xml::errors::serialize::SeError;
use quick_xml::se::Serializer;
use serde::Serialize;
use thiserror::Error;

/// The XML declaration prepended to every rendered document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Errors raised while rendering a document.
#[derive(Debug, Error)]
pub enum Error {
    /// The document could not be serialized to XML.
    #[error(transparent)]
    Serialize(#[from] SeError),
}

/// Result type for XML rendering.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Render a document to XML text.
///
/// The root element takes the name of the document's type. When `pretty` is
/// set, nested elements are placed on their own lines and indented by two
/// spaces per level.
///
/// # Errors
///
/// Returns an error when the document contains names or values that cannot
/// be expressed as XML.
pub fn render<T: Serialize>(document: &T, pretty: bool) -> Result<String> {
    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    if pretty {
        serializer.indent(' ', 2);
    }
    document.serialize(serializer)?;

    let separator = if pretty { "\n" } else { "" };
    Ok(format!("{XML_DECLARATION}{separator}{body}"))
}
