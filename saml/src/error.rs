//! # SAML Metadata Errors

use serde_json::{Value, json};
use thiserror::Error;

/// Errors raised while generating Service Provider metadata.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration supplies key material that cannot be advertised,
    /// such as a private key without its matching certificate.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// The metadata document could not be rendered.
    #[error(transparent)]
    Render(#[from] credibil_xml::Error),
}

impl Error {
    /// The short error code used in JSON error responses.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ConfigurationError(_) => "configuration_error",
            Self::Render(_) => "server_error",
        }
    }

    /// Transform the error to a JSON object with `error` and
    /// `error_description` members.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let description = match self {
            Self::ConfigurationError(e) => e.clone(),
            Self::Render(e) => e.to_string(),
        };
        json!({"error": self.code(), "error_description": description})
    }
}

/// Construct an `Error::ConfigurationError` error from a string or existing
/// error value.
macro_rules! config_error {
    ($fmt:expr, $($arg:tt)*) => {
        $crate::Error::ConfigurationError(format!($fmt, $($arg)*))
    };
     ($err:expr $(,)?) => {
        $crate::Error::ConfigurationError(format!($err))
    };
}
pub(crate) use config_error;

#[cfg(test)]
mod tests {
    use quick_xml::errors::serialize::SeError;

    use super::*;

    #[test]
    fn display() {
        let err = config_error!("missing {} certificate", "signing");
        assert_eq!(err.to_string(), "configuration error: missing signing certificate");
    }

    #[test]
    fn json() {
        let err = config_error!("missing decryption certificate");
        assert_eq!(
            err.to_json(),
            json!({
                "error": "configuration_error",
                "error_description": "missing decryption certificate"
            })
        );
    }

    // Rendering failures are not configuration errors.
    #[test]
    fn render_is_server_error() {
        let err: Error = credibil_xml::Error::Serialize(SeError::Custom("bad name".into())).into();
        assert_eq!(err.code(), "server_error");
        let json = err.to_json();
        assert!(json["error_description"].as_str().is_some_and(|d| d.contains("bad name")));
    }
}
