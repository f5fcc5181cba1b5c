//! # PEM Certificates
//!
//! SAML metadata embeds certificates as the bare base64 content of their DER
//! encoding. Certificates are usually configured in PEM form, so the envelope
//! has to be removed first.

const BEGIN_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----";
const END_CERTIFICATE: &str = "-----END CERTIFICATE-----";

/// Strip the PEM `BEGIN`/`END CERTIFICATE` markers and all whitespace from a
/// certificate, leaving only its base64 content.
///
/// Input without markers is accepted, so normalizing an already normalized
/// certificate returns it unchanged.
#[must_use]
pub fn normalize(certificate: &str) -> String {
    let body = certificate
        .find(BEGIN_CERTIFICATE)
        .map_or(certificate, |idx| &certificate[idx + BEGIN_CERTIFICATE.len()..]);
    let body = body.find(END_CERTIFICATE).map_or(body, |idx| &body[..idx]);

    body.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTENT: &str = "MIIBszCCAVmgAwIBAgIUQ2VydGlmaWNhdGU=";

    #[test]
    fn strips_envelope() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIBszCCAVmgAwIB\nAgIUQ2VydGlmaWNhdGU=\n-----END CERTIFICATE-----\n";
        assert_eq!(normalize(pem), CONTENT);
    }

    #[test]
    fn crlf_and_padding() {
        let pem = "  \r\n-----BEGIN CERTIFICATE-----\r\nMIIBszCCAVmgAwIB\r\nAgIUQ2VydGlmaWNhdGU=\r\n-----END CERTIFICATE-----\r\n\r\n";
        assert_eq!(normalize(pem), CONTENT);
    }

    #[test]
    fn single_line() {
        let pem = format!("{BEGIN_CERTIFICATE}{CONTENT}{END_CERTIFICATE}");
        assert_eq!(normalize(&pem), CONTENT);
    }

    #[test]
    fn idempotent() {
        assert_eq!(normalize(CONTENT), CONTENT);
        assert_eq!(normalize(&normalize(CONTENT)), CONTENT);
    }

    #[test]
    fn empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("-----BEGIN CERTIFICATE-----\n-----END CERTIFICATE-----"), "");
    }
}
