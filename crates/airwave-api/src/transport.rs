// Transport configuration for building the reqwest::Client behind an
// AirWave client.
//
// AMP appliances commonly run self-signed certificates, so certificate
// verification defaults to off. Redirects are disabled for the whole
// client: AMP answers a successful login with a redirect, and the session
// cookie must be read off that hop rather than the page it lands on.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;

/// URL scheme used for every request to the AMP host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// HTTPS -- what a real AMP host speaks.
    Secure,
    /// HTTP -- for plain-text test servers.
    Plain,
}

impl Scheme {
    pub(crate) const fn http(self) -> &'static str {
        match self {
            Self::Secure => "https",
            Self::Plain => "http",
        }
    }
}

/// TLS verification mode.
#[derive(Debug, Clone)]
pub enum TlsMode {
    /// Use the system certificate store.
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed AMP appliances).
    DangerAcceptInvalid,
}

/// Transport configuration for building an HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub scheme: Scheme,
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Secure,
            tls: TlsMode::DangerAcceptInvalid,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent("airwave-api/0.1.0")
            .redirect(reqwest::redirect::Policy::none());

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_https_with_lenient_tls() {
        let config = TransportConfig::default();
        assert_eq!(config.scheme, Scheme::Secure);
        assert!(matches!(config.tls, TlsMode::DangerAcceptInvalid));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn build_client_succeeds_with_defaults() {
        TransportConfig::default().build_client().unwrap();
    }

    #[test]
    fn scheme_maps_to_url_prefix() {
        assert_eq!(Scheme::Secure.http(), "https");
        assert_eq!(Scheme::Plain.http(), "http");
    }
}
