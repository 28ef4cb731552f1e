// AMP HTTP client
//
// Wraps `reqwest::Client` with AirWave-specific URL construction and
// session-cookie handling. Endpoint groups (APs, clients, rogues) add their
// methods via separate files to keep this module focused on transport
// mechanics.

use std::sync::RwLock;

use secrecy::SecretString;
use tracing::debug;
use url::Url;

use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;
use crate::transport::{Scheme, TransportConfig};

/// Client for the AMP XML API.
///
/// Holds the login credentials, the target address, and the session cookie
/// captured at login. Endpoint methods return raw [`ApiResponse`] values;
/// XML bodies come back unparsed. Independent clients can target the same
/// or different AMP hosts within one process -- there is no shared state.
pub struct AirWaveClient {
    http: reqwest::Client,
    username: String,
    password: SecretString,
    address: String,
    scheme: Scheme,
    /// Session cookie for the AMP host: unset until a login captures one,
    /// overwritten on re-login, cleared by logout. Guarded so a concurrent
    /// login cannot race an in-flight endpoint call reading it.
    session: RwLock<Option<String>>,
}

impl AirWaveClient {
    /// Create a new client from construction parameters and a transport
    /// config.
    ///
    /// `address` is the AMP hostname or IP, optionally with a port, and
    /// without a scheme -- the scheme comes from the transport config.
    pub fn new(
        username: impl Into<String>,
        password: SecretString,
        address: impl Into<String>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self {
            http,
            username: username.into(),
            password,
            address: address.into(),
            scheme: transport.scheme,
            session: RwLock::new(None),
        })
    }

    /// Create a client around a pre-built `reqwest::Client`.
    ///
    /// The given client must not follow redirects, or the `Set-Cookie` on
    /// the login hop gets consumed before this layer can capture it.
    pub fn with_client(
        http: reqwest::Client,
        username: impl Into<String>,
        password: SecretString,
        address: impl Into<String>,
        scheme: Scheme,
    ) -> Self {
        Self {
            http,
            username: username.into(),
            password,
            address: address.into(),
            scheme,
            session: RwLock::new(None),
        }
    }

    /// The configured login username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The configured AMP address (hostname or IP, optionally `host:port`).
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The underlying HTTP client (for the login flow).
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The configured login password.
    pub(crate) fn password(&self) -> &SecretString {
        &self.password
    }

    // ── Session state ────────────────────────────────────────────────

    /// The current session cookie, if a login has succeeded.
    ///
    /// The value is in `Cookie` request-header form (`name=value`); treat
    /// it as opaque.
    pub fn session_cookie(&self) -> Option<String> {
        self.session.read().expect("session lock poisoned").clone()
    }

    /// Replace the stored session cookie.
    pub(crate) fn set_session(&self, cookie: Option<String>) {
        *self.session.write().expect("session lock poisoned") = cookie;
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build the fully-qualified URL for a relative API path:
    /// `{scheme}://{address}/{path}`.
    ///
    /// The path segment is taken verbatim -- no encoding or rewriting.
    pub fn api_path(&self, path: &str) -> String {
        let scheme = self.scheme.http();
        let address = &self.address;
        format!("{scheme}://{address}/{path}")
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Shared GET template for the XML endpoints: resolve the endpoint
    /// path, append the encoded query (no `?` when it is empty), attach the
    /// session cookie, and hand back the raw response.
    ///
    /// Fails with [`Error::NotAuthenticated`] before any request goes out
    /// when no session cookie is held. The response is returned as-is even
    /// for non-success statuses.
    pub(crate) async fn get_endpoint(
        &self,
        endpoint: Endpoint,
        query: Query<'_>,
    ) -> Result<ApiResponse, Error> {
        let cookie = self.session_cookie().ok_or(Error::NotAuthenticated)?;

        let mut raw = self.api_path(endpoint.path());
        let params = query.encode();
        if !params.is_empty() {
            raw.push('?');
            raw.push_str(&params);
        }
        let url = Url::parse(&raw).map_err(Error::InvalidUrl)?;

        debug!("GET {}", url);
        let resp = self
            .http
            .get(url)
            .header(reqwest::header::COOKIE, cookie)
            .send()
            .await
            .map_err(Error::Transport)?;

        ApiResponse::read(resp).await
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_client() -> AirWaveClient {
        AirWaveClient::new(
            "username",
            "password".to_string().into(),
            "192.168.1.1",
            &TransportConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn api_path_joins_scheme_address_and_path() {
        let client = test_client();
        assert_eq!(
            client.api_path("ap_list.xml"),
            "https://192.168.1.1/ap_list.xml"
        );
    }

    #[test]
    fn api_path_leaves_the_path_segment_untouched() {
        let client = test_client();
        assert_eq!(
            client.api_path("rogue_detail.xml"),
            "https://192.168.1.1/rogue_detail.xml"
        );
    }

    #[test]
    fn plain_scheme_builds_http_urls() {
        let client = AirWaveClient::with_client(
            reqwest::Client::new(),
            "username",
            "password".to_string().into(),
            "127.0.0.1:8080",
            Scheme::Plain,
        );
        assert_eq!(
            client.api_path("ap_list.xml"),
            "http://127.0.0.1:8080/ap_list.xml"
        );
    }

    #[test]
    fn construction_stores_credentials_and_no_session() {
        let client = test_client();
        assert_eq!(client.username(), "username");
        assert_eq!(client.address(), "192.168.1.1");
        assert!(client.session_cookie().is_none());
    }

    #[test]
    fn session_lifecycle_set_overwrite_clear() {
        let client = test_client();

        client.set_session(Some("a=1".into()));
        assert_eq!(client.session_cookie().as_deref(), Some("a=1"));

        client.set_session(Some("b=2".into()));
        assert_eq!(client.session_cookie().as_deref(), Some("b=2"));

        client.set_session(None);
        assert!(client.session_cookie().is_none());
    }
}
