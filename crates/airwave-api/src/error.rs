use thiserror::Error;

/// Top-level error type for the `airwave-api` crate.
///
/// Splits authentication failures from transport failures so callers can
/// prompt for re-authentication instead of retrying blindly. Endpoint
/// responses themselves are never turned into errors here -- an AMP endpoint
/// answering with a non-success status still comes back as a raw
/// [`ApiResponse`](crate::response::ApiResponse).
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Login failed (non-success response from the LOGIN handler).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Login response carried no usable `Set-Cookie` header. The client
    /// holds no session after this; it is never silently "logged in".
    #[error("Login response did not set a session cookie")]
    MissingSessionCookie,

    /// Endpoint call issued before a successful `login()`.
    #[error("No active session -- call login() first")]
    NotAuthenticated,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS certificate loading or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),
}

impl Error {
    /// Returns `true` if this error means the client holds no valid session
    /// and a (re-)login might resolve it.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Authentication { .. } | Self::MissingSessionCookie | Self::NotAuthenticated
        )
    }

    /// Returns `true` if this is a transient transport error worth retrying
    /// at a higher layer. This crate never retries on its own.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}
