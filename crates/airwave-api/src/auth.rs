// AMP session authentication
//
// Cookie-based login/logout. The AMP login handler answers a credential
// form POST with a `Set-Cookie` session token; the client captures that
// header itself (no cookie jar) and replays it on every endpoint request.

use reqwest::header::{HeaderMap, SET_COOKIE};
use secrecy::ExposeSecret;
use tracing::{debug, trace};
use url::Url;

use crate::client::AirWaveClient;
use crate::endpoints::LOGIN_PATH;
use crate::error::Error;
use crate::response::ApiResponse;

/// Name of the session cookie issued by the AMP login handler.
pub const AMP_SESSION_COOKIE: &str = "Mercury::Handler::AuthCookieHandler_AMPAuth";

impl AirWaveClient {
    /// Authenticate with the AMP host.
    ///
    /// `POST /LOGIN` with the vendor's credential form (`credential_0`,
    /// `credential_1`, `destination`, `next_action`, `login`). A successful
    /// response sets [`AMP_SESSION_COOKIE`]; the captured value is attached
    /// to every subsequent endpoint request. Re-login overwrites any
    /// previous session.
    ///
    /// Returns the raw login response so the caller can inspect it. A
    /// response that sets no usable cookie leaves the client without a
    /// session: non-success statuses map to [`Error::Authentication`] (with
    /// status and body in the message) and success statuses to
    /// [`Error::MissingSessionCookie`].
    pub async fn login(&self) -> Result<ApiResponse, Error> {
        let url = Url::parse(&self.api_path(LOGIN_PATH)).map_err(Error::InvalidUrl)?;
        debug!("logging in at {}", url);

        let form = [
            ("credential_0", self.username()),
            ("credential_1", self.password().expose_secret()),
            ("login", "Log In"),
            ("destination", "/"),
            ("next_action", ""),
        ];
        let resp = self
            .http()
            .post(url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Transport)?;

        let response = ApiResponse::read(resp).await?;
        match session_cookie_from_headers(&response.headers) {
            Some(cookie) => {
                trace!("captured session cookie");
                self.set_session(Some(cookie));
                debug!("login successful");
                Ok(response)
            }
            None => {
                self.set_session(None);
                if response.status.is_success() {
                    Err(Error::MissingSessionCookie)
                } else {
                    let status = response.status;
                    let preview: String = response.body.chars().take(200).collect();
                    Err(Error::Authentication {
                        message: format!("login failed (HTTP {status}): {preview}"),
                    })
                }
            }
        }
    }

    /// Drop the current session.
    ///
    /// The AMP wrapper has no wire-level logout; clearing the stored cookie
    /// is the whole operation. Endpoint calls after this fail with
    /// [`Error::NotAuthenticated`] until the next successful login.
    pub fn logout(&self) {
        debug!("clearing session");
        self.set_session(None);
    }
}

/// Pull the session cookie out of a login response's `Set-Cookie` headers.
///
/// Keeps each `name=value` pair (attributes stripped) in header order,
/// joined the way a `Cookie` request header expects -- the same set a
/// cookie jar would replay. Pairs with an empty name or value count as
/// absent, so a malformed login response never yields a session.
fn session_cookie_from_headers(headers: &HeaderMap) -> Option<String> {
    let pairs: Vec<&str> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| {
            let pair = value.split(';').next()?.trim();
            match pair.split_once('=') {
                Some((name, val)) if !name.is_empty() && !val.is_empty() => Some(pair),
                _ => None,
            }
        })
        .collect();

    if pairs.is_empty() {
        None
    } else {
        Some(pairs.join("; "))
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    fn headers_with(values: &[&str]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for value in values {
            headers.append(SET_COOKIE, HeaderValue::from_str(value).unwrap());
        }
        headers
    }

    #[test]
    fn extracts_the_amp_cookie_pair() {
        let raw = format!("{AMP_SESSION_COOKIE}=01234567890abcdef01234567890abcd;");
        let expected = format!("{AMP_SESSION_COOKIE}=01234567890abcdef01234567890abcd");

        let headers = headers_with(&[&raw]);
        assert_eq!(
            session_cookie_from_headers(&headers).as_deref(),
            Some(expected.as_str())
        );
    }

    #[test]
    fn strips_cookie_attributes() {
        let headers = headers_with(&["token=abc; Path=/; HttpOnly"]);
        assert_eq!(
            session_cookie_from_headers(&headers).as_deref(),
            Some("token=abc")
        );
    }

    #[test]
    fn joins_multiple_cookies_in_header_order() {
        let headers = headers_with(&["a=1;", "b=2;"]);
        assert_eq!(
            session_cookie_from_headers(&headers).as_deref(),
            Some("a=1; b=2")
        );
    }

    #[test]
    fn missing_header_yields_none() {
        assert!(session_cookie_from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn malformed_pairs_yield_none() {
        assert!(session_cookie_from_headers(&headers_with(&["garbage"])).is_none());
        assert!(session_cookie_from_headers(&headers_with(&["token=;"])).is_none());
        assert!(session_cookie_from_headers(&headers_with(&["=value;"])).is_none());
    }
}
