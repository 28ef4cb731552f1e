// Raw endpoint responses
//
// AMP endpoints answer with XML documents (and the login handler with an
// HTML page). This layer hands the payload back verbatim -- parsing the XML
// into models belongs to the caller.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use url::Url;

use crate::error::Error;

/// Raw response from the AMP host.
///
/// Carries everything a caller needs to inspect the exchange: the status,
/// the final resolved URL, the headers, and the unparsed body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Final resolved request URL, query string included.
    pub url: Url,
    /// Response headers, verbatim.
    pub headers: HeaderMap,
    /// Raw body text; XML for endpoint calls.
    pub body: String,
}

impl ApiResponse {
    /// Drain a `reqwest` response into an owned value.
    ///
    /// Status, URL, and headers are captured before the body is consumed.
    pub(crate) async fn read(resp: reqwest::Response) -> Result<Self, Error> {
        let status = resp.status();
        let url = resp.url().clone();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(Error::Transport)?;
        Ok(Self {
            status,
            url,
            headers,
            body,
        })
    }
}
