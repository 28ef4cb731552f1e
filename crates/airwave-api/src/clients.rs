// Wireless client endpoints
//
// Per-client detail via `client_detail.xml`, keyed by MAC address. Uses the
// percent-encoded `key=value` query form, not the AP endpoints' repeated
// `id=` form.

use tracing::debug;

use crate::client::AirWaveClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl AirWaveClient {
    /// Fetch detail for a wireless client as raw XML.
    ///
    /// `GET /client_detail.xml?mac=<percent-encoded MAC>` -- colons in the
    /// MAC come out as `%3A`.
    pub async fn client_detail(&self, mac: &str) -> Result<ApiResponse, Error> {
        debug!(mac, "fetching client detail");
        self.get_endpoint(Endpoint::ClientDetail, Query::Pairs(&[("mac", mac)]))
            .await
    }
}
