// Access-point endpoints
//
// AP listing and per-AP detail via `ap_list.xml` / `ap_detail.xml`. Both
// use the repeated-key `id=` query form.

use tracing::debug;

use crate::client::AirWaveClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl AirWaveClient {
    /// Fetch the access-point list as raw XML.
    ///
    /// `GET /ap_list.xml`, or `GET /ap_list.xml?id=<n>&id=<n>...` when
    /// `ap_ids` is non-empty. An empty slice fetches the full list with no
    /// query string at all.
    pub async fn ap_list(&self, ap_ids: &[u64]) -> Result<ApiResponse, Error> {
        debug!(?ap_ids, "fetching AP list");
        self.get_endpoint(Endpoint::ApList, Query::Ids(ap_ids)).await
    }

    /// Fetch detail for a single access point as raw XML.
    ///
    /// `GET /ap_detail.xml?id=<ap_id>`
    pub async fn ap_detail(&self, ap_id: u64) -> Result<ApiResponse, Error> {
        debug!(ap_id, "fetching AP detail");
        self.get_endpoint(Endpoint::ApDetail, Query::Ids(&[ap_id]))
            .await
    }
}
