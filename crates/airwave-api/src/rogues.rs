// Rogue-device endpoints
//
// Per-rogue detail via `rogue_detail.xml`. The vendor keys this endpoint
// with a single `id=<n>` pair -- the mapping form, not the AP endpoints'
// repeated-key form.

use tracing::debug;

use crate::client::AirWaveClient;
use crate::endpoints::Endpoint;
use crate::error::Error;
use crate::query::Query;
use crate::response::ApiResponse;

impl AirWaveClient {
    /// Fetch detail for a rogue device as raw XML.
    ///
    /// `GET /rogue_detail.xml?id=<rogue_id>`
    pub async fn rogue_detail(&self, rogue_id: u64) -> Result<ApiResponse, Error> {
        debug!(rogue_id, "fetching rogue detail");
        let id = rogue_id.to_string();
        self.get_endpoint(Endpoint::RogueDetail, Query::Pairs(&[("id", id.as_str())]))
            .await
    }
}
