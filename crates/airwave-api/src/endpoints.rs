// AMP endpoint table
//
// Every fixed path the vendor exposes, in one place. Endpoint methods look
// their path up here instead of scattering string literals.

/// Relative path of the AMP login form handler.
pub(crate) const LOGIN_PATH: &str = "LOGIN";

/// Logical operations exposed by the AMP XML API, keyed to their fixed
/// relative paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Access-point list.
    ApList,
    /// Per-access-point detail.
    ApDetail,
    /// Per-client detail, keyed by MAC address.
    ClientDetail,
    /// Per-rogue-device detail.
    RogueDetail,
}

impl Endpoint {
    /// The fixed relative path for this operation.
    pub const fn path(self) -> &'static str {
        match self {
            Self::ApList => "ap_list.xml",
            Self::ApDetail => "ap_detail.xml",
            Self::ClientDetail => "client_detail.xml",
            Self::RogueDetail => "rogue_detail.xml",
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_table_matches_vendor_endpoints() {
        assert_eq!(Endpoint::ApList.path(), "ap_list.xml");
        assert_eq!(Endpoint::ApDetail.path(), "ap_detail.xml");
        assert_eq!(Endpoint::ClientDetail.path(), "client_detail.xml");
        assert_eq!(Endpoint::RogueDetail.path(), "rogue_detail.xml");
        assert_eq!(LOGIN_PATH, "LOGIN");
    }
}
