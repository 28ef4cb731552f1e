// Query-string encoders
//
// The AMP XML API uses two query conventions: the AP endpoints take a
// repeated-key `id=` list, the other detail endpoints take percent-encoded
// `key=value` pairs. Both encoders are pure; endpoint methods pick one
// through `Query`.

use url::form_urlencoded;

/// Percent-encode `key=value` pairs in caller order
/// (`application/x-www-form-urlencoded`).
///
/// Reserved characters in keys and values are escaped (`:` becomes `%3A`),
/// so MAC addresses survive the trip intact.
pub fn urlencode(pairs: &[(&str, &str)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Encode an ID list as repeated `id=` pairs: `[1, 2, 3]` becomes
/// `"id=1&id=2&id=3"`.
///
/// The AMP AP endpoints want the key repeated per value, which the generic
/// single-key encoder cannot express. Order is preserved and duplicates are
/// kept; an empty slice yields an empty string and the caller then omits
/// the `?` separator entirely.
pub fn id_params(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| format!("id={id}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// The two query encodings the AMP endpoints understand.
pub(crate) enum Query<'a> {
    /// Repeated-key ID list (`id=1&id=2&id=3`).
    Ids(&'a [u64]),
    /// Ordered `key=value` pairs, percent-encoded.
    Pairs(&'a [(&'a str, &'a str)]),
}

impl Query<'_> {
    /// Render the query string. Empty input renders empty.
    pub(crate) fn encode(&self) -> String {
        match self {
            Query::Ids(ids) => id_params(ids),
            Query::Pairs(pairs) => urlencode(pairs),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urlencode_escapes_reserved_characters() {
        let encoded = urlencode(&[("mac", "12:34:56:78:90:AB")]);
        assert_eq!(encoded, "mac=12%3A34%3A56%3A78%3A90%3AAB");
    }

    #[test]
    fn urlencode_preserves_pair_order() {
        let encoded = urlencode(&[("b", "2"), ("a", "1")]);
        assert_eq!(encoded, "b=2&a=1");
    }

    #[test]
    fn urlencode_round_trips_under_percent_decoding() {
        let pairs = [("mac", "12:34:56:78:90:AB"), ("note", "a b&c=d")];
        let encoded = urlencode(&pairs);

        let decoded: Vec<(String, String)> = form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect();
        let expected: Vec<(String, String)> = pairs
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();

        assert_eq!(decoded, expected);
    }

    #[test]
    fn id_params_repeats_the_key_in_order() {
        assert_eq!(id_params(&[1, 2, 3]), "id=1&id=2&id=3");
    }

    #[test]
    fn id_params_keeps_duplicates() {
        assert_eq!(id_params(&[7, 7, 1]), "id=7&id=7&id=1");
    }

    #[test]
    fn id_params_empty_is_empty() {
        assert_eq!(id_params(&[]), "");
    }

    #[test]
    fn single_id_matches_the_detail_form() {
        assert_eq!(id_params(&[42]), "id=42");
    }

    #[test]
    fn query_variants_use_their_own_encoder() {
        assert_eq!(Query::Ids(&[1, 2]).encode(), "id=1&id=2");
        assert_eq!(Query::Pairs(&[("id", "9")]).encode(), "id=9");
        assert_eq!(Query::Ids(&[]).encode(), "");
    }
}
