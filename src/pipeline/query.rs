use crate::types::forecast::ActivityLabel;

const QUERY_PREFIX: &str = "tourist attractions";

/// Places search text for a recommendation, with the label as plain text.
pub fn places_query(label: ActivityLabel) -> String {
    format!("{} {}", QUERY_PREFIX, label.as_str())
}

/// Builds `base/path?k=v&...` with every value percent-encoded.
pub fn upstream_url(base: &str, path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}/{}?{}", base.trim_end_matches('/'), path.trim_start_matches('/'), query)
}
