use async_trait::async_trait;
use serde_json::Value;

use super::get_json;
use crate::config::Config;
use crate::error::UpstreamError;
use crate::pipeline::query::upstream_url;
use crate::types::forecast::Coordinates;
use crate::types::place::Place;

const SERVICE: &str = "Places API";

#[async_trait]
pub trait PlacesProvider: Send + Sync {
    async fn text_search(&self, query: &str, near: Coordinates) -> Result<Vec<Place>, UpstreamError>;
}

/// Google Places text search.
pub struct GooglePlacesClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GooglePlacesClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.places_api_base_url.clone(),
            api_key: config.places_api_key.clone(),
        }
    }
}

#[async_trait]
impl PlacesProvider for GooglePlacesClient {
    async fn text_search(&self, query: &str, near: Coordinates) -> Result<Vec<Place>, UpstreamError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("GOOGLE_PLACES_API_KEY"))?;
        let location = format!("{},{}", near.lat, near.lon);
        let url = upstream_url(
            &self.base_url,
            "textsearch/json",
            &[("query", query), ("location", location.as_str()), ("key", key)],
        );

        let payload = get_json(&self.http, SERVICE, &url).await?;
        parse_results(payload)
    }
}

/// Extracts `results`, skipping entries without a name or location.
pub(crate) fn parse_results(payload: Value) -> Result<Vec<Place>, UpstreamError> {
    match payload.get("status").and_then(Value::as_str) {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(status) => {
            return Err(UpstreamError::Rejected {
                service: SERVICE,
                reason: status.to_string(),
            })
        }
    }

    let results = match payload.get("results").and_then(Value::as_array) {
        Some(results) => results,
        None => return Ok(Vec::new()),
    };

    let places: Vec<Place> = results
        .iter()
        .filter_map(|result| serde_json::from_value(result.clone()).ok())
        .collect();

    if places.len() < results.len() {
        tracing::warn!(
            "Skipped {} malformed place results",
            results.len() - places.len()
        );
    }
    Ok(places)
}
