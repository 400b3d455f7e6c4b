use async_trait::async_trait;
use serde_json::Value;

use super::get_json;
use crate::config::Config;
use crate::error::{AppError, LocationError, UpstreamError};
use crate::pipeline::query::upstream_url;
use crate::types::forecast::Coordinates;

const SERVICE: &str = "Geocoding API";
pub const FALLBACK_CITY: &str = "Your Location";

/// Where the user currently is.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn locate(&self) -> Result<Coordinates, LocationError>;
}

/// Coordinates reported by the client (e.g. browser geolocation).
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn locate(&self) -> Result<Coordinates, LocationError> {
        let Coordinates { lat, lon } = self.0;
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(LocationError::OutOfRange { lat, lon });
        }
        Ok(self.0)
    }
}

/// Reverse geocoding: the city at a coordinate, if any.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn city_at(&self, coords: Coordinates) -> Result<Option<String>, UpstreamError>;
}

pub struct OpenCageGeocoder {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenCageGeocoder {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.geocode_api_base_url.clone(),
            api_key: config.geocode_api_key.clone(),
        }
    }
}

#[async_trait]
impl Geocoder for OpenCageGeocoder {
    async fn city_at(&self, coords: Coordinates) -> Result<Option<String>, UpstreamError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("OPENCAGE_API_KEY"))?;
        let q = format!("{},{}", coords.lat, coords.lon);
        let url = upstream_url(&self.base_url, "json", &[("q", q.as_str()), ("key", key)]);

        let payload = get_json(&self.http, SERVICE, &url).await?;
        Ok(payload
            .get("results")
            .and_then(Value::as_array)
            .and_then(|results| results.first())
            .and_then(|first| first.get("components"))
            .and_then(|components| components.get("city"))
            .and_then(Value::as_str)
            .map(str::to_string))
    }
}

/// Locates the user and names their city, or [`FALLBACK_CITY`] when the
/// geocoder knows none.
pub async fn resolve_city(
    location: &dyn LocationProvider,
    geocoder: &dyn Geocoder,
) -> Result<String, AppError> {
    let coords = location.locate().await?;
    let city = geocoder.city_at(coords).await?;
    Ok(city.unwrap_or_else(|| FALLBACK_CITY.to_string()))
}
