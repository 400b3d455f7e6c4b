//! Capability interfaces for everything outside the process: the weather and
//! places APIs, reverse geocoding, and the caller's location. Routes only see
//! the traits, so tests swap in stubs.

pub mod location;
pub mod places;
pub mod weather;

use serde_json::Value;

use crate::error::UpstreamError;

pub use location::{resolve_city, FixedLocation, Geocoder, LocationProvider, OpenCageGeocoder};
pub use places::{GooglePlacesClient, PlacesProvider};
pub use weather::{OpenWeatherClient, WeatherProvider};

pub(crate) async fn get_json(
    http: &reqwest::Client,
    service: &'static str,
    url: &str,
) -> Result<Value, UpstreamError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|err| UpstreamError::Unreachable {
            service,
            message: err.without_url().to_string(),
        })?;

    let status = response.status();
    if status.is_client_error() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("{} answered {}: {}", service, status, body);
        return Err(UpstreamError::Rejected {
            service,
            reason: status.to_string(),
        });
    }
    if !status.is_success() {
        return Err(UpstreamError::Unreachable {
            service,
            message: format!("status {}", status),
        });
    }

    response
        .json()
        .await
        .map_err(|err| UpstreamError::InvalidResponse {
            service,
            message: err.without_url().to_string(),
        })
}
