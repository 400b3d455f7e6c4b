use async_trait::async_trait;
use serde_json::Value;

use super::get_json;
use crate::config::Config;
use crate::error::UpstreamError;
use crate::pipeline::query::upstream_url;

const SERVICE: &str = "Weather API";

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions for `city`, passed through untouched.
    async fn current(&self, city: &str) -> Result<Value, UpstreamError>;

    /// 5-day / 3-hour forecast payload for `city`.
    async fn forecast(&self, city: &str) -> Result<Value, UpstreamError>;
}

/// OpenWeatherMap client. Requests metric units.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.weather_api_base_url.clone(),
            api_key: config.weather_api_key.clone(),
        }
    }

    async fn fetch(&self, path: &str, city: &str) -> Result<Value, UpstreamError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::NotConfigured("WEATHER_API_KEY"))?;
        let url = upstream_url(
            &self.base_url,
            path,
            &[("q", city), ("appid", key), ("units", "metric")],
        );
        tracing::debug!("Fetching {} for {}", path, city);
        get_json(&self.http, SERVICE, &url).await
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<Value, UpstreamError> {
        self.fetch("weather", city).await
    }

    async fn forecast(&self, city: &str) -> Result<Value, UpstreamError> {
        self.fetch("forecast", city).await
    }
}
