use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub weather_api_key: Option<String>,
    pub places_api_key: Option<String>,
    pub geocode_api_key: Option<String>,
    pub weather_api_base_url: String,
    pub places_api_base_url: String,
    pub geocode_api_base_url: String,
    pub upstream_timeout: Duration,
    pub short_range_count: usize,
    pub daily_stride: usize,
    pub cold_threshold_celsius: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            weather_api_key: None,
            places_api_key: None,
            geocode_api_key: None,
            weather_api_base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            places_api_base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
            geocode_api_base_url: "https://api.opencagedata.com/geocode/v1".to_string(),
            upstream_timeout: Duration::from_secs(10),
            short_range_count: 5,
            daily_stride: 8,
            cold_threshold_celsius: 10.0,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = parsed_env("PORT").unwrap_or(defaults.port);

        let timeout_seconds = parsed_env("UPSTREAM_TIMEOUT_SECONDS")
            .unwrap_or(defaults.upstream_timeout.as_secs());

        Self {
            port,
            weather_api_key: secret_env(&["WEATHER_API_KEY", "WEATHER_API"]),
            places_api_key: secret_env(&["GOOGLE_PLACES_API_KEY", "GOOGLE_PLACES_API"]),
            geocode_api_key: secret_env(&["OPENCAGE_API_KEY"]),
            weather_api_base_url: std::env::var("WEATHER_API_BASE_URL")
                .unwrap_or(defaults.weather_api_base_url),
            places_api_base_url: std::env::var("PLACES_API_BASE_URL")
                .unwrap_or(defaults.places_api_base_url),
            geocode_api_base_url: std::env::var("GEOCODE_API_BASE_URL")
                .unwrap_or(defaults.geocode_api_base_url),
            upstream_timeout: Duration::from_secs(timeout_seconds),
            short_range_count: parsed_env("SHORT_RANGE_COUNT").unwrap_or(defaults.short_range_count),
            daily_stride: parsed_env("DAILY_STRIDE").unwrap_or(defaults.daily_stride),
            cold_threshold_celsius: parsed_env("COLD_THRESHOLD_CELSIUS")
                .unwrap_or(defaults.cold_threshold_celsius),
        }
    }
}

fn parsed_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse().ok())
}

/// First non-empty value among `names`, so the legacy variable names still work.
fn secret_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
