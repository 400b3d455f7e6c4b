use std::sync::Arc;

use crate::config::Config;
use crate::pipeline::classify::ClassifierRules;
use crate::providers::{
    Geocoder, GooglePlacesClient, OpenCageGeocoder, OpenWeatherClient, PlacesProvider,
    WeatherProvider,
};
use crate::store::EmployeeStore;

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    weather: Arc<dyn WeatherProvider>,
    places: Arc<dyn PlacesProvider>,
    geocoder: Arc<dyn Geocoder>,
    employees: EmployeeStore,
}

impl AppState {
    /// State backed by the real third-party APIs.
    pub fn new(config: Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("Falling back to default HTTP client: {}", err);
                reqwest::Client::new()
            });

        let weather = Arc::new(OpenWeatherClient::new(http.clone(), &config));
        let places = Arc::new(GooglePlacesClient::new(http.clone(), &config));
        let geocoder = Arc::new(OpenCageGeocoder::new(http, &config));
        Self::with_providers(config, weather, places, geocoder)
    }

    pub fn with_providers(
        config: Config,
        weather: Arc<dyn WeatherProvider>,
        places: Arc<dyn PlacesProvider>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            weather,
            places,
            geocoder,
            employees: EmployeeStore::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn weather(&self) -> &dyn WeatherProvider {
        self.weather.as_ref()
    }

    pub fn places(&self) -> &dyn PlacesProvider {
        self.places.as_ref()
    }

    pub fn geocoder(&self) -> &dyn Geocoder {
        self.geocoder.as_ref()
    }

    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }

    pub fn classifier_rules(&self) -> ClassifierRules {
        ClassifierRules::default().with_cold_threshold(self.config.cold_threshold_celsius)
    }
}
