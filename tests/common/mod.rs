#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::to_bytes, body::Body, http::Request, http::StatusCode, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use travelplan_rs::{
    config::Config,
    error::UpstreamError,
    providers::{Geocoder, PlacesProvider, WeatherProvider},
    routes,
    state::AppState,
    types::{forecast::Coordinates, place::Place},
};

pub struct StubWeather {
    pub forecast: Result<Value, &'static str>,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current(&self, city: &str) -> Result<Value, UpstreamError> {
        Ok(json!({ "name": city, "main": { "temp": 21.0 } }))
    }

    async fn forecast(&self, _city: &str) -> Result<Value, UpstreamError> {
        self.forecast.clone().map_err(|reason| UpstreamError::Rejected {
            service: "Weather API",
            reason: reason.to_string(),
        })
    }
}

#[derive(Default)]
pub struct StubPlaces {
    pub calls: Mutex<Vec<(String, Coordinates)>>,
}

#[async_trait]
impl PlacesProvider for StubPlaces {
    async fn text_search(&self, query: &str, near: Coordinates) -> Result<Vec<Place>, UpstreamError> {
        self.calls
            .lock()
            .expect("calls lock")
            .push((query.to_string(), near));
        let place: Place = serde_json::from_value(json!({
            "place_id": "p1",
            "name": "City Museum",
            "formatted_address": "1 Museum Sq",
            "geometry": { "location": { "lat": near.lat, "lng": near.lon } },
            "photos": [{ "photo_reference": "ref-1" }]
        }))
        .expect("place");
        Ok(vec![place])
    }
}

pub struct StubGeocoder(pub Option<&'static str>);

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn city_at(&self, _coords: Coordinates) -> Result<Option<String>, UpstreamError> {
        Ok(self.0.map(str::to_string))
    }
}

/// `count` samples three hours apart; the first has `first_condition`.
pub fn forecast_payload(count: usize, first_condition: &str, first_temp: f64) -> Value {
    let list: Vec<Value> = (0..count)
        .map(|i| {
            let (condition, temp) = if i == 0 {
                (first_condition, first_temp)
            } else {
                ("Clear", 20.0 + i as f64)
            };
            json!({
                "dt_txt": format!("2026-10-{:02} {:02}:00:00", 18 + i / 8, (i % 8) * 3),
                "main": { "temp": temp },
                "weather": [{ "main": condition, "icon": "01d" }]
            })
        })
        .collect();

    json!({
        "list": list,
        "city": { "name": "Lisbon", "country": "PT", "coord": { "lat": 38.72, "lon": -9.14 } }
    })
}

pub struct TestApp {
    pub router: Router,
    pub places: Arc<StubPlaces>,
}

pub fn app_with(forecast: Result<Value, &'static str>) -> TestApp {
    let mut config = Config::default();
    config.places_api_key = Some("test-key".to_string());
    let places = Arc::new(StubPlaces::default());
    let state = AppState::with_providers(
        config,
        Arc::new(StubWeather { forecast }),
        places.clone(),
        Arc::new(StubGeocoder(Some("Lisbon"))),
    );
    TestApp {
        router: Router::new().merge(routes::router()).with_state(state),
        places,
    }
}

pub fn app() -> TestApp {
    app_with(Ok(forecast_payload(40, "Rain", 18.0)))
}

pub async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");
    read_json(response).await
}

pub async fn send(router: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .method(method)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}
