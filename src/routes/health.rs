use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Liveness plus which upstream keys are present.
async fn health(State(state): State<AppState>) -> Json<Value> {
    let config = state.config();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "upstreams": {
            "weather": config.weather_api_key.is_some(),
            "places": config.places_api_key.is_some(),
            "geocoding": config.geocode_api_key.is_some(),
        }
    }))
}
