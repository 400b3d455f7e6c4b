use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::providers::{resolve_city, FixedLocation};
use crate::state::AppState;
use crate::types::forecast::Coordinates;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/locate", post(locate))
}

#[derive(Debug, Deserialize)]
struct LocateRequest {
    lat: f64,
    lon: f64,
}

#[derive(Serialize)]
struct LocateResponse {
    city: String,
}

async fn locate(
    State(state): State<AppState>,
    Json(req): Json<LocateRequest>,
) -> Result<Json<LocateResponse>, AppError> {
    let location = FixedLocation(Coordinates {
        lat: req.lat,
        lon: req.lon,
    });
    let city = resolve_city(&location, state.geocoder()).await?;
    Ok(Json(LocateResponse { city }))
}
