use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;
use crate::types::forecast::Coordinates;
use crate::types::place::Place;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/places", post(nearby_places))
}

#[derive(Debug, Deserialize)]
struct PlacesRequest {
    lat: Option<f64>,
    lon: Option<f64>,
    query: Option<String>,
}

#[derive(Serialize)]
struct PlacesResponse {
    message: &'static str,
    places: Vec<Place>,
}

async fn nearby_places(
    State(state): State<AppState>,
    Json(req): Json<PlacesRequest>,
) -> Result<Json<PlacesResponse>, AppError> {
    let query = req.query.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let (Some(lat), Some(lon), Some(query)) = (req.lat, req.lon, query) else {
        return Err(AppError::BadRequest(
            "Latitude, longitude, and query are required.".to_string(),
        ));
    };

    let places = state
        .places()
        .text_search(query, Coordinates { lat, lon })
        .await?;
    tracing::info!("Found {} places for \"{}\" near {},{}", places.len(), query, lat, lon);

    Ok(Json(PlacesResponse {
        message: "Places fetched successfully",
        places,
    }))
}
