use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::pipeline::itinerary::{print_plan, WriterSink};
use crate::state::AppState;
use crate::types::place::{Place, PlannedPlace};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/plan/entries", post(add_entry))
        .route("/api/plan/print", post(print))
}

#[derive(Debug, Deserialize)]
struct AddEntryRequest {
    place: Place,
}

#[derive(Debug, Deserialize)]
struct PrintRequest {
    #[serde(default)]
    places: Vec<PlannedPlace>,
}

/// Turns a search result into a wishlist entry; the photo URL needs the
/// server-side places key.
async fn add_entry(
    State(state): State<AppState>,
    Json(req): Json<AddEntryRequest>,
) -> Json<PlannedPlace> {
    let config = state.config();
    Json(PlannedPlace::from_place(
        &req.place,
        &config.places_api_base_url,
        config.places_api_key.as_deref(),
    ))
}

async fn print(Json(req): Json<PrintRequest>) -> Result<impl IntoResponse, AppError> {
    let mut sink = WriterSink::new(Vec::new());
    print_plan(&req.places, &mut sink)?;
    let document = String::from_utf8(sink.into_inner())
        .map_err(|err| AppError::Internal(format!("Travel plan is not UTF-8: {}", err)))?;

    tracing::info!("Printed travel plan with {} places", req.places.len());

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        document,
    ))
}
