use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::error::{AppError, UpstreamError};
use crate::pipeline::classify::recommend;
use crate::pipeline::query::places_query;
use crate::routes::weather::{load_forecast, CityRequest, NO_DATA_NOTICE};
use crate::state::AppState;
use crate::types::forecast::{ActivityLabel, CityInfo};
use crate::types::place::Place;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/recommendations", post(recommendations))
}

#[derive(Serialize)]
struct RecommendationResponse {
    city: CityInfo,
    activity: Option<ActivityLabel>,
    query: Option<String>,
    places: Vec<Place>,
    message: String,
}

/// Forecast, then label, then a places search near the forecast city.
async fn recommendations(
    State(state): State<AppState>,
    Json(req): Json<CityRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let city = req.city()?;
    let decoded = load_forecast(&state, city).await?;

    let Some(activity) = recommend(&decoded.series, &state.classifier_rules()) else {
        return Ok(Json(RecommendationResponse {
            city: decoded.city,
            activity: None,
            query: None,
            places: Vec::new(),
            message: NO_DATA_NOTICE.to_string(),
        }));
    };

    let coords = decoded.city.coord.ok_or(UpstreamError::InvalidResponse {
        service: "Weather API",
        message: "forecast has no city coordinates".to_string(),
    })?;
    let query = places_query(activity);
    let places = state.places().text_search(&query, coords).await?;

    tracing::info!(
        "Recommending {} places for {} ({} results)",
        activity.as_str(),
        city,
        places.len()
    );

    Ok(Json(RecommendationResponse {
        message: format!("Recommended {} activities based on current conditions", activity.as_str()),
        city: decoded.city,
        activity: Some(activity),
        query: Some(query),
        places,
    }))
}
