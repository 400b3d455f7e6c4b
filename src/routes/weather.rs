use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::pipeline::aggregate::{daily_view, short_range_view};
use crate::pipeline::classify::recommend;
use crate::pipeline::decode::{decode_forecast, DecodedForecast};
use crate::pipeline::display::{cards, ForecastCard};
use crate::state::AppState;
use crate::types::forecast::{ActivityLabel, CityInfo};

pub const NO_DATA_NOTICE: &str = "No weather data available for the selected city.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/weather", post(current_weather))
        .route("/api/forecast", post(forecast))
}

#[derive(Debug, Deserialize)]
pub(crate) struct CityRequest {
    #[serde(default)]
    city: Option<String>,
}

impl CityRequest {
    pub(crate) fn city(&self) -> Result<&str, AppError> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .ok_or_else(|| AppError::BadRequest("City field cannot be empty.".to_string()))
    }
}

#[derive(Serialize)]
struct WeatherResponse {
    message: &'static str,
    weather: Value,
}

#[derive(Serialize)]
struct ForecastResponse {
    message: &'static str,
    city: CityInfo,
    short_range: Vec<ForecastCard>,
    daily: Vec<ForecastCard>,
    activity: Option<ActivityLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<&'static str>,
}

async fn current_weather(
    State(state): State<AppState>,
    Json(req): Json<CityRequest>,
) -> Result<Json<WeatherResponse>, AppError> {
    let city = req.city()?;
    let weather = state.weather().current(city).await?;

    Ok(Json(WeatherResponse {
        message: "Weather data fetched successfully",
        weather,
    }))
}

async fn forecast(
    State(state): State<AppState>,
    Json(req): Json<CityRequest>,
) -> Result<Json<ForecastResponse>, AppError> {
    let city = req.city()?;
    let decoded = load_forecast(&state, city).await?;
    let config = state.config();

    let short_range = short_range_view(&decoded.series, config.short_range_count);
    let daily = daily_view(&decoded.series, config.daily_stride);
    let activity = recommend(&decoded.series, &state.classifier_rules());

    tracing::info!(
        "Forecast for {}: {} samples, activity {:?}",
        city,
        decoded.series.len(),
        activity
    );

    Ok(Json(ForecastResponse {
        message: "Weather data fetched successfully",
        city: decoded.city,
        short_range: cards(&short_range),
        daily: cards(&daily),
        activity,
        notice: activity.is_none().then_some(NO_DATA_NOTICE),
    }))
}

pub(crate) async fn load_forecast(state: &AppState, city: &str) -> Result<DecodedForecast, AppError> {
    let payload = state.weather().forecast(city).await?;
    Ok(decode_forecast(&payload)?)
}
