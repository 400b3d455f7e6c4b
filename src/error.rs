use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Forecast payload is missing `{0}`")]
    MissingField(&'static str),
    #[error("Forecast sample {index} is missing `{field}`")]
    MalformedSample { index: usize, field: &'static str },
}

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{0} is not configured")]
    NotConfigured(&'static str),
    #[error("{service} request failed: {message}")]
    Unreachable { service: &'static str, message: String },
    #[error("{service} rejected the request: {reason}")]
    Rejected { service: &'static str, reason: String },
    #[error("{service} returned an invalid response: {message}")]
    InvalidResponse { service: &'static str, message: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    #[error("Coordinates out of range: {lat}, {lon}")]
    OutOfRange { lat: f64, lon: f64 },
}

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Travel plan has no places to print")]
    EmptyPlan,
    #[error("Failed to write travel plan: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error(transparent)]
    Print(#[from] PrintError),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Decode(_) | AppError::BadRequest(_) | AppError::Location(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream(err) => match err {
                UpstreamError::NotConfigured(_) | UpstreamError::Rejected { .. } => {
                    StatusCode::BAD_REQUEST
                }
                UpstreamError::Unreachable { .. } | UpstreamError::InvalidResponse { .. } => {
                    StatusCode::BAD_GATEWAY
                }
            },
            AppError::Print(PrintError::EmptyPlan) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Print(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() || matches!(self, AppError::Upstream(_)) {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
