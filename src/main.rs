use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travelplan_rs::{config, routes, state};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travelplan_rs=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = config::Config::from_env();
    if config.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY is not set; weather routes will fail");
    }
    if config.places_api_key.is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY is not set; places routes will fail");
    }

    let addr = format!("0.0.0.0:{}", config.port);
    let state = state::AppState::new(config);

    let app = Router::new()
        .merge(routes::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    tracing::info!("Travel planner listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Forecast: POST http://{}/api/forecast", addr);
    tracing::info!("Recommendations: POST http://{}/api/recommendations", addr);

    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", err);
        std::process::exit(1);
    }
}
