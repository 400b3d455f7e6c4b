pub mod employees;
pub mod health;
pub mod locate;
pub mod places;
pub mod plan;
pub mod recommendations;
pub mod weather;

use axum::Router;

use crate::state::AppState;

/// Every API route, ready for `with_state`.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(weather::router())
        .merge(places::router())
        .merge(recommendations::router())
        .merge(locate::router())
        .merge(plan::router())
        .merge(employees::router())
}
