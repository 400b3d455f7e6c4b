mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn places_search_passes_query_and_location() {
    let app = common::app();
    let (status, body) = common::post_json(
        &app.router,
        "/api/places",
        json!({ "lat": 41.15, "lon": -8.61, "query": "tourist attractions outdoor" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Places fetched successfully");
    assert_eq!(body["places"][0]["geometry"]["location"]["lat"], 41.15);

    let calls = app.places.calls.lock().expect("calls").clone();
    assert_eq!(calls[0].0, "tourist attractions outdoor");
}

#[tokio::test]
async fn places_requires_all_fields() {
    let app = common::app();
    for body in [
        json!({ "lon": 1.0, "query": "museums" }),
        json!({ "lat": 1.0, "query": "museums" }),
        json!({ "lat": 1.0, "lon": 1.0, "query": "" }),
    ] {
        let (status, body) = common::post_json(&app.router, "/api/places", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Latitude, longitude, and query are required.");
    }
    assert!(app.places.calls.lock().expect("calls").is_empty());
}
