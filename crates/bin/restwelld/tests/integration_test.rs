//! End-to-end smoke tests for the full restwelld stack.
//!
//! Each test spins up the complete application (real linear model, real
//! estimator service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use restwell_adapter_http_axum::router;
use restwell_adapter_http_axum::state::AppState;
use restwell_adapter_model_linear::LinearSleepModel;
use restwell_app::event_bus::InProcessEventBus;
use restwell_app::services::estimator_service::EstimatorService;

/// Build a fully-wired router backed by the bundled model coefficients.
fn app() -> axum::Router {
    let event_bus = Arc::new(InProcessEventBus::new(256));
    let estimator = EstimatorService::new(LinearSleepModel::default(), Arc::clone(&event_bus));
    let state = AppState::new(estimator, event_bus);
    router::build(state)
}

fn estimate_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/estimate")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Estimation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_estimate_bedtime_with_bundled_model() {
    let resp = app()
        .oneshot(estimate_request(
            r#"{"wake_time": "07:00", "sleep_hours": 8.0, "coffee_cups": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    // 1800 + 0.02*25200 + 3600*8 + 240*1 = 31344 s of predicted sleep,
    // so the bedtime wraps to the previous evening.
    let json = body_json(resp).await;
    assert_eq!(json["bedtime"], "22:17");
}

#[tokio::test]
async fn should_estimate_later_bedtime_for_less_desired_sleep() {
    let resp = app()
        .oneshot(estimate_request(
            r#"{"wake_time": "07:00", "sleep_hours": 4.0, "coffee_cups": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    // 1800 + 504 + 14400 + 240 = 16944 s, no wrap.
    let json = body_json(resp).await;
    assert_eq!(json["bedtime"], "02:17");
}

#[tokio::test]
async fn should_reject_sleep_hours_below_range() {
    let resp = app()
        .oneshot(estimate_request(
            r#"{"wake_time": "07:00", "sleep_hours": 3.99, "coffee_cups": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp).await;
    assert_eq!(json["title"], "Invalid input");
}

#[tokio::test]
async fn should_reject_zero_coffee_cups() {
    let resp = app()
        .oneshot(estimate_request(
            r#"{"wake_time": "07:00", "sleep_hours": 8.0, "coffee_cups": 0}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_reject_unparseable_wake_time() {
    let resp = app()
        .oneshot(estimate_request(
            r#"{"wake_time": "7 o'clock", "sleep_hours": 8.0, "coffee_cups": 1}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Form defaults
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_default_form_state() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/form")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["coffee"], 1);
    assert_eq!(json["alert"]["title"], "Your ideal bedtime is…");
    assert_eq!(json["showing_alert"], false);
}

// ---------------------------------------------------------------------------
// SSE stream
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_open_estimate_event_stream() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/estimates/stream")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("text/event-stream")
    );
}
