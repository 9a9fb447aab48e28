use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use doctor_cell::services::DoctorCatalog;
use rehabilitation_cell::handlers::RehabState;
use rehabilitation_cell::router::rehabilitation_routes;
use rehabilitation_cell::RehabilitationTracker;
use shared_utils::test_utils::TestUser;
use shared_utils::SessionStore;

struct TestApp {
    router: Router,
    sessions: SessionStore,
}

fn create_test_app() -> TestApp {
    let sessions = SessionStore::new();
    let state = RehabState {
        tracker: RehabilitationTracker::new(),
        catalog: Arc::new(DoctorCatalog::bundled().unwrap()),
        sessions: sessions.clone(),
    };

    TestApp {
        router: rehabilitation_routes(state),
        sessions,
    }
}

async fn call(app: &TestApp, method: &str, uri: &str, token: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", TestUser::bearer(token))
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_plan_requires_session() {
    let app = create_test_app();

    let (status, _) = call(&app, "GET", "/plan", "missing").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_complete_then_reset() {
    let app = create_test_app();
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (status, plan) = call(&app, "GET", "/plan", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["progress"]["completion_rate"], 40);

    let (status, plan) = call(&app, "POST", "/exercises/3/complete", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["progress"]["completed"], 3);
    assert_eq!(plan["exercises"][2]["completed"], true);

    let (status, plan) = call(&app, "POST", "/reset", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(plan["progress"]["completed"], 2);
}

#[tokio::test]
async fn test_plans_are_not_shared_between_patients() {
    let app = create_test_app();
    let first = TestUser::default().sign_in(&app.sessions).await;
    let second = TestUser::default().sign_in(&app.sessions).await;

    call(&app, "POST", "/exercises/5/complete", &first).await;

    let (_, plan) = call(&app, "GET", "/plan", &second).await;
    assert_eq!(plan["progress"]["completed"], 2);
}

#[tokio::test]
async fn test_unknown_exercise() {
    let app = create_test_app();
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (status, json) = call(&app, "POST", "/exercises/42/complete", &token).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Exercise not found: 42");
}

#[tokio::test]
async fn test_progress_and_session_doctor() {
    let app = create_test_app();
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (status, progress) = call(&app, "GET", "/progress", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(progress["total"], 4);
    assert_eq!(progress["weeks"][3]["percentage"], 76);

    let (status, session) = call(&app, "GET", "/session", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["specialty"], "Orthopedic Surgeon");
    assert_eq!(session["booking_link"], "/booking?doctor=4");
}
