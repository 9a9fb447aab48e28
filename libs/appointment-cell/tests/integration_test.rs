use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::handlers::AppointmentState;
use appointment_cell::router::appointment_routes;
use appointment_cell::services::AppointmentBook;
use doctor_cell::services::DoctorCatalog;
use shared_utils::test_utils::{TestConfig, TestUser};
use shared_utils::SessionStore;

struct TestApp {
    router: Router,
    sessions: SessionStore,
}

fn create_test_app(config: TestConfig) -> TestApp {
    let sessions = SessionStore::new();
    let state = AppointmentState {
        config: config.to_arc(),
        catalog: Arc::new(DoctorCatalog::bundled().unwrap()),
        book: AppointmentBook::new(),
        sessions: sessions.clone(),
    };

    TestApp {
        router: appointment_routes(state),
        sessions,
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

fn post_json(uri: &str, token: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Authorization", TestUser::bearer(token))
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_with_token(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("Authorization", TestUser::bearer(token))
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_slots_are_public_and_labelled() {
    let app = create_test_app(TestConfig::default());

    let (status, json) = send(&app.router, get("/slots?date=2024-01-15")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 16);
    assert_eq!(json["date_label"], "Jan 15, 2024");
    assert_eq!(json["slots"][0]["start"], "2024-01-15T09:00:00");
    assert_eq!(json["slots"][0]["label"], "9:00 AM");
    assert_eq!(json["slots"][15]["label"], "4:30 PM");
}

#[tokio::test]
async fn test_slots_follow_configured_hours() {
    let config = TestConfig {
        open_hour: 10,
        close_hour: 12,
        slot_interval_minutes: 20,
        ..TestConfig::default()
    };
    let app = create_test_app(config);

    let (_, json) = send(&app.router, get("/slots?date=2024-01-15")).await;

    assert_eq!(json["total"], 6);
    assert_eq!(json["slots"][1]["label"], "10:20 AM");
}

#[tokio::test]
async fn test_slots_for_unknown_doctor() {
    let app = create_test_app(TestConfig::default());

    let (status, json) = send(&app.router, get("/slots?date=2024-01-15&doctor_id=404")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Doctor not found");
}

#[tokio::test]
async fn test_slots_without_date_are_rejected() {
    let app = create_test_app(TestConfig::default());

    let response = app.router.clone().oneshot(get("/slots")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_booking_requires_session() {
    let app = create_test_app(TestConfig::default());

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("Content-Type", "application/json")
        .body(Body::from(json!({ "doctor_id": "1" }).to_string()))
        .unwrap();
    let (status, json) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_booking_with_unknown_token() {
    let app = create_test_app(TestConfig::default());

    let (status, _) = send(&app.router, post_json("/", "not-a-session", json!({}))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_book_then_list() {
    let app = create_test_app(TestConfig::default());
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (status, json) = send(
        &app.router,
        post_json(
            "/",
            &token,
            json!({
                "doctor_id": "1",
                "scheduled_for": "2024-01-15T09:30:00",
                "appointment_type": "in-person",
                "notes": "Chest pain follow-up"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["appointment"]["doctor_name"], "Dr. Sarah Wanjiku Kamau");
    assert_eq!(json["appointment"]["status"], "upcoming");
    assert_eq!(json["summary"]["when"], "Jan 15, 2024 9:30 AM");
    assert_eq!(json["summary"]["duration"], "30 minutes");
    assert_eq!(json["summary"]["appointment_type"], "In-Person Visit");

    let (status, json) = send(&app.router, get_with_token("/", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn test_elapsed_booking_is_completed() {
    let app = create_test_app(TestConfig::default());
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (_, booked) = send(
        &app.router,
        post_json("/", &token, json!({ "doctor_id": "1", "scheduled_for": "2020-03-02T10:00:00" })),
    )
    .await;
    let cancel_uri = format!("/{}/cancel", booked["appointment"]["id"].as_str().unwrap());

    let (status, json) = send(&app.router, get_with_token("/upcoming", &token)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appointments"].as_array().unwrap().len(), 0);

    let (_, json) = send(&app.router, get_with_token("/", &token)).await;
    assert_eq!(json["appointments"][0]["status"], "completed");

    let (status, json) = send(&app.router, post_json(&cancel_uri, &token, json!({}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "Appointment cannot be modified in current status: completed");
}

#[tokio::test]
async fn test_booking_missing_fields() {
    let app = create_test_app(TestConfig::default());
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (status, json) = send(
        &app.router,
        post_json("/", &token, json!({ "scheduled_for": "2024-01-15T09:30:00" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please choose a doctor");

    let (status, json) = send(&app.router, post_json("/", &token, json!({ "doctor_id": "1" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please select an appointment date and time");
}

#[tokio::test]
async fn test_cancel_twice_conflicts() {
    let app = create_test_app(TestConfig::default());
    let token = TestUser::default().sign_in(&app.sessions).await;

    let (_, booked) = send(
        &app.router,
        post_json("/", &token, json!({ "doctor_id": "2", "scheduled_for": "2024-01-16T11:00:00" })),
    )
    .await;
    let cancel_uri = format!("/{}/cancel", booked["appointment"]["id"].as_str().unwrap());

    let (status, json) = send(&app.router, post_json(&cancel_uri, &token, json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["appointment"]["status"], "cancelled");

    let (status, _) = send(&app.router, post_json(&cancel_uri, &token, json!({}))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_other_patients_cannot_cancel() {
    let app = create_test_app(TestConfig::default());
    let owner = TestUser::default().sign_in(&app.sessions).await;
    let stranger = TestUser::default().sign_in(&app.sessions).await;

    let (_, booked) = send(
        &app.router,
        post_json("/", &owner, json!({ "doctor_id": "2", "scheduled_for": "2024-01-16T11:00:00" })),
    )
    .await;
    let cancel_uri = format!("/{}/cancel", booked["appointment"]["id"].as_str().unwrap());

    let (status, _) = send(&app.router, post_json(&cancel_uri, &stranger, json!({}))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, listed) = send(&app.router, get_with_token("/", &stranger)).await;
    assert_eq!(listed["total"], 0);
}

#[tokio::test]
async fn test_booked_slots_stay_listed_by_default() {
    let app = create_test_app(TestConfig::default());
    let token = TestUser::default().sign_in(&app.sessions).await;

    send(
        &app.router,
        post_json("/", &token, json!({ "doctor_id": "1", "scheduled_for": "2024-01-15T09:00:00" })),
    )
    .await;

    let (_, json) = send(&app.router, get("/slots?date=2024-01-15&doctor_id=1")).await;
    assert_eq!(json["total"], 16);
}

#[tokio::test]
async fn test_booked_slots_hidden_when_enabled() {
    let app = create_test_app(TestConfig::hiding_booked_slots());
    let token = TestUser::default().sign_in(&app.sessions).await;

    send(
        &app.router,
        post_json("/", &token, json!({ "doctor_id": "1", "scheduled_for": "2024-01-15T09:00:00" })),
    )
    .await;

    let (_, json) = send(&app.router, get("/slots?date=2024-01-15&doctor_id=1")).await;
    assert_eq!(json["total"], 15);
    assert_eq!(json["slots"][0]["label"], "9:30 AM");

    // Another doctor's day is untouched
    let (_, json) = send(&app.router, get("/slots?date=2024-01-15&doctor_id=2")).await;
    assert_eq!(json["total"], 16);
}
