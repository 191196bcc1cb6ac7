use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::{fixture, rstest};
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::state::body_json;

#[fixture]
fn before_each() -> (TempDir, AppConfig) {
    let dir = tempfile::tempdir().expect("failed to create tempdir");
    let config = AppConfig {
        events_file: dir.path().join("Data").join("events.json"),
        registrations_file: dir.path().join("Data").join("registration.json"),
        ..AppConfig::default()
    };
    (dir, config)
}

async fn boot(config: &AppConfig) -> Router {
    router(AppState::from_config(config).await.expect("failed to boot"))
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[rstest]
#[tokio::test]
async fn it_should_create_events_without_deduplicating(before_each: (TempDir, AppConfig)) {
    let (_dir, config) = before_each;
    let app = boot(&config).await;
    let hackathon = json!({ "name": "Hackathon", "date": "2025-01-10" });

    let (status, first) = send(&app, "POST", "/events", Some(hackathon.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        first,
        json!({ "id": 1, "name": "Hackathon", "date": "2025-01-10" })
    );

    let (status, second) = send(&app, "POST", "/events", Some(hackathon)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        second,
        json!({ "id": 2, "name": "Hackathon", "date": "2025-01-10" })
    );
}

#[rstest]
#[tokio::test]
async fn it_should_reject_a_repeated_registration(before_each: (TempDir, AppConfig)) {
    let (_dir, config) = before_each;
    let app = boot(&config).await;
    let registration = json!({ "eventId": 1, "name": "A", "email": "a@x.com" });

    let (status, first) = send(&app, "POST", "/registrations", Some(registration.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], json!(true));

    let (status, second) = send(&app, "POST", "/registrations", Some(registration)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        second,
        json!({ "success": false, "message": "User already registered for this event" })
    );

    let (_, listed) = send(&app, "GET", "/registrations", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_same_state_after_a_restart(before_each: (TempDir, AppConfig)) {
    let (_dir, config) = before_each;
    let app = boot(&config).await;

    for name in ["Hackathon", "Career Fair", "Hack Night"] {
        send(
            &app,
            "POST",
            "/events",
            Some(json!({ "name": name, "date": "2025-02-14" })),
        )
        .await;
    }
    send(&app, "PUT", "/events/2", Some(json!({ "date": "2025-03-01" }))).await;
    send(&app, "DELETE", "/events/1", None).await;
    send(
        &app,
        "POST",
        "/registrations",
        Some(json!({ "eventId": 3, "name": "A", "email": "a@x.com" })),
    )
    .await;

    let (_, events_before) = send(&app, "GET", "/events", None).await;
    let (_, registrations_before) = send(&app, "GET", "/registrations", None).await;

    let restarted = boot(&config).await;
    let (_, events_after) = send(&restarted, "GET", "/events", None).await;
    let (_, registrations_after) = send(&restarted, "GET", "/registrations", None).await;

    assert_eq!(events_after, events_before);
    assert_eq!(
        events_after,
        json!([
            { "id": 2, "name": "Career Fair", "date": "2025-03-01" },
            { "id": 3, "name": "Hack Night", "date": "2025-02-14" }
        ])
    );
    assert_eq!(registrations_after, registrations_before);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_ids_past_deleted_gaps(before_each: (TempDir, AppConfig)) {
    let (_dir, config) = before_each;
    let app = boot(&config).await;

    for name in ["A", "B", "C"] {
        send(
            &app,
            "POST",
            "/events",
            Some(json!({ "name": name, "date": "2025-01-01" })),
        )
        .await;
    }
    let (status, _) = send(&app, "DELETE", "/events/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, created) = send(
        &app,
        "POST",
        "/events",
        Some(json!({ "name": "D", "date": "2025-01-01" })),
    )
    .await;
    assert_eq!(created["id"], json!(4));
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_boot_on_a_malformed_events_file(before_each: (TempDir, AppConfig)) {
    let (_dir, config) = before_each;
    std::fs::create_dir_all(config.events_file.parent().unwrap()).unwrap();
    std::fs::write(&config.events_file, "{ broken").unwrap();

    assert!(AppState::from_config(&config).await.is_err());
}
