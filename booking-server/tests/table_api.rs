mod common;

use common::{send, send_raw, test_app, token_for};
use http::StatusCode;
use serde_json::{Value, json};

fn staff_token() -> String {
    token_for("staff-1", "Staff", "staff@example.com")
}

async fn create_table(app: &axum::Router, token: &str, slots: i32) -> Value {
    let (status, body) = send(
        app,
        "POST",
        "/api/v1/table",
        Some(token),
        Some(json!({ "status": "free", "type": "patio", "slots": slots })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "create failed: {body}");
    body
}

#[tokio::test]
async fn create_then_get_table() {
    let (app, _) = test_app();
    let token = staff_token();
    let created = create_table(&app, &token, 4).await;

    assert_eq!(created["status"], "free");
    assert_eq!(created["type"], "patio");
    assert_eq!(created["slots"], 4);
    assert_eq!(created["del_flg"], false);

    let id = created["_id"].as_str().expect("id");
    let (status, fetched) = send(&app, "GET", &format!("/api/v1/table/{id}"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn slots_outside_range_are_rejected() {
    let (app, _) = test_app();
    let token = staff_token();

    for slots in [0, 11] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/v1/table",
            Some(&token),
            Some(json!({ "status": "free", "type": "patio", "slots": slots })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "slots={slots}");
        assert_eq!(body["code"], 2);
    }

    // Boundaries are inclusive.
    create_table(&app, &token, 1).await;
    create_table(&app, &token, 10).await;
}

#[tokio::test]
async fn blank_status_is_rejected() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/table",
        Some(&staff_token()),
        Some(json!({ "status": "   ", "type": "patio", "slots": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn mutating_routes_require_token() {
    let (app, _) = test_app();

    let (status, _) = send(
        &app,
        "POST",
        "/api/v1/table",
        None,
        Some(json!({ "status": "free", "type": "patio", "slots": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "PUT",
        "/api/v1/table",
        Some("not-a-jwt"),
        Some(json!({ "_id": "x", "status": "busy" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/v1/table",
        None,
        Some(json!({ "_id": "x", "del_flg": true })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_status_changes_only_status() {
    let (app, _) = test_app();
    let token = staff_token();
    let created = create_table(&app, &token, 6).await;
    let id = created["_id"].as_str().expect("id");

    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/table",
        Some(&token),
        Some(json!({ "_id": id, "status": "occupied" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);

    let (_, fetched) = send(&app, "GET", &format!("/api/v1/table/{id}"), None, None).await;
    assert_eq!(fetched["status"], "occupied");
    assert_eq!(fetched["type"], "patio");
    assert_eq!(fetched["slots"], 6);
}

#[tokio::test]
async fn update_unknown_table_is_not_found() {
    let (app, _) = test_app();
    let (status, body) = send(
        &app,
        "PUT",
        "/api/v1/table",
        Some(&staff_token()),
        Some(json!({ "_id": "missing", "status": "occupied" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn soft_delete_hides_and_restore_brings_back() {
    let (app, _) = test_app();
    let token = staff_token();
    let created = create_table(&app, &token, 2).await;
    let id = created["_id"].as_str().expect("id");
    let uri = format!("/api/v1/table/{id}");

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/v1/table",
        Some(&token),
        Some(json!({ "_id": id, "del_flg": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);

    // A retired table cannot change status.
    let (status, _) = send(
        &app,
        "PUT",
        "/api/v1/table",
        Some(&token),
        Some(json!({ "_id": id, "status": "occupied" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        "/api/v1/table",
        Some(&token),
        Some(json!({ "_id": id, "del_flg": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, fetched) = send(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["del_flg"], false);
    assert_eq!(fetched["status"], "free");
}

#[tokio::test]
async fn health_and_readiness() {
    let (app, _) = test_app();

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = send(&app, "GET", "/readiness", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn responses_carry_request_id() {
    let (app, _) = test_app();

    let resp = send_raw(&app, "GET", "/health", None, None).await;
    let generated = resp
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("request id");
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}

#[tokio::test]
async fn unknown_path_is_json_not_found() {
    let (app, _) = test_app();
    let (status, body) = send(&app, "GET", "/api/v1/nothing-here", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3);
}
