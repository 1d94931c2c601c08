//! API integration tests
//!
//! Each test drives a freshly seeded router in-process.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use guardpost_server::{
    api, config::AppConfig, fixtures::Fixtures, projection, services::auth::hash_password,
    AppState,
};

const PASSWORD: &str = "guardpost";
const SUPERVISOR: &str = "anna@guardpost.local";
const GUARD: &str = "lena@guardpost.local";

fn app() -> Router {
    let hash = hash_password(PASSWORD).expect("Failed to hash seed password");
    let state = AppState::new(AppConfig::default(), Fixtures::seed(projection::today(), &hash));
    api::router(state)
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("Failed to build request");

    let response = app.clone().oneshot(request).await.expect("Failed to send request");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    // Extractor rejections carry plain text bodies
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn login(app: &Router, email: &str) -> String {
    login_with(app, email, PASSWORD).await
}

async fn login_with(app: &Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);
    body["token"].as_str().expect("No token in response").to_string()
}

fn ids(body: &Value) -> Vec<String> {
    body["requests"]
        .as_array()
        .expect("requests is not an array")
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["store"]["requests"], 7);
    assert_eq!(body["store"]["staff"], 4);
}

#[tokio::test]
async fn test_login() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "ANNA@guardpost.local", "password": PASSWORD })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["staff"]["role"], "supervisor");
    assert!(body["staff"].get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": SUPERVISOR, "password": "wrong-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/auth/login",
        None,
        Some(json!({ "email": "not-an-email", "password": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_requires_authentication() {
    let app = app();
    let (status, _) = send(&app, Method::GET, "/api/v1/requests", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/v1/sites", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_current_user() {
    let app = app();
    let token = login(&app, GUARD).await;
    let (status, body) = send(&app, Method::GET, "/api/v1/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], GUARD);
}

#[tokio::test]
async fn test_request_drawer_tabs() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/requests?tab=0&filter=All", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["req-1001", "req-1002", "req-1003"]);
    assert_eq!(body["total"], 3);
    assert_eq!(body["requests"][0]["statusColor"], "#ed6c02");

    let (_, body) = send(&app, Method::GET, "/api/v1/requests?tab=2", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["req-1006", "req-1007"]);

    // Out of range tab shows everything
    let (_, body) = send(&app, Method::GET, "/api/v1/requests?tab=9", Some(&token), None).await;
    assert_eq!(body["total"], 7);
}

#[tokio::test]
async fn test_request_drawer_time_windows() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/requests?tab=0&filter=This%20Week", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["req-1001", "req-1002"]);

    let (_, body) = send(&app, Method::GET, "/api/v1/requests?tab=0&filter=Today", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["req-1001"]);

    let (_, body) = send(&app, Method::GET, "/api/v1/requests?tab=2&filter=This%20Month", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["req-1006"]);

    let (status, _) = send(&app, Method::GET, "/api/v1/requests?filter=Yesterday", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_requests_by_status() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/requests/status/cancelled/rejected", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec!["req-1006", "req-1007"]);

    let (_, body) = send(&app, Method::GET, "/api/v1/requests/status/completed", Some(&token), None).await;
    assert_eq!(ids(&body), vec!["req-1004", "req-1005"]);

    let (status, body) = send(&app, Method::GET, "/api/v1/requests/status/archived", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[tokio::test]
async fn test_create_and_respond_to_request() {
    let app = app();
    let guard = login(&app, GUARD).await;
    let supervisor = login(&app, SUPERVISOR).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/requests",
        Some(&guard),
        Some(json!({ "title": "Dentist appointment", "type": "leave", "priority": "low" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("req-"));
    assert_eq!(body["status"], "pending");
    assert_eq!(body["requestedBy"], "Lena Novak");

    let (_, second) = send(
        &app,
        Method::POST,
        "/api/v1/requests",
        Some(&guard),
        Some(json!({ "title": "Second", "type": "other" })),
    )
    .await;
    assert_ne!(second["id"], body["id"]);

    let uri = format!("/api/v1/requests/{}/status", id);
    let update = json!({ "status": "completed", "message": "Enjoy" });

    let (status, _) = send(&app, Method::PUT, &uri, Some(&guard), Some(update.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(&app, Method::PUT, &uri, Some(&supervisor), Some(update.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let today = projection::today().format("%Y-%m-%d").to_string();
    assert_eq!(body["status"], "completed");
    assert_eq!(body["responseDate"], today.as_str());
    assert_eq!(body["responseMessage"], "Enjoy");
    assert_eq!(body["respondedBy"], "Anna Keller");

    let (_, all) = send(&app, Method::GET, "/api/v1/requests", Some(&guard), None).await;
    assert_eq!(all["total"], 9);

    let (status, _) = send(&app, Method::PUT, "/api/v1/requests/no-such-id/status", Some(&supervisor), Some(update)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, all) = send(&app, Method::GET, "/api/v1/requests", Some(&guard), None).await;
    assert_eq!(all["total"], 9);
}

#[tokio::test]
async fn test_create_request_rejects_bad_input() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/requests",
        Some(&token),
        Some(json!({ "title": "", "type": "leave" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/v1/requests",
        Some(&token),
        Some(json!({ "title": "Leave", "type": "leave", "requestedDate": "31/12/2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_report_search() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/reports/search?q=inc", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"][0]["name"], "Incident");
    assert_eq!(body["showCreateOption"], true);

    let (_, body) = send(&app, Method::GET, "/api/v1/reports/search?q=INCIDENT", Some(&token), None).await;
    assert_eq!(body["showCreateOption"], false);

    let (_, body) = send(&app, Method::GET, "/api/v1/reports/search", Some(&token), None).await;
    assert_eq!(body["matches"].as_array().unwrap().len(), 4);
    assert_eq!(body["showCreateOption"], false);
}

#[tokio::test]
async fn test_toggle_report_selection() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/v1/reports/report-3/selected",
        Some(&token),
        Some(json!({ "selected": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], true);

    let (status, body) = send(&app, Method::GET, "/api/v1/reports/report-3", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["selected"], true);
    assert_eq!(body["name"], "Visitor Log");

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/v1/reports/report-99/selected",
        Some(&token),
        Some(json!({ "selected": true })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_report_builder_flow() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/reports/drafts",
        Some(&token),
        Some(json!({ "name": "Parking", "color": "#9c27b0" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["draft"]["state"], "empty");
    let draft = format!("/api/v1/reports/drafts/{}", body["id"].as_str().unwrap());

    // Nothing to save yet
    let (status, _) = send(&app, Method::POST, &format!("{}/commit", draft), Some(&token), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("{}/fields", draft),
        Some(&token),
        Some(json!({ "name": "Zone", "type": "Dropdown", "required": true })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("{}/fields", draft),
        Some(&token),
        Some(json!({ "name": "Plate number", "type": "Text", "required": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"]["state"], "composing");
    let field_id = body["draft"]["fields"][0]["id"].as_str().unwrap().to_string();

    let (_, body) = send(&app, Method::DELETE, &format!("{}/fields/{}", draft, field_id), Some(&token), None).await;
    assert_eq!(body["draft"]["state"], "empty");

    let (status, _) = send(&app, Method::DELETE, &format!("{}/fields/{}", draft, field_id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for name in ["Plate number", "Zone"] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("{}/fields", draft),
            Some(&token),
            Some(json!({ "name": name, "type": "Radio", "options": ["A", "B"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, report) = send(&app, Method::POST, &format!("{}/commit", draft), Some(&token), None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(report["name"], "Parking");
    assert_eq!(report["selected"], false);
    let names: Vec<&str> = report["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Plate number", "Zone"]);

    let (status, _) = send(&app, Method::GET, &draft, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, reports) = send(&app, Method::GET, "/api/v1/reports", Some(&token), None).await;
    assert_eq!(reports.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_cancel_draft_discards_fields() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/reports/drafts",
        Some(&token),
        Some(json!({ "name": "Lost and found", "color": "#795548" })),
    )
    .await;
    let draft = format!("/api/v1/reports/drafts/{}", body["id"].as_str().unwrap());

    send(
        &app,
        Method::POST,
        &format!("{}/fields", draft),
        Some(&token),
        Some(json!({ "name": "Item", "type": "Text" })),
    )
    .await;

    let (status, _) = send(&app, Method::DELETE, &draft, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::POST, &format!("{}/commit", draft), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, reports) = send(&app, Method::GET, "/api/v1/reports", Some(&token), None).await;
    assert_eq!(reports.as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_drafts_are_private_to_their_author() {
    let app = app();
    let author = login(&app, GUARD).await;
    let other = login(&app, SUPERVISOR).await;

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/v1/reports/drafts",
        Some(&author),
        Some(json!({ "name": "Night round", "color": "#3f51b5" })),
    )
    .await;
    let draft = format!("/api/v1/reports/drafts/{}", body["id"].as_str().unwrap());
    let field = json!({ "name": "Checkpoint", "type": "Text" });

    let (status, _) = send(&app, Method::GET, &draft, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::POST, &format!("{}/fields", draft), Some(&other), Some(field.clone())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::POST, &format!("{}/commit", draft), Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&app, Method::DELETE, &draft, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::POST, &format!("{}/fields", draft), Some(&author), Some(field)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["draft"]["fields"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::POST, &format!("{}/commit", draft), Some(&author), None).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_watch_sites() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/sites/site-2", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alert");

    let (status, _) = send(&app, Method::GET, "/api/v1/sites/site-404", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, summary) = send(&app, Method::GET, "/api/v1/sites/summary", Some(&token), None).await;
    assert_eq!(summary, json!({ "total": 3, "online": 1, "offline": 1, "alert": 1 }));

    let (_, logs) = send(&app, Method::GET, "/api/v1/sites/site-1/logs", Some(&token), None).await;
    let log_ids: Vec<&str> = logs.as_array().unwrap().iter().map(|l| l["id"].as_str().unwrap()).collect();
    assert_eq!(log_ids, vec!["log-5", "log-3", "log-1"]);

    let (_, urgent) = send(&app, Method::GET, "/api/v1/logs/urgent", Some(&token), None).await;
    let urgent_ids: Vec<&str> = urgent.as_array().unwrap().iter().map(|l| l["id"].as_str().unwrap()).collect();
    assert_eq!(urgent_ids, vec!["log-3", "log-2", "log-4"]);
    assert_eq!(urgent[0]["color"], "#d32f2f");
}

#[tokio::test]
async fn test_site_map_views() {
    let app = app();
    let token = login(&app, GUARD).await;

    let (_, body) = send(&app, Method::GET, "/api/v1/sites/site-1/map", Some(&token), None).await;
    assert_eq!(body["view"], "satellite");
    assert!(body["url"].as_str().unwrap().contains("maptype=satellite"));

    let (_, body) = send(&app, Method::GET, "/api/v1/sites/site-1/map?view=street", Some(&token), None).await;
    assert!(body["url"].as_str().unwrap().contains("maptype=roadmap"));

    let (status, _) = send(&app, Method::GET, "/api/v1/sites/site-3/map", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_settings_panels() {
    let app = app();
    let guard = login(&app, GUARD).await;
    let supervisor = login(&app, SUPERVISOR).await;

    let (status, body) = send(&app, Method::GET, "/api/v1/settings/notifications", Some(&guard), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["panel"], "notifications");
    assert_eq!(body["preferences"].as_array().unwrap().len(), 5);

    let schedule = json!({
        "panel": "schedule",
        "schedule": {
            "shiftLengthHours": 12,
            "weekStartsOn": "sunday",
            "lateThresholdMinutes": 10,
            "autoAssignShifts": true
        }
    });

    let (status, _) = send(&app, Method::PUT, "/api/v1/settings", Some(&guard), Some(schedule.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let mut invalid = schedule.clone();
    invalid["schedule"]["shiftLengthHours"] = json!(30);
    let (status, _) = send(&app, Method::PUT, "/api/v1/settings", Some(&supervisor), Some(invalid)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, Method::PUT, "/api/v1/settings", Some(&supervisor), Some(schedule.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, schedule);

    let (_, body) = send(&app, Method::GET, "/api/v1/settings/schedule", Some(&guard), None).await;
    assert_eq!(body["schedule"]["weekStartsOn"], "sunday");
}

#[tokio::test]
async fn test_create_staff_member() {
    let app = app();
    let supervisor = login(&app, SUPERVISOR).await;
    let guard = login(&app, GUARD).await;

    let member = json!({
        "name": "Sara Ruiz",
        "email": "sara@guardpost.local",
        "phone": "0655555555",
        "role": "guard",
        "password": "sara-secret"
    });

    let (status, _) = send(&app, Method::POST, "/api/v1/staff", Some(&guard), Some(member.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let mut bad_phone = member.clone();
    bad_phone["phone"] = json!("06 55 55");
    let (status, body) = send(&app, Method::POST, "/api/v1/staff", Some(&supervisor), Some(bad_phone)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("phone"));

    let (status, body) = send(&app, Method::POST, "/api/v1/staff", Some(&supervisor), Some(member.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().unwrap().starts_with("staff-"));

    let (status, _) = send(&app, Method::POST, "/api/v1/staff", Some(&supervisor), Some(member)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let token = login_with(&app, "sara@guardpost.local", "sara-secret").await;
    assert!(!token.is_empty());
}
