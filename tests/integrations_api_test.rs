mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{read_body, read_json, TestApp};

#[tokio::test]
async fn test_status_lists_connected_platforms() {
    let app = TestApp::new();
    let json = app.get_json("/api/integrations/status").await;

    let integrations = json["integrations"].as_object().unwrap();
    assert_eq!(integrations.len(), 5);
    assert_eq!(json["integrations"]["youtube"]["status"], "connected");
    assert_eq!(json["integrations"]["youtube"]["last_sync"], "10 minutes ago");
    assert_eq!(
        json["integrations"]["google_analytics"]["last_sync"],
        "30 minutes ago"
    );
}

#[tokio::test]
async fn test_status_keeps_platform_order() {
    let app = TestApp::new();
    let response = app.request(Method::GET, "/api/integrations/status", None).await;
    let body = String::from_utf8(read_body(response).await).unwrap();

    let youtube = body.find("\"youtube\"").unwrap();
    let twitter = body.find("\"twitter\"").unwrap();
    let analytics = body.find("\"google_analytics\"").unwrap();
    assert!(youtube < twitter && twitter < analytics);
}

#[tokio::test]
async fn test_youtube_stats() {
    let app = TestApp::new();
    let json = app.get_json("/api/integrations/youtube/stats").await;

    assert_eq!(json["data"]["subscribers"], 45_230);
    assert_eq!(json["data"]["engagement_rate"], 6.8);
    assert_eq!(json["data"]["top_videos"][1]["title"], "Automation Best Practices");
}

#[tokio::test]
async fn test_sync_named_platform() {
    let app = TestApp::new();
    let json = app
        .post_json("/api/integrations/sync", json!({"platform": "twitter"}))
        .await;

    assert_eq!(json["result"]["platform"], "twitter");
    assert_eq!(json["result"]["status"], "syncing");
    assert_eq!(json["result"]["started_at"], "2024-06-10T12:00:00Z");
}

#[tokio::test]
async fn test_connect_integration() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/integrations/connect",
            Some(json!({"platform": "tiktok", "credentials": {"token": "secret"}})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["result"]["platform"], "tiktok");
    assert_eq!(json["result"]["status"], "connected");

    let response = app
        .request(Method::POST, "/api/integrations/connect", Some(json!({})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
