mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{read_json, TestApp};

#[tokio::test]
async fn test_triggers_catalog() {
    let app = TestApp::new();
    let json = app.get_json("/api/automation/triggers").await;

    let triggers = json["triggers"].as_array().unwrap();
    assert_eq!(triggers.len(), 3);
    assert_eq!(triggers[0]["name"], "Low Engagement Alert");
    assert_eq!(triggers[0]["status"], "active");
    assert_eq!(triggers[1]["condition"], "Best time reached");
}

#[tokio::test]
async fn test_execute_action() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/automation/execute",
            Some(json!({"action_type": "post_to_twitter", "params": {"draft": 12}})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["result"]["action"], "post_to_twitter");
    assert_eq!(json["result"]["status"], "completed");
    assert_eq!(
        json["result"]["details"],
        "Successfully executed post_to_twitter"
    );
    assert_eq!(json["result"]["execution_time"], "2024-06-10T12:00:00Z");
}

#[tokio::test]
async fn test_execute_requires_action_type() {
    let app = TestApp::new();

    for body in [json!({}), json!({"action_type": ""})] {
        let response = app
            .request(Method::POST, "/api/automation/execute", Some(body))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = read_json(response).await;
        assert_eq!(json["error"], "Bad Request");
        assert!(json["message"].is_string());
    }
}

#[tokio::test]
async fn test_create_workflow_returns_created() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/automation/workflow/create",
            Some(json!({
                "name": "Weekly digest",
                "trigger": "every monday",
                "actions": [{"type": "email", "to": "team"}]
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = read_json(response).await;
    let workflow = &json["workflow"];
    let id = workflow["id"].as_u64().unwrap();
    assert!((1_000..=9_999).contains(&id));
    assert_eq!(workflow["name"], "Weekly digest");
    assert_eq!(workflow["status"], "active");
    assert_eq!(workflow["actions"][0]["type"], "email");
    assert_eq!(workflow["created_at"], "2024-06-10T12:00:00Z");
}

#[tokio::test]
async fn test_create_workflow_without_name_is_rejected() {
    let app = TestApp::new();
    let response = app
        .request(
            Method::POST,
            "/api/automation/workflow/create",
            Some(json!({"actions": []})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logs_catalog() {
    let app = TestApp::new();
    let json = app.get_json("/api/automation/logs").await;

    let logs = json["logs"].as_array().unwrap();
    assert_eq!(logs.len(), 3);
    assert_eq!(logs[0]["timestamp"], "2025-10-12T08:30:00Z");
    assert_eq!(logs[2]["action"], "SEO optimization");
}
