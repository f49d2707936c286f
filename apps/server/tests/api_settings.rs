//! Settings API tests.

mod common;

use axum::http::StatusCode;
use lexiflow_core::GlobalSettings;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::TestContext;

/// Test getting all settings returns defaults.
#[tokio::test]
async fn test_get_all_settings_default() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/settings").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["global"]["max_typo_distance"], 2);
    assert_eq!(body["global"]["min_typo_length"], 4);
    assert_eq!(body["global"]["points_per_answer"], 10);
    assert!(body["topics"].as_object().unwrap().is_empty());
}

/// Test the context can start with custom settings.
#[tokio::test]
async fn test_configured_global_settings() {
    let ctx = TestContext::with_settings(GlobalSettings {
        max_typo_distance: 1,
        min_typo_length: 6,
        points_per_answer: 5,
    });
    let server = ctx.server();

    let body: Value = server.get("/api/settings").await.json();
    assert_eq!(body["global"]["min_typo_length"], 6);
}

/// Test updating global settings.
#[tokio::test]
async fn test_update_global_settings() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .put("/api/settings/global")
        .json(&json!({ "points_per_answer": 50 }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["points_per_answer"], 50);
    // Other fields should remain default
    assert_eq!(body["max_typo_distance"], 2);

    let stored = ctx.state.settings.global().await;
    assert_eq!(stored.points_per_answer, 50);
}

/// Test updating and deleting topic settings.
#[tokio::test]
async fn test_topic_settings_lifecycle() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let topic = ctx.create_topic("Verbs");

    let response = server
        .put(&format!("/api/settings/topic/{}", topic.id))
        .json(&json!({ "min_typo_length": 6 }))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["min_typo_length"], 6);
    assert!(body.get("max_typo_distance").is_none());

    let body: Value = server.get("/api/settings").await.json();
    assert_eq!(
        body["topics"][topic.id.to_string()]["min_typo_length"],
        6
    );

    server
        .delete(&format!("/api/settings/topic/{}", topic.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .delete(&format!("/api/settings/topic/{}", topic.id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Test topic settings require an existing topic.
#[tokio::test]
async fn test_topic_settings_unknown_topic() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .put(&format!("/api/settings/topic/{}", Uuid::new_v4()))
        .json(&json!({ "min_typo_length": 6 }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
