//! tests/global_errors/413.rs
//! Bodies over the configured limit are answered with a 413 envelope.

use reqwest::StatusCode;
use serde_json::Value;

use catalog_api::EnvironmentVariables;

use crate::common;

#[tokio::test]
async fn returns_413_when_payload_exceeds_default_limit() {
    let base_url: String = common::spawn_app();

    // A JSON string slightly larger than the 2MB default.
    let oversized_payload: String = format!("{{\"email\":\"{}\"}}", "X".repeat(2_097_152 + 100));

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/errors/validation", base_url))
        .header("content-type", "application/json")
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Request body too large");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn limit_follows_configuration() {
    let base_url: String = common::spawn_app_with(EnvironmentVariables {
        max_request_body_size: 1024,
        ..EnvironmentVariables::default()
    });

    let payload: String = format!("{{\"email\":\"{}@example.com\"}}", "a".repeat(2048));

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/errors/validation", base_url))
        .header("content-type", "application/json")
        .body(payload)
        .send()
        .await
        .expect("Failed to send request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
