//! tests/global_errors/500.rs
//! Unclassified errors answer 500 with their message, or "Server error" when it is empty.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_500_with_error_message() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/server?message=boom", base_url))
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "boom");
    assert!(json.get("errors").is_none());
}

#[tokio::test]
async fn empty_message_falls_back_to_server_error() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/server", base_url))
        .await
        .expect("Failed to make request.");

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["message"], "Server error");
}
