//! tests/global_errors/401_403.rs
//! Auth and access errors keep their own message.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_401_for_unauthenticated() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/unauthorized", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Unauthenticated.");
}

#[tokio::test]
async fn returns_403_for_forbidden() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/forbidden", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["message"], "This action is unauthorized.");
}
