//! tests/global_errors/405.rs
//! A known path requested with the wrong method answers 405 with its own message.

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_405_for_unsupported_method() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .delete(format!("{}/hello", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "The DELETE method is not supported for route /hello.");
    assert!(json.get("errors").is_none());
}
