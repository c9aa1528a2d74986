//! tests/global_errors/400.rs
//! A pre-built response error always answers 400 with the literal "Error".

use reqwest::StatusCode;
use serde_json::Value;

use crate::common;

#[tokio::test]
async fn returns_400_for_prebuilt_response() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/response", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Error");
    assert_eq!(json["errors"]["status"], 409);
}
