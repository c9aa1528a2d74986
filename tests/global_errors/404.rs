//! tests/global_errors/404.rs
//! Not-found errors answer 404 with the fixed message and the detail under errors.general.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Resource not found");
    assert_eq!(
        json["errors"],
        json!({ "general": ["The route /does-not-exist could not be found."] })
    );
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn not_found_message_is_fixed_regardless_of_error() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/errors/not-found", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["message"], "Resource not found");
    assert_eq!(json["errors"]["general"][0], "Deliberate not found for testing purposes");
}

#[tokio::test]
async fn unparsable_product_id_is_not_found() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/products/abc", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["message"], "Resource not found");
    assert!(json["errors"]["general"].is_array());
}
