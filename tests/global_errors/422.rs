//! tests/global_errors/422.rs
//! Validation failures answer 422 with the field-level messages untouched.

use reqwest::StatusCode;
use serde_json::{json, Value};

use crate::common;

#[tokio::test]
async fn returns_422_with_field_errors() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/errors/validation", base_url))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Validation failed");
    assert_eq!(json["errors"], json!({ "email": ["required"] }));
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/errors/validation", base_url))
        .header("content-type", "application/json")
        .body("{\"email\":")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = common::json_body(resp).await;
    assert!(json["errors"]["body"][0].is_string());
}

#[tokio::test]
async fn invalid_pagination_query_is_rejected_before_the_database() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/products?per_page=0", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = common::json_body(resp).await;
    assert_eq!(
        json["errors"],
        json!({ "per_page": ["The per page must be between 1 and 100."] })
    );
}

#[tokio::test]
async fn invalid_product_is_rejected_before_the_database() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/products", base_url))
        .json(&json!({ "name": "", "price": -5.0, "image_url": "nope" }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["errors"]["name"][0], "The name must be between 1 and 255 characters.");
    assert_eq!(json["errors"]["price"][0], "The price must be between 0 and 99999999.99.");
    assert_eq!(json["errors"]["image_url"][0], "The image url must be a valid URL.");
}
