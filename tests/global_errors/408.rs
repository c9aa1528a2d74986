//! tests/global_errors/408.rs
//! Requests outliving the configured timeout are answered with a 408 envelope.

use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use catalog_api::EnvironmentVariables;

use crate::common;

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let base_url: String = common::spawn_app_with(EnvironmentVariables {
        default_timeout_seconds: 1,
        ..EnvironmentVariables::default()
    });

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        async {
            reqwest::Client::new()
                .get(format!("{}/errors/timeout", base_url))
                .send()
                .await
        },
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");

    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");
    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = common::json_body(resp).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Request timeout");
    assert!(json.get("errors").is_none());
}
