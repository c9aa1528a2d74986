//! tests/common/mod.rs
//! A shared test helper to spawn the Axum app on an ephemeral port.

#![allow(dead_code)]

use catalog_api::config::{environment::EnvironmentVariables, state::AppState};
use catalog_api::core::server::create_app;

use axum::{serve, Router};
use serde_json::Value;
use tokio::net::TcpListener as TokioTcpListener;

/// Spawns the app on a random unused port and returns its base URL.
/// The database pool is lazy, so routes that never query it work without Postgres.
pub fn spawn_app() -> String {
    spawn_app_with(EnvironmentVariables::default())
}

/// Same as `spawn_app`, with a custom configuration (e.g. a short timeout or a small body limit).
pub fn spawn_app_with(environment: EnvironmentVariables) -> String {
    let state: AppState = AppState::new(environment);

    // * Build the application using the same layers as main().
    let app: Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}

/// Reads a response body as JSON.
pub async fn json_body(resp: reqwest::Response) -> Value {
    let body: String = resp.text().await.expect("Failed to read body");
    serde_json::from_str(&body).expect("Body is not JSON")
}
