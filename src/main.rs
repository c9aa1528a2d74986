// Start of file: src/main.rs

use axum::{serve, Router};
use tokio::net::TcpListener;
use tracing::info;

use catalog_api::config::{environment::EnvironmentVariables, state::AppState};
use catalog_api::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
    let state: AppState = AppState::new(environment.clone());

    state.initialize().await?;

    let app: Router = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    // Gracefully close database connections
    state.shutdown().await;

    Ok(())
}

// End of file: src/main.rs
