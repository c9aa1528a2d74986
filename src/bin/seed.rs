// Start of file: src/bin/seed.rs

// Populates the database with the fixture catalog. Not idempotent.

use anyhow::Context;
use tracing::info;

use catalog_api::config::{environment::EnvironmentVariables, state::AppState};
use catalog_api::core::logging::init_tracing;
use catalog_api::database::seeders;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
    let state: AppState = AppState::new(environment.clone());

    state.initialize().await?;

    let inserted: u64 = seeders::run_all(state.database.pool())
        .await
        .context("Seeding failed")?;

    info!(inserted, "Database seeded");

    state.shutdown().await;
    Ok(())
}

// End of file: src/bin/seed.rs
