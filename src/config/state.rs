// Application state shared by every handler

use std::sync::Arc;

use crate::config::environment::EnvironmentVariables;
use crate::database::DatabaseService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub database: DatabaseService,
}

impl AppState {
    /// Builds the state; the database pool connects on first use
    pub fn new(environment: EnvironmentVariables) -> Self {
        let environment_arc: Arc<EnvironmentVariables> = Arc::new(environment);
        let database: DatabaseService = DatabaseService::new(environment_arc.clone());

        Self {
            environment: environment_arc,
            database,
        }
    }

    /// Connects to the database and applies the schema
    pub async fn initialize(&self) -> anyhow::Result<()> {
        self.database.initialize().await?;
        tracing::info!("Services (DB) initialized successfully");
        Ok(())
    }

    /// Gracefully shutdown all database connections
    pub async fn shutdown(&self) {
        self.database.shutdown().await;
    }
}
