// =============================================================================
// DATABASE SERVICE - PostgreSQL pool and schema management
// =============================================================================

use std::{sync::Arc, time::Duration};
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::{Executor, PgPool};
use tracing::info;

use crate::config::environment::EnvironmentVariables;

// =============================================================================
// SQL CONSTANTS
// =============================================================================

/// Single initialization SQL script
const INIT_SCHEMA_SQL: &str = include_str!("sql/schema_init.sql");

// =============================================================================
// DATABASE SERVICE
// =============================================================================

/// Database service owning the application's connection pool.
/// The pool is lazy: no connection is opened until the first query.
#[derive(Clone, Debug)]
pub struct DatabaseService {
    pool: PgPool,
    config: Arc<EnvironmentVariables>,
}

impl DatabaseService {
    pub fn new(config: Arc<EnvironmentVariables>) -> Self {
        let pool: PgPool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.default_timeout_seconds))
            .idle_timeout(Duration::from_secs(30))
            .connect_lazy_with(Self::connect_options(&config));

        Self { pool, config }
    }

    /// Verifies connectivity and runs the schema initialization script.
    pub async fn initialize(&self) -> Result<()> {
        info!(
            host = %self.config.db_host,
            database = %self.config.db_name,
            "Initializing DatabaseService..."
        );

        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .context("Failed to connect to the database")?;

        self.initialize_schema().await?;

        info!("DatabaseService initialized successfully");
        Ok(())
    }

    /// Gracefully shuts down the service.
    pub async fn shutdown(&self) {
        info!("Initiating DatabaseService shutdown...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// =============================================================================
// INTERNAL HELPERS
// =============================================================================

impl DatabaseService {
    /// Connection options with SSL mode depending on the environment and UTC timezone
    fn connect_options(config: &EnvironmentVariables) -> PgConnectOptions {
        let options: PgConnectOptions = PgConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_password)
            .database(&config.db_name)
            // Always use UTC and standard app name
            .options([("timezone", "UTC"), ("application_name", "catalog-api")]);

        if config.is_production() {
            options.ssl_mode(PgSslMode::Require)
        } else {
            options.ssl_mode(PgSslMode::Prefer)
        }
    }

    /// Runs the initialization SQL
    async fn initialize_schema(&self) -> Result<()> {
        info!("Executing schema initialization...");

        self.pool
            .execute(INIT_SCHEMA_SQL)
            .await
            .context("Failed to execute schema initialization SQL")?;

        info!("Schema initialization completed");
        Ok(())
    }
}
