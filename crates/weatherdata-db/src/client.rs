//! Database client and connection management

use crate::{DbError, DbResult, WeatherDataService};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, instrument};
use weatherdata_config::{DatabaseConfig, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_MAX_CONNECTIONS};

/// Database client wrapping an sqlx connection pool
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: SqlitePool,
}

impl DbClient {
    /// Create a new database client from connection string
    pub async fn new(database_url: &str) -> DbResult<Self> {
        let opts = SqliteConnectOptions::from_str(database_url)?;
        Self::connect(
            opts,
            DEFAULT_MAX_CONNECTIONS,
            Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        )
        .await
    }

    /// Create a new database client with custom options
    pub async fn with_options(opts: SqliteConnectOptions) -> DbResult<Self> {
        Self::connect(
            opts,
            DEFAULT_MAX_CONNECTIONS,
            Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
        )
        .await
    }

    /// Create a new database client from the `[database]` config section
    pub async fn from_config(config: &DatabaseConfig) -> DbResult<Self> {
        if config.max_connections() == 0 {
            return Err(DbError::ConfigError(
                "max_connections must be at least 1".to_string(),
            ));
        }
        let opts = SqliteConnectOptions::from_str(config.url())
            .map_err(|e| DbError::ConfigError(format!("invalid database url: {}", e)))?;
        Self::connect(opts, config.max_connections(), config.acquire_timeout()).await
    }

    async fn connect(
        opts: SqliteConnectOptions,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> DbResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(opts)
            .await?;

        info!("Opened database pool ({} connections max)", max_connections);
        Ok(Self { pool })
    }

    /// Get reference to underlying pool for direct queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Query service sharing this client's pool
    pub fn weather_service(&self) -> DbResult<WeatherDataService> {
        WeatherDataService::new(self.pool.clone())
    }

    /// Test the database connection
    #[instrument(skip(self))]
    pub async fn ping(&self) -> DbResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Close the connection pool gracefully
    pub async fn close(self) {
        self.pool.close().await;
    }
}

/// Build SQLite connection options from components
pub struct DbConnectionBuilder {
    filename: PathBuf,
    read_only: bool,
    create_if_missing: bool,
    busy_timeout: Duration,
}

impl DbConnectionBuilder {
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            read_only: true,
            create_if_missing: false,
            busy_timeout: Duration::from_secs(5),
        }
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn create_if_missing(mut self, create: bool) -> Self {
        self.create_if_missing = create;
        self
    }

    pub fn busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    pub fn build(self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.filename)
            .read_only(self.read_only)
            .create_if_missing(self.create_if_missing)
            .busy_timeout(self.busy_timeout)
    }
}
