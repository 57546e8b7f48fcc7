//! Fixture database for weather query tests

use anyhow::{Context, Result};
use serde::Deserialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::path::Path;
use weatherdata_db::WEATHER_DATA_DDL;

pub const FIXTURE_COUNT: usize = 11;

#[derive(Debug, Deserialize)]
pub struct FixtureRow {
    pub timestamp: String,
    pub humidity: f32,
    pub temperature: f32,
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Load the readings fixture file
pub fn load_fixture() -> Result<Vec<FixtureRow>> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/weather_data.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read fixture: {:?}", path))?;

    serde_json::from_str(&json).with_context(|| format!("Failed to parse fixture: {:?}", path))
}

/// Fresh in-memory database holding the fixture readings.
///
/// Each call gets its own database; the pool keeps a single connection
/// alive for its whole lifetime since the data lives in that connection.
pub async fn fixture_pool() -> Result<SqlitePool> {
    init_tracing();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .context("Failed to open in-memory database")?;

    sqlx::query(WEATHER_DATA_DDL)
        .execute(&pool)
        .await
        .context("Failed to create weather_data table")?;

    for row in load_fixture()? {
        insert_raw(&pool, &row.timestamp, Some(row.humidity), Some(row.temperature)).await?;
    }

    Ok(pool)
}

/// Insert a row without any validation, for exercising decode failures
pub async fn insert_raw(
    pool: &SqlitePool,
    timestamp: &str,
    humidity: Option<f32>,
    temperature: Option<f32>,
) -> Result<()> {
    sqlx::query("INSERT INTO weather_data (timestamp, humidity, temperature) VALUES (?, ?, ?)")
        .bind(timestamp)
        .bind(humidity)
        .bind(temperature)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert reading at {}", timestamp))?;
    Ok(())
}
