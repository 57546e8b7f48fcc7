//! Weather reading queries against the `weather_data` table

use chrono::NaiveDateTime;
use futures::TryStreamExt;
use sqlx::error::UnexpectedNullError;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, instrument, warn};
use weatherdata_core::{ReadingSource, SearchBounds, WeatherReading};

use crate::query::{build_search_query, SearchQuery};
use crate::schema::{columns, Table};
use crate::{DbError, DbResult};

/// Searches the weather readings table, optionally bounded by date.
///
/// Holds no state besides the shared pool, so clones can be handed to
/// concurrent callers freely.
#[derive(Debug, Clone)]
pub struct WeatherDataService {
    pool: SqlitePool,
}

impl WeatherDataService {
    /// Wrap an already open pool
    pub fn new(pool: SqlitePool) -> DbResult<Self> {
        if pool.is_closed() {
            return Err(DbError::PoolClosed);
        }
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Query template and bind parameters for the given bounds
    pub fn build_search_query(&self, bounds: &SearchBounds) -> SearchQuery {
        build_search_query(bounds)
    }

    /// Get readings within the given bounds, oldest first.
    ///
    /// Rows that cannot be decoded are logged and skipped. Execution
    /// failures are returned to the caller.
    #[instrument(skip(self))]
    pub async fn get_weather_data(&self, bounds: &SearchBounds) -> DbResult<Vec<WeatherReading>> {
        let query = self.build_search_query(bounds);
        let sql = query.render(Table::WeatherData);

        let mut statement = sqlx::query(&sql);
        for param in &query.params {
            statement = statement.bind(param.as_str());
        }

        let mut rows = statement.fetch(&self.pool);
        let mut readings = Vec::new();
        let mut skipped = 0usize;

        while let Some(row) = rows.try_next().await? {
            match decode_reading(&row) {
                Ok(reading) => readings.push(reading),
                Err(e) => {
                    skipped += 1;
                    warn!("Unable to add record: {}", e);
                }
            }
        }

        debug!(
            "Retrieved {} weather readings ({} skipped)",
            readings.len(),
            skipped
        );
        Ok(readings)
    }
}

fn decode_reading(row: &SqliteRow) -> Result<WeatherReading, sqlx::Error> {
    Ok(WeatherReading {
        humidity: required(row, columns::HUMIDITY)?,
        temperature: required(row, columns::TEMPERATURE)?,
        timestamp: required::<NaiveDateTime>(row, columns::TIMESTAMP)?,
    })
}

/// Decode a column that must not be NULL.
///
/// SQLite hands back 0.0 for a NULL real, so nulls are rejected here
/// rather than silently becoming readings.
fn required<'r, T>(row: &'r SqliteRow, column: &str) -> Result<T, sqlx::Error>
where
    T: sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(column)?
        .ok_or_else(|| sqlx::Error::ColumnDecode {
            index: format!("{:?}", column),
            source: Box::new(UnexpectedNullError),
        })
}

#[async_trait::async_trait]
impl ReadingSource for WeatherDataService {
    async fn readings(&self, bounds: &SearchBounds) -> anyhow::Result<Vec<WeatherReading>> {
        Ok(self.get_weather_data(bounds).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn test_rejects_closed_pool() {
        let pool = SqlitePoolOptions::new()
            .connect_lazy("sqlite::memory:")
            .unwrap();
        pool.close().await;

        let err = WeatherDataService::new(pool).unwrap_err();
        assert!(matches!(err, DbError::PoolClosed));
    }

    #[tokio::test]
    async fn test_missing_table_is_an_error() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let service = WeatherDataService::new(pool).unwrap();

        let err = service
            .get_weather_data(&SearchBounds::new())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Database(_)));
        assert!(err.to_string().contains("weather_data"));
    }
}
