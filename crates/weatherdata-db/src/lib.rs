//! Read-only access layer for the `weather_data` table
//!
//! Uses an existing schema - NO migrations.
//! The caller owns connection setup; `DbClient` is a convenience for
//! opening a pool from configuration.

pub mod client;
pub mod query;
pub mod schema;
pub mod service;

pub use client::*;
pub use query::*;
pub use schema::*;
pub use service::*;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Database pool is closed")]
    PoolClosed,
}

pub type DbResult<T> = Result<T, DbError>;
