//! Process-wide PostgreSQL connection pool.
//!
//! The pool is built lazily from validated [`Settings`]: no connection is
//! opened until the first query, so building it only fails on a malformed URL.

use std::{str::FromStr, sync::OnceLock, time::Duration};

use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions, PgSslMode},
};

use crate::{config::Settings, errors::DatabaseError};

const POOL_SIZE: u32 = 10;
const MAX_OVERFLOW: u32 = 20;
const POOL_RECYCLE: Duration = Duration::from_secs(300);

static DATABASE: OnceLock<Database> = OnceLock::new();

#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Builds a new pool. Must be called inside a tokio runtime.
    pub fn connect(settings: &Settings) -> Result<Self, DatabaseError> {
        let options = PgConnectOptions::from_str(&settings.database_url)
            .map_err(DatabaseError::InvalidUrl)?
            .ssl_mode(PgSslMode::Require);

        let pool = PgPoolOptions::new()
            .min_connections(0)
            .max_connections(POOL_SIZE + MAX_OVERFLOW)
            .max_lifetime(POOL_RECYCLE)
            .test_before_acquire(true)
            .connect_lazy_with(options);

        tracing::info!(max_connections = POOL_SIZE + MAX_OVERFLOW, "database pool created");
        Ok(Self { pool })
    }

    /// Returns the process-wide pool, building it on first use.
    pub fn global(settings: &Settings) -> Result<&'static Database, DatabaseError> {
        if let Some(db) = DATABASE.get() {
            return Ok(db);
        }

        let db = Self::connect(settings)?;
        Ok(DATABASE.get_or_init(|| db))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs a trivial query to check the database is reachable.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
