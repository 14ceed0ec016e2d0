//! `SQLite` connection pool setup, schema bootstrap, and lifecycle.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Tables every domus store must provide.
const REQUIRED_TABLES: [&str; 3] = ["rooms", "devices", "measurements"];

const SELECT_TABLE_NAMES: &str = "SELECT name FROM sqlite_master WHERE type = 'table'";

/// Configuration for the `SQLite` storage adapter.
///
/// The store location is the only configuration this system takes.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:domus.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Read configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DOMUS_DATABASE_URL` is not set.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        Ok(Self {
            database_url: std::env::var("DOMUS_DATABASE_URL")?,
        })
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and bootstraps the schema on fresh stores.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema bootstrap fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect to the database and bootstrap the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema bootstrap fails.
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Check whether all required tables (`rooms`, `devices`,
    /// `measurements`) exist in the store. Callers use this before
    /// trusting that the schema is present.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the catalog query fails.
    pub async fn tables_present(&self) -> Result<bool, StorageError> {
        let rows: Vec<(String,)> = sqlx::query_as(SELECT_TABLE_NAMES)
            .fetch_all(&self.pool)
            .await?;

        let names: Vec<&str> = rows.iter().map(|row| row.0.as_str()).collect();
        Ok(REQUIRED_TABLES.iter().all(|table| names.contains(table)))
    }

    /// Close the pool, waiting for open connections to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db() -> Database {
        Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn should_create_pool_and_bootstrap_schema_when_using_memory_db() {
        let db = memory_db().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' AND name != '_sqlx_migrations' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|row| row.0.as_str()).collect();
        assert!(names.contains(&"rooms"), "missing rooms table");
        assert!(names.contains(&"devices"), "missing devices table");
        assert!(names.contains(&"measurements"), "missing measurements table");
    }

    #[tokio::test]
    async fn should_report_tables_present_after_bootstrap() {
        let db = memory_db().await;
        assert!(db.tables_present().await.unwrap());
    }

    #[tokio::test]
    async fn should_report_tables_missing_after_drop() {
        let db = memory_db().await;
        sqlx::query("DROP TABLE measurements")
            .execute(db.pool())
            .await
            .unwrap();

        assert!(!db.tables_present().await.unwrap());
    }

    #[tokio::test]
    async fn should_reject_queries_after_close() {
        let db = memory_db().await;
        db.close().await;

        let result: Result<(i64,), sqlx::Error> =
            sqlx::query_as("SELECT 1").fetch_one(db.pool()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn should_enforce_unique_room_names() {
        let db = memory_db().await;
        sqlx::query("INSERT INTO rooms (id, name) VALUES (1, 'Kitchen')")
            .execute(db.pool())
            .await
            .unwrap();

        let duplicate = sqlx::query("INSERT INTO rooms (id, name) VALUES (2, 'Kitchen')")
            .execute(db.pool())
            .await;

        assert!(duplicate.is_err());
    }
}
