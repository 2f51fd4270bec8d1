//! Database connection management

use sqlx::{Sqlite, SqlitePool, Transaction, sqlite::SqlitePoolOptions};

const SCHEMA_SQL: &str = include_str!("sql/schema.sql");

#[derive(Debug, Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on the shared pool.
    ///
    /// # Errors
    ///
    /// Returns an error when a connection cannot be acquired or the
    /// transaction cannot be started.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin().await
    }
}

/// Connect to the `SQLite` database at the given URL.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new().connect(database_url).await
}

/// Create the waitlist and settings tables when they do not exist yet.
///
/// Safe to run on every process start; all statements are `IF NOT EXISTS`.
///
/// # Errors
///
/// Returns an error when any schema statement fails.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA_SQL).execute(pool).await?;

    Ok(())
}
