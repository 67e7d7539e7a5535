//! Connection pool construction.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// How long a writer waits for a competing transaction before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool sizing and lifetime settings.
#[derive(Debug, Clone)]
pub struct PoolSettings {
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

/// Opens a SQLite pool for `database_url` and applies pending migrations.
///
/// The database file is created if missing. WAL journaling lets readers
/// proceed while a writer commits; concurrent writers queue on the busy
/// timeout instead of failing immediately.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the database cannot be opened,
/// or a migration fails.
pub async fn connect_pool(database_url: &str, settings: &PoolSettings) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("Invalid DATABASE_URL '{database_url}'"))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(settings.connect_timeout)
        .idle_timeout(settings.idle_timeout)
        .max_lifetime(settings.max_lifetime)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}
