#![allow(dead_code)]

use linkshort::application::services::LinkService;
use linkshort::infrastructure::persistence::{PoolSettings, SqliteLinkRepository, connect_pool};
use linkshort::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

/// Opens a fresh in-memory database with migrations applied.
///
/// A single connection that never expires keeps the in-memory database alive
/// for the whole test.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}

/// Opens a file-backed database through the production pool builder.
///
/// Several connections, WAL and the busy timeout are all in play, so
/// concurrent statements genuinely compete for the write lock. Keep the
/// returned directory alive for as long as the pool is used.
pub async fn file_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("links.db").display());

    let settings = PoolSettings {
        max_connections: 8,
        connect_timeout: Duration::from_secs(30),
        idle_timeout: Duration::from_secs(600),
        max_lifetime: Duration::from_secs(1800),
    };

    let pool = connect_pool(&url, &settings).await.unwrap();

    (dir, pool)
}

pub fn create_test_repository(pool: SqlitePool) -> Arc<SqliteLinkRepository> {
    Arc::new(SqliteLinkRepository::new(Arc::new(pool)))
}

pub fn create_test_service(pool: SqlitePool) -> Arc<LinkService<SqliteLinkRepository>> {
    Arc::new(LinkService::new(create_test_repository(pool)))
}

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(create_test_service(pool))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url, created_at) VALUES (?, ?, ?)")
        .bind(code)
        .bind(url)
        .bind(chrono::Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_clicks(pool: &SqlitePool, code: &str) -> Option<i64> {
    sqlx::query_scalar("SELECT clicks FROM links WHERE code = ?")
        .bind(code)
        .fetch_optional(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}
