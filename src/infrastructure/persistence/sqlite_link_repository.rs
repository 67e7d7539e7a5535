//! SQLite implementation of link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, RepositoryError};

const LINK_COLUMNS: &str = "id, code, target_url, clicks, last_clicked, created_at";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    clicks: i64,
    last_clicked: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<LinkRow> for Link {
    fn from(r: LinkRow) -> Self {
        Link::new(
            r.id,
            r.code,
            r.target_url,
            r.clicks,
            r.last_clicked,
            r.created_at,
        )
    }
}

/// SQLite repository for link storage, lookup and click counting.
///
/// Every method is a single SQL statement, so each runs in its own implicit
/// transaction and SQLite's write lock serializes competing writers.
pub struct SqliteLinkRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

fn map_insert_error(e: sqlx::Error) -> RepositoryError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return RepositoryError::AlreadyExists;
    }

    RepositoryError::Database(e)
}

#[async_trait]
impl LinkRepository for SqliteLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError> {
        let sql = format!(
            "INSERT INTO links (code, target_url, clicks, last_clicked, created_at) \
             VALUES (?, ?, 0, NULL, ?) \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.code)
            .bind(&new_link.target_url)
            .bind(Utc::now())
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(map_insert_error)?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE code = ?");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn list_all(&self) -> Result<Vec<Link>, RepositoryError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links ORDER BY created_at DESC, id DESC");

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM links WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Link, RepositoryError> {
        let sql = format!(
            "UPDATE links SET clicks = clicks + 1, last_clicked = ? \
             WHERE code = ? \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(Utc::now())
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Link::from).ok_or(RepositoryError::NotFound)
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;

        Ok(())
    }
}
