//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use async_trait::async_trait;

/// Failures reported by a link store.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The unique constraint on `code` rejected the write.
    #[error("Link code already exists")]
    AlreadyExists,

    #[error("Link not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository interface for managing short links.
///
/// # Atomicity
///
/// Every method is a single transaction. In particular:
///
/// - [`create`](LinkRepository::create) relies on the unique index, so two
///   concurrent creates with one code yield one success and one
///   [`RepositoryError::AlreadyExists`].
/// - [`increment_clicks`](LinkRepository::increment_clicks) bumps `clicks` and
///   sets `last_clicked` in one statement; no caller sees one without the other.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with `clicks = 0` and no `last_clicked`.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::AlreadyExists`] if the code is taken.
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, RepositoryError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, RepositoryError>;

    /// Lists every link, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<Link>, RepositoryError>;

    /// Permanently removes a link.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no link has this code.
    async fn delete(&self, code: &str) -> Result<(), RepositoryError>;

    /// Atomically sets `clicks = clicks + 1` and `last_clicked = now`,
    /// returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no link has this code.
    async fn increment_clicks(&self, code: &str) -> Result<Link, RepositoryError>;

    /// Round-trips a trivial query to verify the store is reachable.
    async fn health_check(&self) -> Result<(), RepositoryError>;
}
