//! # linkshort
//!
//! A URL shortener that maps short alphanumeric codes to target URLs,
//! redirects visitors and counts clicks, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity and the store contract
//! - **Application Layer** ([`application`]) - Code allocation, collision retry, redirects
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store via SQLx
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Codes are unique; the store's unique index decides, not a prior read
//! - A redirect increments `clicks` and sets `last_clicked` in one statement
//! - Deleted codes never resolve again
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::{LinkRepository, RepositoryError};
    pub use crate::error::{AppError, ErrorKind};
    pub use crate::infrastructure::persistence::SqliteLinkRepository;
    pub use crate::state::AppState;
}
