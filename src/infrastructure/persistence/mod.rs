//! SQLite persistence.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries, plus pool construction shared by the server and the admin CLI.
//!
//! - [`SqliteLinkRepository`] - Link storage, lookup and atomic click counting
//! - [`connect_pool`] - Opens the pool and applies migrations

pub mod pool;
pub mod sqlite_link_repository;

pub use pool::{PoolSettings, connect_pool};
pub use sqlite_link_repository::SqliteLinkRepository;
