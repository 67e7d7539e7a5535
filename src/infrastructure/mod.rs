//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - SQLite repository implementations and pool setup

pub mod persistence;
