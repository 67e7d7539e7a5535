//! Repository trait definitions for the domain layer.
//!
//! The [`LinkRepository`] trait is the persistence boundary for links. The
//! store behind it owns uniqueness of codes and the atomicity of click
//! increments; services never check-then-write.
//!
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! See integration tests in `tests/repository_link.rs` for usage examples.

pub mod link_repository;

pub use link_repository::{LinkRepository, RepositoryError};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
