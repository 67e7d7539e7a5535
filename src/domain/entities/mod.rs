//! Core domain entities.
//!
//! - [`Link`] - A stored short code → target URL mapping with click metadata
//! - [`NewLink`] - Input for creating a link

pub mod link;

pub use link::{Link, NewLink};
