//! Pure helper functions used by the service layer.
//!
//! - [`validation`] - Target URL and short code format checks
//! - [`code_generator`] - Random short code generation

pub mod code_generator;
pub mod validation;
