//! Error types for the core domain layer.

mod domain_error;
mod field_errors;

pub use domain_error::{DomainError, DomainResult};
pub use field_errors::FieldErrors;
