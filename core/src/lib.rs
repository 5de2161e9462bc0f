//! # WorkNest Core
//!
//! Core business logic and domain layer for the WorkNest backend.
//! This crate contains domain entities, the account form validation and
//! service logic, repository interfaces, and error types that form the
//! foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod forms;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
