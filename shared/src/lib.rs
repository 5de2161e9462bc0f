//! Shared utilities and common types for the WorkNest server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope types
//! - Utility functions (phone validation, credential digest, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment,
    CacheConfig, DatabaseConfig, ServerConfig, SessionConfig, SmsConfig,
};
pub use types::{ApiResponse, FieldErrorMap};
pub use utils::{digest, phone, validation};
