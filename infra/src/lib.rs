//! # Infrastructure Layer
//!
//! Concrete implementations of the seams the core crate defines:
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis-backed verification-code and session stores
//! - **SMS**: gateway integrations (Tencent Cloud single-send API, mock)
//! - **Captcha**: image verification code rendering
//!
//! In-memory store variants exist alongside the Redis ones for local
//! development and endpoint tests.

pub mod cache;
pub mod captcha;
pub mod database;
pub mod sms;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS gateway error
    #[error("SMS gateway error: {0}")]
    Sms(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
