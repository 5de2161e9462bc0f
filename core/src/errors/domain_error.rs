//! Domain error enum shared by services and repositories.
//!
//! User-facing messages carry both English and Chinese, separated by `|`.

use thiserror::Error;

use super::FieldErrors;

/// Errors produced by the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Validation failed; the caller renders the field map as-is
    #[error("{0}")]
    Form(#[from] FieldErrors),

    /// Relational store failure
    #[error("Database error: {message} | 数据库错误: {message}")]
    Database { message: String },

    /// Verification-code / session store failure
    #[error("Cache error: {message} | 缓存服务错误: {message}")]
    Cache { message: String },

    /// Session store failure
    #[error("Session error: {message} | 会话错误: {message}")]
    Session { message: String },

    /// Anything that should never happen in a correct deployment
    #[error("Internal error: {message} | 内部错误: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn database(message: impl Into<String>) -> Self {
        DomainError::Database { message: message.into() }
    }

    pub fn cache(message: impl Into<String>) -> Self {
        DomainError::Cache { message: message.into() }
    }

    pub fn session(message: impl Into<String>) -> Self {
        DomainError::Session { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal { message: message.into() }
    }

    /// The field error map, when this is a validation failure.
    pub fn as_form(&self) -> Option<&FieldErrors> {
        match self {
            DomainError::Form(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Result alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
