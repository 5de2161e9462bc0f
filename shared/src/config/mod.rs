//! Configuration module with business-specific sub-modules
//!
//! Each sub-module owns one configuration area and knows how to load itself
//! from environment variables:
//! - `cache` - Redis connection for verification codes and sessions
//! - `database` - MySQL connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server binding
//! - `session` - Session cookie and expiry settings
//! - `sms` - SMS gateway credentials and scene templates

pub mod cache;
pub mod database;
pub mod environment;
pub mod server;
pub mod session;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::ServerConfig;
pub use session::SessionConfig;
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment the server runs in
    pub environment: Environment,

    /// HTTP server configuration
    pub server: ServerConfig,

    /// MySQL configuration
    pub database: DatabaseConfig,

    /// Redis configuration
    pub cache: CacheConfig,

    /// Session cookie configuration
    pub session: SessionConfig,

    /// SMS gateway configuration
    pub sms: SmsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            cache: CacheConfig::default(),
            session: SessionConfig::default(),
            sms: SmsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the complete configuration from environment variables.
    ///
    /// Every section falls back to its development defaults for variables
    /// that are not set, so a bare `.env` is enough to boot locally.
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            cache: CacheConfig::from_env(),
            session: SessionConfig::from_env(),
            sms: SmsConfig::from_env(),
        }
    }
}
