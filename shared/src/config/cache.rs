//! Redis cache configuration
//!
//! One Redis instance backs both the verification-code store and the
//! session store; keys are namespaced (`code:`, `session:`).

use serde::{Deserialize, Serialize};
use std::env;

/// Redis connection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Maximum retries for a failed command
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retries in milliseconds (doubles per attempt)
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl CacheConfig {
    /// Load the cache configuration from `REDIS_URL` plus retry tuning
    /// variables (`REDIS_MAX_RETRIES`, `REDIS_RETRY_DELAY_MS`).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var("REDIS_URL").unwrap_or(defaults.url),
            max_retries: env::var("REDIS_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: env::var("REDIS_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    100
}
