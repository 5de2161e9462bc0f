//! Session cookie configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Session cookie configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Name of the session id cookie
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Whether the cookie is marked `Secure` (HTTPS only)
    #[serde(default)]
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            secure: false,
        }
    }
}

impl SessionConfig {
    /// Load the session configuration from `SESSION_COOKIE_NAME` and
    /// `SESSION_COOKIE_SECURE`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cookie_name: env::var("SESSION_COOKIE_NAME").unwrap_or(defaults.cookie_name),
            secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.secure),
        }
    }
}

fn default_cookie_name() -> String {
    String::from("wn_session")
}
