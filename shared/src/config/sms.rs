//! SMS gateway configuration
//!
//! Credentials for the Tencent-style single-send API plus the template ids
//! used per scene. A scene without a configured template id makes the
//! send-SMS validation fail with the template error before any gateway call.

use serde::{Deserialize, Serialize};
use std::env;

/// SMS gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Gateway implementation to wire up ("qcloud" or "mock")
    pub provider: String,

    /// Application id issued by the gateway
    pub app_id: String,

    /// Application key used to sign requests
    pub app_key: String,

    /// Signature name prepended to every message
    pub sign_name: String,

    /// Template id for the registration scene (empty = unconfigured)
    pub register_template_id: String,

    /// Template id for the login scene (empty = unconfigured)
    pub login_template_id: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            app_id: String::new(),
            app_key: String::new(),
            sign_name: String::new(),
            register_template_id: String::new(),
            login_template_id: String::new(),
        }
    }
}

impl SmsConfig {
    /// Load the SMS configuration from `SMS_PROVIDER`, `SMS_APP_ID`,
    /// `SMS_APP_KEY`, `SMS_SIGN_NAME`, `SMS_TEMPLATE_REGISTER` and
    /// `SMS_TEMPLATE_LOGIN`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env::var("SMS_PROVIDER").unwrap_or(defaults.provider),
            app_id: env::var("SMS_APP_ID").unwrap_or_default(),
            app_key: env::var("SMS_APP_KEY").unwrap_or_default(),
            sign_name: env::var("SMS_SIGN_NAME").unwrap_or_default(),
            register_template_id: env::var("SMS_TEMPLATE_REGISTER").unwrap_or_default(),
            login_template_id: env::var("SMS_TEMPLATE_LOGIN").unwrap_or_default(),
        }
    }
}
