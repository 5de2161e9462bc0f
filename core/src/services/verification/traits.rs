//! Traits for SMS, code store and CAPTCHA integration

use async_trait::async_trait;

/// Trait for SMS gateway integration
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver `code` to `mobile_phone` through the gateway template
    /// `template_id`.
    ///
    /// Returns the gateway's message id. A non-zero gateway result code maps
    /// to `Err` carrying the gateway's own error text, which validation
    /// surfaces to the user verbatim.
    async fn send_code(
        &self,
        mobile_phone: &str,
        template_id: &str,
        code: &str,
    ) -> Result<String, String>;
}

/// Trait for the TTL'd verification-code store
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Store a code under `key`, expiring after `ttl_secs`.
    async fn set(&self, key: &str, code: &str, ttl_secs: u64) -> Result<(), String>;

    /// Fetch the code stored under `key`. `None` means expired or never set.
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
}

/// A generated image code: the answer text and the rendered PNG.
#[derive(Debug, Clone)]
pub struct CaptchaImage {
    pub text: String,
    pub png: Vec<u8>,
}

/// Trait for image verification code generation
pub trait CaptchaGenerator: Send + Sync {
    fn generate(&self) -> Result<CaptchaImage, String>;
}
