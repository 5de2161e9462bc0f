//! Verification code issuance seams.
//!
//! The account service talks to the SMS gateway, the code store and the
//! CAPTCHA generator exclusively through these traits; infrastructure
//! adapters live in the infra crate.

mod traits;

pub use traits::{CaptchaGenerator, CaptchaImage, CodeStore, SmsGateway};

/// Key under which an SMS code is cached for a phone number.
pub fn code_key(mobile_phone: &str) -> String {
    format!("code:{}", mobile_phone)
}
