//! Request payloads for the account endpoints.
//!
//! Every field defaults to empty when the key is missing, so an incomplete
//! submission reaches form validation and comes back as a field error map
//! rather than a deserialization failure.

use serde::Deserialize;

use wn_core::forms::{PasswordLoginForm, RegisterForm, SendSmsForm, SmsLoginForm};

/// Body of `POST /register/`
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub confirm_password: String,

    /// Mainland mobile number (`1[3-9]` + 9 digits)
    #[serde(default)]
    pub mobile_phone: String,

    /// SMS verification code sent to `mobile_phone`
    #[serde(default)]
    pub code: String,
}

impl From<RegisterRequest> for RegisterForm {
    fn from(request: RegisterRequest) -> Self {
        RegisterForm {
            username: request.username,
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            mobile_phone: request.mobile_phone,
            code: request.code,
        }
    }
}

/// Body of `POST /login/`
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordLoginRequest {
    /// Email address or mobile number
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,

    /// Answer to the image code fetched from `/image-code/`
    #[serde(default)]
    pub code: String,
}

impl From<PasswordLoginRequest> for PasswordLoginForm {
    fn from(request: PasswordLoginRequest) -> Self {
        PasswordLoginForm {
            username: request.username,
            password: request.password,
            code: request.code,
        }
    }
}

/// Body of `POST /login/sms/`
#[derive(Debug, Clone, Deserialize)]
pub struct SmsLoginRequest {
    #[serde(default)]
    pub mobile_phone: String,

    #[serde(default)]
    pub code: String,
}

impl From<SmsLoginRequest> for SmsLoginForm {
    fn from(request: SmsLoginRequest) -> Self {
        SmsLoginForm {
            mobile_phone: request.mobile_phone,
            code: request.code,
        }
    }
}

/// Query string of `GET /send-sms/`
#[derive(Debug, Clone, Deserialize)]
pub struct SendSmsQuery {
    /// Scene selecting the gateway template (`register` or `login`)
    #[serde(default)]
    pub tpl: Option<String>,

    #[serde(default)]
    pub mobile_phone: String,
}

impl From<SendSmsQuery> for SendSmsForm {
    fn from(query: SendSmsQuery) -> Self {
        SendSmsForm {
            mobile_phone: query.mobile_phone,
        }
    }
}
