//! SMS login form.

use super::schema::{FieldKind, FieldSchema, FormSchema};

/// Raw SMS-login submission.
#[derive(Debug, Clone, Default)]
pub struct SmsLoginForm {
    pub mobile_phone: String,
    pub code: String,
}

impl SmsLoginForm {
    pub fn normalized(self) -> Self {
        Self {
            mobile_phone: self.mobile_phone.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }

    /// Field schema served by `GET /login/sms/`.
    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::new("mobile_phone", "手机号", FieldKind::Text),
            FieldSchema::new("code", "验证码", FieldKind::Text),
        ])
    }
}
