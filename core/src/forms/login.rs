//! Password login form.

use super::schema::{FieldKind, FieldSchema, FormSchema};

/// Raw password-login submission. The identifier accepts an email address
/// or a mobile phone number; the image code is checked against the session.
#[derive(Debug, Clone, Default)]
pub struct PasswordLoginForm {
    pub username: String,
    pub password: String,
    pub code: String,
}

impl PasswordLoginForm {
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }

    /// Field schema served by `GET /login/`.
    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::new("username", "邮箱或手机号", FieldKind::Text),
            FieldSchema::new("password", "密码", FieldKind::Password),
            FieldSchema::new("code", "图片验证码", FieldKind::Text),
        ])
    }
}
