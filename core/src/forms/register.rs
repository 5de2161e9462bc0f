//! Registration form.

use super::schema::{FieldKind, FieldSchema, FormSchema};

/// Raw registration submission.
///
/// Field declaration order is the clean-phase validation order:
/// username, email, password, confirm_password, mobile_phone, code.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub mobile_phone: String,
    pub code: String,
}

impl RegisterForm {
    /// Trim surrounding whitespace from every submitted value.
    pub fn normalized(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            confirm_password: self.confirm_password.trim().to_string(),
            mobile_phone: self.mobile_phone.trim().to_string(),
            code: self.code.trim().to_string(),
        }
    }

    /// Field schema served by `GET /register/`.
    pub fn schema() -> FormSchema {
        FormSchema::new(vec![
            FieldSchema::new("username", "用户名", FieldKind::Text),
            FieldSchema::new("email", "邮箱", FieldKind::Text),
            FieldSchema::new("password", "密码", FieldKind::Password),
            FieldSchema::new("confirm_password", "重复密码", FieldKind::Password),
            FieldSchema::new("mobile_phone", "手机号", FieldKind::Text),
            FieldSchema::new("code", "验证码", FieldKind::Text),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_trims_every_field() {
        let form = RegisterForm {
            username: " alice ".to_string(),
            email: "a@x.com\n".to_string(),
            password: " secret1".to_string(),
            confirm_password: "secret1 ".to_string(),
            mobile_phone: " 13800000000 ".to_string(),
            code: "123456\t".to_string(),
        }
        .normalized();
        assert_eq!(form.username, "alice");
        assert_eq!(form.email, "a@x.com");
        assert_eq!(form.password, "secret1");
        assert_eq!(form.mobile_phone, "13800000000");
        assert_eq!(form.code, "123456");
    }

    #[test]
    fn schema_lists_fields_in_validation_order() {
        let schema = RegisterForm::schema();
        let names: Vec<_> = schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["username", "email", "password", "confirm_password", "mobile_phone", "code"]
        );
    }
}
