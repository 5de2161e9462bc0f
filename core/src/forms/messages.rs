//! User-facing validation messages, bilingual "English | 中文".

pub const REQUIRED: &str = "This field is required | 该字段不能为空";

pub const USERNAME_FORMAT: &str =
    "Username must be 2-32 letters, digits, underscores or hyphens | 用户名格式错误";
pub const USERNAME_TAKEN: &str = "Username already exists | 用户名已存在";

pub const EMAIL_FORMAT: &str = "Enter a valid email address | 请输入有效的邮箱地址";
pub const EMAIL_TAKEN: &str = "Email already exists | 邮箱已存在";

pub const PASSWORD_TOO_SHORT: &str =
    "Password must be at least 6 characters | 密码长度不能小于6位";
pub const PASSWORD_TOO_LONG: &str =
    "Password must be at most 16 characters | 密码长度不能大于16位";
pub const CONFIRM_TOO_SHORT: &str =
    "Confirmation must be at least 6 characters | 重复密码长度不能小于6位";
pub const CONFIRM_TOO_LONG: &str =
    "Confirmation must be at most 16 characters | 重复密码长度不能大于16位";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match | 两次密码不一致";

pub const PHONE_FORMAT: &str = "Invalid mobile phone number | 手机号格式错误";
pub const PHONE_TAKEN: &str = "Mobile phone already registered | 手机号已存在";
pub const PHONE_NOT_FOUND: &str = "Mobile phone not registered | 手机号不存在";

pub const SMS_TEMPLATE_ERROR: &str = "SMS template error | 短信模板错误";
pub const SMS_CODE_EXPIRED: &str =
    "SMS code expired or never sent, request a new one | 短信验证码失效或未发送，请重新发送";
pub const SMS_CODE_MISMATCH: &str =
    "Incorrect SMS code, try again | 短信验证码错误，请重新输入";

pub const IMAGE_CODE_EXPIRED: &str =
    "Image code expired, fetch a new one | 验证码已过期，请重新获取";
pub const IMAGE_CODE_MISMATCH: &str =
    "Incorrect image code, try again | 验证码错误，请重新输入";

pub const LOGIN_FAILED: &str = "Incorrect username or password | 用户名或密码错误";

/// Gateway failures append the gateway's own error text.
pub fn sms_send_failed(errmsg: &str) -> String {
    format!("SMS send failed, {errmsg} | 短信发送失败, {errmsg}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_failed_embeds_gateway_message() {
        let message = sms_send_failed("rate limited");
        assert!(message.contains("rate limited"));
        assert!(message.contains("短信发送失败"));
    }
}
