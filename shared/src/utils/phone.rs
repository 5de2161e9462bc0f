//! Chinese mobile phone number validation and masking

use once_cell::sync::Lazy;
use regex::Regex;

/// Chinese mainland mobile numbers: 11 digits, `1` followed by `3`-`9`.
static CHINA_MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9]\d{9}$").unwrap());

/// Check whether a string is a valid Chinese mobile phone number.
pub fn is_valid_mobile(phone: &str) -> bool {
    CHINA_MOBILE_REGEX.is_match(phone)
}

/// Mask a phone number for logging: keeps the first 3 and last 4 digits.
///
/// `13812345678` becomes `138****5678`. Strings too short to mask are
/// replaced entirely.
pub fn mask_phone(phone: &str) -> String {
    if phone.len() >= 7 {
        format!("{}****{}", &phone[..3], &phone[phone.len() - 4..])
    } else {
        "*".repeat(phone.len())
    }
}
