//! Verification code generation and comparison.
//!
//! Two kinds of short-lived codes exist: 6-digit SMS codes keyed by phone
//! number (300 s TTL in the code store) and alphanumeric image codes kept in
//! the session (60 s TTL). Expiry is enforced entirely by store TTLs; this
//! module owns generation and the two comparison rules.

use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::Rng;

/// Number of digits in an SMS verification code
pub const CODE_LENGTH: usize = 6;

/// SMS codes live for five minutes
pub const SMS_CODE_TTL_SECS: u64 = 300;

/// Generate a random 6-digit SMS verification code (100000-999999).
pub fn generate_sms_code() -> String {
    OsRng.gen_range(100_000..=999_999).to_string()
}

/// SMS codes compare with trim-then-exact match, case-sensitive.
pub fn sms_code_matches(submitted: &str, stored: &str) -> bool {
    constant_time_eq(submitted.trim().as_bytes(), stored.trim().as_bytes())
}

/// Image codes compare case-insensitively after trimming.
pub fn image_code_matches(submitted: &str, stored: &str) -> bool {
    let submitted = submitted.trim().to_uppercase();
    let stored = stored.trim().to_uppercase();
    constant_time_eq(submitted.as_bytes(), stored.as_bytes())
}
