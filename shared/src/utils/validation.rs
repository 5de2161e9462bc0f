//! Format validation helpers for account fields

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

/// Usernames: 2-32 word characters or hyphens.
static USERNAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w-]{2,32}$").unwrap());

/// Check whether a string is a well-formed email address.
pub fn is_valid_email(email: &str) -> bool {
    email.validate_email()
}

/// Check whether a string is an acceptable username.
pub fn is_valid_username(username: &str) -> bool {
    USERNAME_REGEX.is_match(username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("dev.team+saas@example.org"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn accepts_word_usernames() {
        assert!(is_valid_username("alice"));
        assert!(is_valid_username("alice_01"));
        assert!(is_valid_username("团队")); // \w matches unicode word chars
    }

    #[test]
    fn rejects_bad_usernames() {
        assert!(!is_valid_username("a")); // too short
        assert!(!is_valid_username("has space"));
        assert!(!is_valid_username("a@b"));
        assert!(!is_valid_username(&"x".repeat(33)));
    }
}
