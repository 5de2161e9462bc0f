//! Credential digest
//!
//! Passwords are stored as a deterministic single-pass MD5 hex digest: the
//! login query matches directly on the stored digest, and confirm-password
//! validation compares digests, so the encoding must produce the same output
//! for the same input every time.

/// Hash a plaintext credential into its 32-character hex digest.
pub fn password_digest(plain: &str) -> String {
    format!("{:x}", md5::compute(plain.as_bytes()))
}
