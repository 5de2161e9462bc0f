//! User entity representing a registered account in the WorkNest system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wn_shared::utils::phone::mask_phone;

/// User entity representing a registered account
///
/// `username`, `email` and `mobile_phone` are each unique across tenants;
/// `password` holds the credential digest, never the plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique display name chosen at registration
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Unique Chinese mobile phone number (11 digits)
    pub mobile_phone: String,

    /// Credential digest (32 hex characters)
    pub password: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User from already-validated registration data.
    pub fn new(
        username: String,
        email: String,
        mobile_phone: String,
        password_digest: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            mobile_phone,
            password: password_digest,
            created_at: Utc::now(),
        }
    }

    /// Phone number with the middle digits masked, for log output.
    pub fn masked_phone(&self) -> String {
        mask_phone(&self.mobile_phone)
    }
}
