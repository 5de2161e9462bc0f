//! Server-side session state.
//!
//! A session id (carried in an http-only cookie) maps to this record in the
//! session store. The expiry is explicit and changes with the session's
//! content: 60 seconds while it only holds a pending image code, 14 days
//! once a login has succeeded.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session expiry after a successful login: 14 days.
pub const LOGIN_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 14;

/// Session expiry while an image code is pending: 60 seconds.
pub const IMAGE_CODE_TTL_SECS: u64 = 60;

/// Per-session server-side state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated user, set on login success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// Pending image verification code, set by the image-code endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_code: Option<String>,
}

impl Session {
    /// Whether a user is logged in on this session.
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Record a successful login.
    pub fn log_in(&mut self, user_id: Uuid) {
        self.user_id = Some(user_id);
    }

    /// TTL the session should be saved with, given its current content.
    pub fn ttl_secs(&self) -> u64 {
        if self.is_authenticated() {
            LOGIN_SESSION_TTL_SECS
        } else {
            IMAGE_CODE_TTL_SECS
        }
    }
}
