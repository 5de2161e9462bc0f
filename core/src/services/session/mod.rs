//! Server-side session store seam.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Session;

/// Trait for the server-side session store.
///
/// Object-safe on purpose: the API layer holds it as `Arc<dyn SessionStore>`
/// so the session extractor does not need the service's type parameters.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for `session_id`. `None` means expired or unknown.
    async fn load(&self, session_id: &str) -> Result<Option<Session>, String>;

    /// Persist the session under `session_id`, expiring after `ttl_secs`.
    async fn save(&self, session_id: &str, session: &Session, ttl_secs: u64)
        -> Result<(), String>;

    /// Drop all state for `session_id`.
    async fn destroy(&self, session_id: &str) -> Result<(), String>;
}

/// Mint a fresh opaque session id.
pub fn new_session_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_opaque_and_unique() {
        let a = new_session_id();
        let b = new_session_id();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
