//! In-memory store implementations.
//!
//! Process-local stand-ins for the Redis stores, honoring TTLs with
//! `Instant` deadlines. Used in endpoint tests and for running the server
//! without a Redis instance.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use wn_core::domain::entities::Session;
use wn_core::services::{CodeStore, SessionStore};

struct Entry<T> {
    value: T,
    expires_at: Instant,
}

impl<T> Entry<T> {
    fn new(value: T, ttl_secs: u64) -> Self {
        Self {
            value,
            expires_at: Instant::now() + Duration::from_secs(ttl_secs),
        }
    }

    fn expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory `CodeStore` with TTL expiry
#[derive(Default)]
pub struct InMemoryCodeStore {
    entries: Mutex<HashMap<String, Entry<String>>>,
}

impl InMemoryCodeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn set(&self, key: &str, code: &str, ttl_secs: u64) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .insert(key.to_string(), Entry::new(code.to_string(), ttl_secs));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        if let Some(entry) = entries.get(key) {
            if entry.expired() {
                entries.remove(key);
                return Ok(None);
            }
            return Ok(Some(entry.value.clone()));
        }
        Ok(None)
    }
}

/// In-memory `SessionStore` with TTL expiry
#[derive(Default)]
pub struct InMemorySessionStore {
    entries: Mutex<HashMap<String, Entry<Session>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<Session>, String> {
        let mut entries = self.entries.lock().map_err(|e| e.to_string())?;
        if let Some(entry) = entries.get(session_id) {
            if entry.expired() {
                entries.remove(session_id);
                return Ok(None);
            }
            return Ok(Some(entry.value.clone()));
        }
        Ok(None)
    }

    async fn save(
        &self,
        session_id: &str,
        session: &Session,
        ttl_secs: u64,
    ) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .insert(session_id.to_string(), Entry::new(session.clone(), ttl_secs));
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), String> {
        self.entries
            .lock()
            .map_err(|e| e.to_string())?
            .remove(session_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn code_store_round_trips() {
        let store = InMemoryCodeStore::new();
        store.set("code:13800000000", "123456", 300).await.unwrap();
        assert_eq!(
            store.get("code:13800000000").await.unwrap(),
            Some("123456".to_string())
        );
        assert_eq!(store.get("code:13900000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn zero_ttl_expires_immediately() {
        let store = InMemoryCodeStore::new();
        store.set("code:13800000000", "123456", 0).await.unwrap();
        assert_eq!(store.get("code:13800000000").await.unwrap(), None);
    }

    #[tokio::test]
    async fn session_store_destroys() {
        let store = InMemorySessionStore::new();
        let mut session = Session::default();
        session.log_in(Uuid::new_v4());

        store.save("sid", &session, 60).await.unwrap();
        assert!(store.load("sid").await.unwrap().is_some());

        store.destroy("sid").await.unwrap();
        assert!(store.load("sid").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_overwrites_previous_state() {
        let store = InMemorySessionStore::new();
        let mut session = Session::default();
        session.image_code = Some("AB12".to_string());
        store.save("sid", &session, 60).await.unwrap();

        session.image_code = Some("ZZ99".to_string());
        store.save("sid", &session, 60).await.unwrap();

        let loaded = store.load("sid").await.unwrap().unwrap();
        assert_eq!(loaded.image_code.as_deref(), Some("ZZ99"));
    }
}
