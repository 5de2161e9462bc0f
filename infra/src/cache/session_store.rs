//! Redis-backed session store.
//!
//! Sessions serialize to JSON under `session:<id>` keys. The TTL is chosen
//! by the caller per save: short while the session only holds a pending
//! image code, two weeks once logged in.

use async_trait::async_trait;
use tracing::warn;

use wn_core::domain::entities::Session;
use wn_core::services::SessionStore;

use super::redis_client::RedisClient;

fn session_key(session_id: &str) -> String {
    format!("session:{}", session_id)
}

/// `SessionStore` implementation over Redis
#[derive(Clone)]
pub struct RedisSessionStore {
    client: RedisClient,
}

impl RedisSessionStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> Result<Option<Session>, String> {
        let raw = self
            .client
            .get(&session_key(session_id))
            .await
            .map_err(|e| e.to_string())?;
        match raw {
            None => Ok(None),
            Some(json) => match serde_json::from_str(&json) {
                Ok(session) => Ok(Some(session)),
                Err(e) => {
                    // An unreadable record is as good as an expired one.
                    warn!("Dropping undecodable session record: {}", e);
                    Ok(None)
                }
            },
        }
    }

    async fn save(
        &self,
        session_id: &str,
        session: &Session,
        ttl_secs: u64,
    ) -> Result<(), String> {
        let json = serde_json::to_string(session).map_err(|e| e.to_string())?;
        self.client
            .set_with_expiry(&session_key(session_id), &json, ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn destroy(&self, session_id: &str) -> Result<(), String> {
        self.client
            .delete(&session_key(session_id))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
