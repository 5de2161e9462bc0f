//! Redis-backed verification-code store.

use async_trait::async_trait;

use wn_core::services::CodeStore;

use super::redis_client::RedisClient;

/// `CodeStore` implementation over Redis.
///
/// Codes live under their caller-provided keys (`code:<phone>`) with the
/// TTL passed in; expiry is handled entirely by Redis.
#[derive(Clone)]
pub struct RedisCodeStore {
    client: RedisClient,
}

impl RedisCodeStore {
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CodeStore for RedisCodeStore {
    async fn set(&self, key: &str, code: &str, ttl_secs: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(key, code, ttl_secs)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }
}
