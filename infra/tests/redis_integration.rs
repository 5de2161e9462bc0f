//! Integration tests for the Redis-backed stores
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p wn_infra --test redis_integration -- --ignored

use wn_core::domain::entities::Session;
use wn_core::services::{CodeStore, SessionStore};
use wn_infra::cache::{RedisClient, RedisCodeStore, RedisSessionStore};
use wn_shared::config::CacheConfig;

fn test_config() -> CacheConfig {
    CacheConfig {
        url: std::env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        max_retries: 3,
        retry_delay_ms: 100,
    }
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_redis_connection() {
    let client = RedisClient::new(&test_config()).await;
    assert!(client.is_ok(), "Failed to connect to Redis");

    let client = client.unwrap();
    assert!(client.health_check().await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_code_store_round_trip() {
    let client = RedisClient::new(&test_config()).await.unwrap();
    let store = RedisCodeStore::new(client.clone());

    let key = "test:code:13800138000";
    let code = "123456";

    // Store a code the way the SMS endpoint does
    store.set(key, code, 300).await.unwrap();

    let retrieved = store.get(key).await.unwrap();
    assert_eq!(retrieved, Some(code.to_string()));

    // Clean up
    client.delete(key).await.unwrap();
    assert_eq!(store.get(key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_code_expiry() {
    let client = RedisClient::new(&test_config()).await.unwrap();
    let store = RedisCodeStore::new(client);

    let key = "test:code:expiry";

    // Set with 1 second expiry
    store.set(key, "654321", 1).await.unwrap();
    assert!(store.get(key).await.unwrap().is_some());

    // Wait for expiry
    tokio::time::sleep(tokio::time::Duration::from_secs(2)).await;

    assert_eq!(store.get(key).await.unwrap(), None);
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_session_lifecycle() {
    let client = RedisClient::new(&test_config()).await.unwrap();
    let store = RedisSessionStore::new(client);

    let session_id = format!("test-{}", uuid::Uuid::new_v4().simple());

    // A fresh session starts out holding only the pending image code
    let mut session = Session::default();
    session.image_code = Some("AB3D".to_string());
    store.save(&session_id, &session, 60).await.unwrap();

    let loaded = store.load(&session_id).await.unwrap().unwrap();
    assert!(!loaded.is_authenticated());
    assert_eq!(loaded.image_code.as_deref(), Some("AB3D"));

    // Login upgrades it to a long-lived authenticated session
    session.log_in(uuid::Uuid::new_v4());
    store
        .save(&session_id, &session, session.ttl_secs())
        .await
        .unwrap();

    let loaded = store.load(&session_id).await.unwrap().unwrap();
    assert!(loaded.is_authenticated());

    // Logout removes the record entirely
    store.destroy(&session_id).await.unwrap();
    assert!(store.load(&session_id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_missing_session_loads_as_none() {
    let client = RedisClient::new(&test_config()).await.unwrap();
    let store = RedisSessionStore::new(client);

    let loaded = store.load("test-never-saved").await.unwrap();
    assert!(loaded.is_none());
}
