//! Cache layer: Redis client plus the code and session stores built on it.

pub mod code_store;
pub mod memory;
pub mod redis_client;
pub mod session_store;

pub use code_store::RedisCodeStore;
pub use memory::{InMemoryCodeStore, InMemorySessionStore};
pub use redis_client::RedisClient;
pub use session_store::RedisSessionStore;
