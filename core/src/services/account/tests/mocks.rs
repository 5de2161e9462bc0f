//! Mock implementations for testing the account service

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::verification::{CodeStore, SmsGateway};

// Mock SMS gateway recording every dispatched message
pub struct MockSmsGateway {
    pub sent: Arc<Mutex<Vec<(String, String, String)>>>, // (phone, template, code)
    pub fail_with: Option<String>,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(errmsg: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(errmsg.to_string()),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<(String, String, String)> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_code(
        &self,
        mobile_phone: &str,
        template_id: &str,
        code: &str,
    ) -> Result<String, String> {
        if let Some(errmsg) = &self.fail_with {
            return Err(errmsg.clone());
        }
        self.sent.lock().unwrap().push((
            mobile_phone.to_string(),
            template_id.to_string(),
            code.to_string(),
        ));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}

// Mock code store keyed like the real one, remembering the TTL it was given
pub struct MockCodeStore {
    pub entries: Arc<Mutex<HashMap<String, (String, u64)>>>, // key -> (code, ttl)
    pub fail: bool,
}

impl MockCodeStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            fail: true,
        }
    }

    pub fn with_code(key: &str, code: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (code.to_string(), 300));
        store
    }

    pub fn stored(&self, key: &str) -> Option<(String, u64)> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl CodeStore for MockCodeStore {
    async fn set(&self, key: &str, code: &str, ttl_secs: u64) -> Result<(), String> {
        if self.fail {
            return Err("code store error".to_string());
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (code.to_string(), ttl_secs));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.fail {
            return Err("code store error".to_string());
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(code, _)| code.clone()))
    }
}
