//! Mock SMS gateway for development and testing.
//!
//! Prints the code to the console instead of sending it, so local signups
//! work without gateway credentials.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use wn_core::services::SmsGateway;
use wn_shared::utils::phone::mask_phone;

/// Console-backed SMS gateway
#[derive(Clone)]
pub struct MockSmsGateway {
    message_count: Arc<AtomicU64>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Mock with configurable console output and failure simulation.
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Number of messages dispatched so far.
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsGateway {
    fn default() -> Self {
        Self::new()
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
        if self.simulate_failure {
            warn!(
                phone = %mask_phone(mobile_phone),
                "Mock SMS gateway simulating failure"
            );
            return Err("simulated sms failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS #{} (template {})", count, template_id);
            println!("To: {}", mobile_phone);
            println!("Code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            phone = %mask_phone(mobile_phone),
            template_id = %template_id,
            message_id = %message_id,
            "SMS sent (mock)"
        );

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_returns_a_message_id_and_counts() {
        let gateway = MockSmsGateway::with_options(false, false);
        let message_id = gateway
            .send_code("13800138000", "548760", "123456")
            .await
            .unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(gateway.message_count(), 1);
    }

    #[tokio::test]
    async fn simulated_failure_errors_without_counting() {
        let gateway = MockSmsGateway::with_options(false, true);
        let result = gateway.send_code("13800138000", "548760", "123456").await;
        assert!(result.is_err());
        assert_eq!(gateway.message_count(), 0);
    }
}
