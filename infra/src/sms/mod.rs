//! SMS gateway implementations.
//!
//! The account service is generic over `SmsGateway`; `SmsProvider` is the
//! one concrete type the server wires in, dispatching to whichever backend
//! the configuration selects.

pub mod mock;
pub mod qcloud;

pub use mock::MockSmsGateway;
pub use qcloud::QcloudSmsGateway;

use async_trait::async_trait;

use wn_core::services::SmsGateway;
use wn_shared::config::SmsConfig;

use crate::InfrastructureError;

/// Configured SMS backend
pub enum SmsProvider {
    Qcloud(QcloudSmsGateway),
    Mock(MockSmsGateway),
}

#[async_trait]
impl SmsGateway for SmsProvider {
    async fn send_code(
        &self,
        mobile_phone: &str,
        template_id: &str,
        code: &str,
    ) -> Result<String, String> {
        match self {
            SmsProvider::Qcloud(gateway) => gateway.send_code(mobile_phone, template_id, code).await,
            SmsProvider::Mock(gateway) => gateway.send_code(mobile_phone, template_id, code).await,
        }
    }
}

/// Create the SMS gateway named by the configuration.
///
/// Unknown provider names fall back to the mock so a misconfigured
/// deployment still serves requests.
pub fn create_sms_gateway(config: &SmsConfig) -> Result<SmsProvider, InfrastructureError> {
    match config.provider.as_str() {
        "qcloud" => Ok(SmsProvider::Qcloud(QcloudSmsGateway::new(config)?)),
        "mock" => Ok(SmsProvider::Mock(MockSmsGateway::new())),
        other => {
            tracing::warn!("Unknown SMS provider '{}', using mock implementation", other);
            Ok(SmsProvider::Mock(MockSmsGateway::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_comes_from_config() {
        let config = SmsConfig::default();
        let provider = create_sms_gateway(&config).unwrap();
        assert!(matches!(provider, SmsProvider::Mock(_)));
    }

    #[test]
    fn unknown_provider_falls_back_to_mock() {
        let config = SmsConfig {
            provider: "carrier-pigeon".to_string(),
            ..SmsConfig::default()
        };
        let provider = create_sms_gateway(&config).unwrap();
        assert!(matches!(provider, SmsProvider::Mock(_)));
    }

    #[test]
    fn qcloud_without_credentials_is_rejected() {
        let config = SmsConfig {
            provider: "qcloud".to_string(),
            ..SmsConfig::default()
        };
        assert!(create_sms_gateway(&config).is_err());
    }
}
