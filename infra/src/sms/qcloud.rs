//! Tencent Cloud SMS single-send gateway.
//!
//! Talks to the v5 `tlssmssvr/sendsms` JSON API: one template message per
//! call, signed with a SHA-256 over app key, random, timestamp and the
//! recipient number. A non-zero `result` in the reply carries the gateway's
//! error text, which bubbles up verbatim to the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info, warn};

use wn_core::services::SmsGateway;
use wn_shared::config::SmsConfig;
use wn_shared::utils::phone::mask_phone;

use crate::InfrastructureError;

const DEFAULT_ENDPOINT: &str = "https://yun.tim.qq.com/v5/tlssmssvr/sendsms";

/// Mainland China national code used for all recipients.
const NATION_CODE: &str = "86";

/// Tencent Cloud SMS gateway
pub struct QcloudSmsGateway {
    client: reqwest::Client,
    app_id: String,
    app_key: String,
    sign_name: String,
    endpoint: String,
}

impl QcloudSmsGateway {
    /// Build a gateway from the SMS configuration.
    pub fn new(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.app_id.is_empty() || config.app_key.is_empty() {
            return Err(InfrastructureError::Config(
                "SMS_APP_ID and SMS_APP_KEY must be set for the qcloud provider".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(InfrastructureError::Http)?;

        info!(app_id = %config.app_id, "Tencent Cloud SMS gateway initialized");

        Ok(Self {
            client,
            app_id: config.app_id.clone(),
            app_key: config.app_key.clone(),
            sign_name: config.sign_name.clone(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        })
    }

    /// Point the gateway at a different endpoint (test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    ext: &'a str,
    extend: &'a str,
    params: [&'a str; 1],
    sig: String,
    sign: &'a str,
    tel: Tel<'a>,
    time: u64,
    tpl_id: u64,
}

#[derive(Serialize)]
struct Tel<'a> {
    mobile: &'a str,
    nationcode: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    result: i64,
    errmsg: String,
    #[serde(default)]
    sid: Option<String>,
}

#[async_trait]
impl SmsGateway for QcloudSmsGateway {
    async fn send_code(
        &self,
        mobile_phone: &str,
        template_id: &str,
        code: &str,
    ) -> Result<String, String> {
        let tpl_id: u64 = template_id
            .parse()
            .map_err(|_| format!("invalid template id: {}", template_id))?;

        let time = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| format!("system clock error: {}", e))?
            .as_secs();
        let random: u32 = rand::thread_rng().gen_range(100_000..1_000_000);
        let sig = compute_signature(&self.app_key, random, time, mobile_phone);

        let body = SendRequest {
            ext: "",
            extend: "",
            params: [code],
            sig,
            sign: &self.sign_name,
            tel: Tel {
                mobile: mobile_phone,
                nationcode: NATION_CODE,
            },
            time,
            tpl_id,
        };

        let url = format!(
            "{}?sdkappid={}&random={}",
            self.endpoint, self.app_id, random
        );
        debug!(
            phone = %mask_phone(mobile_phone),
            tpl_id,
            "Dispatching SMS through Tencent Cloud"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("sms request failed: {}", e))?;

        let payload: SendResponse = response
            .json()
            .await
            .map_err(|e| format!("sms response unreadable: {}", e))?;

        if payload.result == 0 {
            let sid = payload.sid.unwrap_or_default();
            info!(phone = %mask_phone(mobile_phone), sid = %sid, "SMS accepted by gateway");
            Ok(sid)
        } else {
            warn!(
                phone = %mask_phone(mobile_phone),
                result = payload.result,
                "Gateway rejected SMS: {}",
                payload.errmsg
            );
            Err(payload.errmsg)
        }
    }
}

fn compute_signature(app_key: &str, random: u32, time: u64, mobile: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(
        format!(
            "appkey={}&random={}&time={}&mobile={}",
            app_key, random, time, mobile
        )
        .as_bytes(),
    );
    format!("{:x}", hasher.finalize())
}
