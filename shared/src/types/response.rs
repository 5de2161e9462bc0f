//! Response envelope types
//!
//! Every JSON endpoint answers with the same envelope:
//! `{"status": true, "data": ...}` on success and
//! `{"status": false, "error": {field: [messages]}}` on validation failure.
//! Clients branch on `status`; HTTP status stays 200 for validation errors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Field name → ordered list of user-facing messages.
///
/// BTreeMap keeps the serialized key order stable across runs.
pub type FieldErrorMap = BTreeMap<String, Vec<String>>;

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub status: bool,

    /// Success payload, present only when `status` is true and the endpoint
    /// has something to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Field-scoped validation errors, present only when `status` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FieldErrorMap>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying a payload
    pub fn ok(data: T) -> Self {
        Self {
            status: true,
            data: Some(data),
            error: None,
        }
    }

    /// Successful response without a payload (e.g. the send-SMS endpoint)
    pub fn ok_empty() -> Self {
        Self {
            status: true,
            data: None,
            error: None,
        }
    }

    /// Failed response carrying the field error map
    pub fn error(fields: FieldErrorMap) -> Self {
        Self {
            status: false,
            data: None,
            error: Some(fields),
        }
    }
}
