//! Account route handlers
//!
//! This module contains all account endpoints:
//! - Registration (form schema and submission)
//! - Password login with image code
//! - SMS-code login
//! - SMS and image verification code issuance
//! - Logout

pub mod image_code;
pub mod login;
pub mod login_sms;
pub mod logout;
pub mod register;
pub mod send_sms;

pub use register::AppState;

use actix_web::HttpResponse;
use tracing::error;

use wn_core::errors::{DomainError, FieldErrors};
use wn_shared::types::response::ApiResponse;

/// Key for errors not tied to a single field.
const NON_FIELD_KEY: &str = "__all__";

/// Map a domain failure onto the response envelope.
///
/// Validation failures answer 200 with `{"status": false, "error": {...}}`;
/// clients branch on `status`, not the HTTP code. Store and gateway outages
/// are the only 500s.
pub(crate) fn domain_error_response(error: DomainError) -> HttpResponse {
    match error {
        DomainError::Form(fields) => {
            HttpResponse::Ok().json(ApiResponse::<()>::error(fields.into_map()))
        }
        other => {
            error!("Account operation failed: {}", other);
            let fields = FieldErrors::single(
                NON_FIELD_KEY,
                "Server error, try again later | 服务器错误，请稍后再试",
            );
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error(fields.into_map()))
        }
    }
}
