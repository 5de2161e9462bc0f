use actix_web::{web, HttpResponse};
use std::sync::Arc;
use tracing::info;

use crate::dto::account::RegisterRequest;
use crate::routes::account::domain_error_response;

use wn_core::forms::RegisterForm;
use wn_core::repositories::UserRepository;
use wn_core::services::{AccountService, CaptchaGenerator, CodeStore, SmsGateway};
use wn_shared::types::response::ApiResponse;

/// Application state that holds shared services
pub struct AppState<U, S, C>
where
    U: UserRepository,
    S: SmsGateway,
    C: CodeStore,
{
    pub account_service: Arc<AccountService<U, S, C>>,
    pub captcha: Arc<dyn CaptchaGenerator>,
}

/// Handler for `GET /register/`
///
/// Returns the registration form schema so the client can render the
/// fields with their labels, placeholders and widget kinds.
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(RegisterForm::schema()))
}

/// Handler for `POST /register/`
///
/// Runs the full registration validation and, on success, persists the new
/// user together with their free-tier signup transaction.
///
/// # Response
///
/// Success: `{"status": true, "data": "/login/"}`.
/// Validation failure: `{"status": false, "error": {field: [messages]}}`,
/// still HTTP 200.
pub async fn register<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let form: RegisterForm = request.into_inner().into();
    match state.account_service.register(form).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "registration succeeded");
            HttpResponse::Ok().json(ApiResponse::ok("/login/"))
        }
        Err(error) => domain_error_response(error),
    }
}
