use actix_web::{web, Error, HttpResponse};
use tracing::info;

use crate::dto::account::SmsLoginRequest;
use crate::middleware::session::{SessionContext, SessionHandle};
use crate::routes::account::{domain_error_response, AppState};

use wn_core::forms::SmsLoginForm;
use wn_core::repositories::UserRepository;
use wn_core::services::{CodeStore, SmsGateway};

use wn_shared::types::response::ApiResponse;

/// Handler for `GET /login/sms/`
///
/// Returns the SMS login form schema.
pub async fn login_sms_form() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(SmsLoginForm::schema()))
}

/// Handler for `POST /login/sms/`
///
/// Resolves the phone number to a user and checks the submitted code
/// against the stored SMS code. Success logs the session in.
///
/// # Response
///
/// Success: `{"status": true, "data": "/index/"}`.
pub async fn login_sms<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    context: web::Data<SessionContext>,
    mut handle: SessionHandle,
    request: web::Json<SmsLoginRequest>,
) -> Result<HttpResponse, Error>
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let form: SmsLoginForm = request.into_inner().into();
    match state.account_service.login_sms(form).await {
        Ok(user) => {
            info!(user_id = %user.id, phone = %user.masked_phone(), "sms login succeeded");
            handle.session.log_in(user.id);
            let cookie = context.save(&handle).await?;
            Ok(HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::ok("/index/")))
        }
        Err(error) => Ok(domain_error_response(error)),
    }
}
