use actix_web::{web, Error, HttpResponse};
use tracing::info;

use crate::dto::account::PasswordLoginRequest;
use crate::middleware::session::{SessionContext, SessionHandle};
use crate::routes::account::{domain_error_response, AppState};

use wn_core::forms::PasswordLoginForm;
use wn_core::repositories::UserRepository;
use wn_core::services::{CodeStore, SmsGateway};

use wn_shared::types::response::ApiResponse;

/// Handler for `GET /login/`
///
/// Returns the password login form schema.
pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(PasswordLoginForm::schema()))
}

/// Handler for `POST /login/`
///
/// Validates the submitted credentials against the stored digest and the
/// image code against the one cached in the caller's session. Success logs
/// the session in, extending it to the login expiry.
///
/// # Response
///
/// Success: `{"status": true, "data": "/index/"}`.
/// Failure: field error map, generic "username or password" message.
pub async fn login<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    context: web::Data<SessionContext>,
    mut handle: SessionHandle,
    request: web::Json<PasswordLoginRequest>,
) -> Result<HttpResponse, Error>
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let form: PasswordLoginForm = request.into_inner().into();
    let image_code = handle.session.image_code.clone();

    match state
        .account_service
        .login_password(form, image_code.as_deref())
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "password login succeeded");
            handle.session.log_in(user.id);
            // The image code is single-use
            handle.session.image_code = None;
            let cookie = context.save(&handle).await?;
            Ok(HttpResponse::Ok()
                .cookie(cookie)
                .json(ApiResponse::ok("/index/")))
        }
        Err(error) => Ok(domain_error_response(error)),
    }
}
