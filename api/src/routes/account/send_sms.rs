use actix_web::{web, HttpResponse};

use crate::dto::account::SendSmsQuery;
use crate::routes::account::{domain_error_response, AppState};

use wn_core::forms::{SendSmsForm, SmsScene};
use wn_core::repositories::UserRepository;
use wn_core::services::{CodeStore, SmsGateway};

use wn_shared::types::response::ApiResponse;

/// Handler for `GET /send-sms/?tpl=<scene>&mobile_phone=<phone>`
///
/// Issues a 6-digit SMS code for the given scene. `register` requires the
/// phone to be unregistered, `login` requires it registered; an unknown or
/// missing scene fails on the template lookup. The code is stored under
/// `code:<phone>` for five minutes.
///
/// # Response
///
/// Success: `{"status": true}`.
pub async fn send_sms<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    query: web::Query<SendSmsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let query = query.into_inner();
    let scene = query.tpl.as_deref().and_then(SmsScene::parse);
    let form: SendSmsForm = query.into();

    match state.account_service.send_sms(form, scene).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::ok_empty()),
        Err(error) => domain_error_response(error),
    }
}
