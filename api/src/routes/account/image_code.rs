use actix_web::error::ErrorInternalServerError;
use actix_web::{web, Error, HttpResponse};
use tracing::error;

use crate::middleware::session::{SessionContext, SessionHandle};
use crate::routes::account::AppState;

use wn_core::repositories::UserRepository;
use wn_core::services::{CodeStore, SmsGateway};

/// Handler for `GET /image-code/`
///
/// Renders a fresh image code, caches its answer in the caller's session
/// and answers with the raw PNG. An anonymous session expires with the
/// code after 60 seconds; fetching a new image replaces the old answer.
pub async fn image_code<U, S, C>(
    state: web::Data<AppState<U, S, C>>,
    context: web::Data<SessionContext>,
    mut handle: SessionHandle,
) -> Result<HttpResponse, Error>
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let image = state.captcha.generate().map_err(|e| {
        error!("Failed to render image code: {}", e);
        ErrorInternalServerError("image code generation failed")
    })?;

    handle.session.image_code = Some(image.text);
    let cookie = context.save(&handle).await?;

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .content_type("image/png")
        .body(image.png))
}
