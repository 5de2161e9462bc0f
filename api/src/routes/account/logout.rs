use actix_web::{web, Error, HttpResponse};
use tracing::info;

use crate::middleware::session::{SessionContext, SessionHandle};

use wn_shared::types::response::ApiResponse;

/// Handler for `GET /logout/`
///
/// Drops all server-side session state and expires the cookie. Safe to call
/// without a session.
///
/// # Response
///
/// `{"status": true, "data": "/login/"}`.
pub async fn logout(
    context: web::Data<SessionContext>,
    handle: SessionHandle,
) -> Result<HttpResponse, Error> {
    if let Some(user_id) = handle.session.user_id {
        info!(user_id = %user_id, "logout");
    }
    let cookie = context.destroy(&handle).await?;
    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(ApiResponse::ok("/login/")))
}
