//! Session cookie layer.
//!
//! The session id travels in an http-only cookie; the session body lives in
//! the server-side store. Handlers take a [`SessionHandle`] extractor holding
//! the loaded (or freshly minted) session, mutate it, and persist it through
//! the [`SessionContext`], which hands back the cookie to attach to the
//! response.

use std::sync::Arc;

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use actix_web::error::ErrorInternalServerError;
use actix_web::{web, Error, FromRequest, HttpRequest};
use futures_util::future::LocalBoxFuture;
use tracing::error;

use wn_core::domain::entities::Session;
use wn_core::services::{new_session_id, SessionStore};
use wn_shared::config::SessionConfig;

/// Shared session infrastructure, injected as app data.
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    config: SessionConfig,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>, config: SessionConfig) -> Self {
        Self { store, config }
    }

    /// Persist the handle's session with the TTL implied by its content and
    /// return the refreshed cookie for the response.
    pub async fn save(&self, handle: &SessionHandle) -> Result<Cookie<'static>, Error> {
        let ttl_secs = handle.session.ttl_secs();
        self.store
            .save(&handle.id, &handle.session, ttl_secs)
            .await
            .map_err(|e| {
                error!("Failed to save session {}: {}", handle.id, e);
                ErrorInternalServerError("session store unavailable")
            })?;
        Ok(self.session_cookie(handle, ttl_secs))
    }

    /// Drop the server-side state and return the removal cookie.
    pub async fn destroy(&self, handle: &SessionHandle) -> Result<Cookie<'static>, Error> {
        self.store.destroy(&handle.id).await.map_err(|e| {
            error!("Failed to destroy session {}: {}", handle.id, e);
            ErrorInternalServerError("session store unavailable")
        })?;
        Ok(self.removal_cookie())
    }

    fn session_cookie(&self, handle: &SessionHandle, ttl_secs: u64) -> Cookie<'static> {
        Cookie::build(self.config.cookie_name.clone(), handle.id.clone())
            .path("/")
            .http_only(true)
            .secure(self.config.secure)
            .same_site(SameSite::Lax)
            .max_age(Duration::seconds(ttl_secs as i64))
            .finish()
    }

    fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.config.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .secure(self.config.secure)
            .finish();
        cookie.make_removal();
        cookie
    }
}

/// The current request's session: its id and decoded state.
///
/// Extracting never fails for a missing or expired cookie; those cases mint
/// a fresh anonymous session. Only a store outage is an error.
pub struct SessionHandle {
    pub id: String,
    pub session: Session,
}

impl SessionHandle {
    fn fresh() -> Self {
        Self {
            id: new_session_id(),
            session: Session::default(),
        }
    }
}

impl FromRequest for SessionHandle {
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move {
            let context = req
                .app_data::<web::Data<SessionContext>>()
                .cloned()
                .ok_or_else(|| ErrorInternalServerError("session context not configured"))?;

            let session_id = match req.cookie(&context.config.cookie_name) {
                Some(cookie) => cookie.value().to_string(),
                None => return Ok(SessionHandle::fresh()),
            };

            match context.store.load(&session_id).await {
                Ok(Some(session)) => Ok(SessionHandle {
                    id: session_id,
                    session,
                }),
                // Expired or unknown ids start over under a new id
                Ok(None) => Ok(SessionHandle::fresh()),
                Err(e) => {
                    error!("Failed to load session {}: {}", session_id, e);
                    Err(ErrorInternalServerError("session store unavailable"))
                }
            }
        })
    }
}
