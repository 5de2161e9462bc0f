//! Application factory
//!
//! Builds the Actix-web application from injected state: the account
//! service state, and the session context shared by the cookie extractor.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::middleware::session::SessionContext;
use crate::routes::account::{
    image_code::image_code, login::login, login::login_form, login_sms::login_sms,
    login_sms::login_sms_form, logout::logout, register::register, register::register_form,
    send_sms::send_sms, AppState,
};

use wn_core::repositories::UserRepository;
use wn_core::services::{CodeStore, SmsGateway};

/// Create and configure the application with all dependencies
pub fn create_app<U, S, C>(
    app_state: web::Data<AppState<U, S, C>>,
    session_context: web::Data<SessionContext>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    S: SmsGateway + 'static,
    C: CodeStore + 'static,
{
    let cors = create_cors();

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(session_context)
        // Add middleware (CORS runs before request tracing)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Account routes, trailing-slash paths
        .route("/register/", web::get().to(register_form))
        .route("/register/", web::post().to(register::<U, S, C>))
        .route("/login/", web::get().to(login_form))
        .route("/login/", web::post().to(login::<U, S, C>))
        .route("/login/sms/", web::get().to(login_sms_form))
        .route("/login/sms/", web::post().to(login_sms::<U, S, C>))
        .route("/send-sms/", web::get().to(send_sms::<U, S, C>))
        .route("/image-code/", web::get().to(image_code::<U, S, C>))
        .route("/logout/", web::get().to(logout))
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "worknest-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
