//! CORS middleware configuration for cross-origin requests.
//!
//! The browser frontend is served from a different origin than the API, and
//! every authenticated request rides on the session cookie, so the CORS
//! policy must allow credentials. Development stays permissive; production
//! only admits the origins named in `ALLOWED_ORIGINS`.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;
use tracing::info;

use wn_shared::config::Environment;

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `APP_ENV`: Set to "production" for production settings
/// - `ALLOWED_ORIGINS`: Comma-separated list of allowed origins (production only)
/// - `CORS_MAX_AGE`: Max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    if Environment::from_env().is_production() {
        create_production_cors(max_age)
    } else {
        create_development_cors()
    }
}

/// Creates CORS configuration for development environment.
///
/// Permissive: any origin, any header, credentials allowed, so the frontend
/// dev server and tools like curl work without configuration.
fn create_development_cors() -> Cors {
    info!("Configuring CORS for development environment");

    Cors::permissive()
}

/// Creates CORS configuration for production environment.
///
/// Only the origins listed in `ALLOWED_ORIGINS` may call the API, and the
/// method/header surface is narrowed to what the endpoints actually use.
/// Credentials stay enabled for the session cookie.
fn create_production_cors(max_age: usize) -> Cors {
    info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .supports_credentials()
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                info!("Adding allowed origin: {}", origin);
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}
