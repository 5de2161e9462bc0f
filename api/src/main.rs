use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wn_api::app::create_app;
use wn_api::middleware::session::SessionContext;
use wn_api::routes::account::AppState;
use wn_core::services::{AccountConfig, AccountService, CaptchaGenerator, SessionStore};
use wn_infra::cache::{RedisClient, RedisCodeStore, RedisSessionStore};
use wn_infra::captcha::PngCaptchaGenerator;
use wn_infra::database::{DatabasePool, MySqlUserRepository};
use wn_infra::sms::create_sms_gateway;
use wn_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("Starting WorkNest API server ({})", config.environment);

    // Connect the backing stores
    let pool = DatabasePool::new(&config.database)
        .await
        .context("Failed to connect to MySQL")?;
    let redis = RedisClient::new(&config.cache)
        .await
        .context("Failed to connect to Redis")?;

    // Wire infrastructure into the account service
    let users = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let gateway = Arc::new(
        create_sms_gateway(&config.sms).context("Failed to configure the SMS gateway")?,
    );
    let codes = Arc::new(RedisCodeStore::new(redis.clone()));
    let sessions: Arc<dyn SessionStore> = Arc::new(RedisSessionStore::new(redis));
    let captcha: Arc<dyn CaptchaGenerator> = Arc::new(PngCaptchaGenerator::new());

    let account_service = Arc::new(AccountService::new(
        users,
        gateway,
        codes,
        AccountConfig::from_sms_config(&config.sms),
    ));

    let app_state = web::Data::new(AppState {
        account_service,
        captcha,
    });
    let session_context = web::Data::new(SessionContext::new(sessions, config.session.clone()));

    let bind_address = config.server.bind_address();
    info!("Server listening on {}", bind_address);

    let workers = config.server.workers;
    let mut server =
        HttpServer::new(move || create_app(app_state.clone(), session_context.clone()));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("Server execution failed")?;

    Ok(())
}
