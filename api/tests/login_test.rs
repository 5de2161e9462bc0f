//! Integration tests for the login endpoints and the image code flow

use actix_web::cookie::Cookie;
use actix_web::{test, web};
use serde_json::{json, Value};
use std::sync::Arc;

use wn_api::app::create_app;
use wn_api::middleware::session::SessionContext;
use wn_api::routes::account::AppState;
use wn_core::domain::entities::User;
use wn_core::forms::SmsScene;
use wn_core::repositories::MockUserRepository;
use wn_core::services::{
    code_key, AccountConfig, AccountService, CaptchaGenerator, CodeStore, SessionStore,
};
use wn_infra::cache::{InMemoryCodeStore, InMemorySessionStore};
use wn_infra::captcha::FixedCaptchaGenerator;
use wn_infra::sms::MockSmsGateway;
use wn_shared::config::SessionConfig;
use wn_shared::utils::digest::password_digest;

struct Harness {
    repo: MockUserRepository,
    codes: Arc<InMemoryCodeStore>,
    sessions: Arc<InMemorySessionStore>,
    state: web::Data<AppState<MockUserRepository, MockSmsGateway, InMemoryCodeStore>>,
    session_context: web::Data<SessionContext>,
}

fn harness() -> Harness {
    let repo = MockUserRepository::new();
    let codes = Arc::new(InMemoryCodeStore::new());
    let sessions = Arc::new(InMemorySessionStore::new());
    let config = AccountConfig::default()
        .with_template(SmsScene::Register, "548760")
        .with_template(SmsScene::Login, "548761");
    let service = AccountService::new(
        Arc::new(repo.clone()),
        Arc::new(MockSmsGateway::with_options(false, false)),
        codes.clone(),
        config,
    );
    let captcha: Arc<dyn CaptchaGenerator> = Arc::new(FixedCaptchaGenerator::new("AB3D"));
    let session_store: Arc<dyn SessionStore> = sessions.clone();

    Harness {
        repo,
        codes,
        sessions,
        state: web::Data::new(AppState {
            account_service: Arc::new(service),
            captcha,
        }),
        session_context: web::Data::new(SessionContext::new(
            session_store,
            SessionConfig::default(),
        )),
    }
}

fn seeded_user() -> User {
    User::new(
        "alice".to_string(),
        "a@x.com".to_string(),
        "13800000000".to_string(),
        password_digest("secret1"),
    )
}

/// The session cookie set by `resp`, if any.
fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "wn_session")
        .map(|c| c.into_owned())
}

#[actix_web::test]
async fn image_code_returns_png_and_caches_the_answer() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let req = test::TestRequest::get().uri("/image-code/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/png"
    );

    let cookie = session_cookie(&resp).unwrap();
    let body = test::read_body(resp).await;
    assert_eq!(&body[..4], &[0x89, b'P', b'N', b'G']);

    let session = h.sessions.load(cookie.value()).await.unwrap().unwrap();
    assert_eq!(session.image_code.as_deref(), Some("AB3D"));
    assert!(!session.is_authenticated());
}

#[actix_web::test]
async fn password_login_succeeds_with_the_cached_image_code() {
    let h = harness();
    let user = seeded_user();
    h.repo.add_user(user.clone());
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/image-code/").to_request(),
    )
    .await;
    let cookie = session_cookie(&resp).unwrap();

    // Submitted answers are trimmed and case-folded
    let req = test::TestRequest::post()
        .uri("/login/")
        .cookie(cookie.clone())
        .set_json(json!({
            "username": "a@x.com",
            "password": "secret1",
            "code": " ab3d "
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": true, "data": "/index/"}));

    let session = h.sessions.load(cookie.value()).await.unwrap().unwrap();
    assert_eq!(session.user_id, Some(user.id));
    assert_eq!(session.image_code, None);
}

#[actix_web::test]
async fn password_login_accepts_the_phone_as_identifier() {
    let h = harness();
    let user = seeded_user();
    h.repo.add_user(user.clone());
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/image-code/").to_request(),
    )
    .await;
    let cookie = session_cookie(&resp).unwrap();

    let req = test::TestRequest::post()
        .uri("/login/")
        .cookie(cookie.clone())
        .set_json(json!({
            "username": "13800000000",
            "password": "secret1",
            "code": "AB3D"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(true));

    let session = h.sessions.load(cookie.value()).await.unwrap().unwrap();
    assert_eq!(session.user_id, Some(user.id));
}

#[actix_web::test]
async fn wrong_password_is_a_generic_username_error() {
    let h = harness();
    h.repo.add_user(seeded_user());
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/image-code/").to_request(),
    )
    .await;
    let cookie = session_cookie(&resp).unwrap();

    let req = test::TestRequest::post()
        .uri("/login/")
        .cookie(cookie.clone())
        .set_json(json!({
            "username": "a@x.com",
            "password": "not-it",
            "code": "AB3D"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
    let message = body["error"]["username"][0].as_str().unwrap();
    assert!(message.contains("用户名或密码错误"));
    assert!(body["error"].get("password").is_none());

    // Failure leaves the session anonymous
    let session = h.sessions.load(cookie.value()).await.unwrap().unwrap();
    assert!(!session.is_authenticated());
}

#[actix_web::test]
async fn login_without_fetching_an_image_code_reports_it_expired() {
    let h = harness();
    h.repo.add_user(seeded_user());
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    // No prior /image-code/ call, no cookie
    let req = test::TestRequest::post()
        .uri("/login/")
        .set_json(json!({
            "username": "a@x.com",
            "password": "secret1",
            "code": "AB3D"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
    let message = body["error"]["code"][0].as_str().unwrap();
    assert!(message.contains("验证码已过期"));
}

#[actix_web::test]
async fn wrong_image_code_is_rejected() {
    let h = harness();
    h.repo.add_user(seeded_user());
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/image-code/").to_request(),
    )
    .await;
    let cookie = session_cookie(&resp).unwrap();

    let req = test::TestRequest::post()
        .uri("/login/")
        .cookie(cookie)
        .set_json(json!({
            "username": "a@x.com",
            "password": "secret1",
            "code": "ZZZZ"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
    let message = body["error"]["code"][0].as_str().unwrap();
    assert!(message.contains("验证码错误"));
}

#[actix_web::test]
async fn sms_login_succeeds_with_the_stored_code() {
    let h = harness();
    let user = seeded_user();
    h.repo.add_user(user.clone());
    h.codes
        .set(&code_key("13800000000"), "654321", 300)
        .await
        .unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login/sms/")
        .set_json(json!({
            "mobile_phone": "13800000000",
            "code": "654321"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let cookie = session_cookie(&resp).unwrap();
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"status": true, "data": "/index/"}));

    let session = h.sessions.load(cookie.value()).await.unwrap().unwrap();
    assert_eq!(session.user_id, Some(user.id));
}

#[actix_web::test]
async fn sms_login_with_unknown_phone_reports_only_the_phone() {
    let h = harness();
    let app = test::init_service(create_app(h.state.clone(), h.session_context.clone())).await;

    let req = test::TestRequest::post()
        .uri("/login/sms/")
        .set_json(json!({
            "mobile_phone": "13800000000",
            "code": "654321"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], json!(false));
    let errors = body["error"].as_object().unwrap();
    assert_eq!(errors.len(), 1);
    let message = body["error"]["mobile_phone"][0].as_str().unwrap();
    assert!(message.contains("手机号不存在"));
}
