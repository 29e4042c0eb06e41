//! Shared test infrastructure for app-level tests.
//!
//! - `app!(api)` - full route table over the given `MockGymApi`, cookie sessions on
//! - `app!(api, extra)` - same, with test-only routes configured first
//! - `sign_in!(app, email)` - runs the real login form flow, returns the session cookie
//! - `user(role)` - a `SessionUser` for calling loaders directly
#![allow(dead_code, unused_macros)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use regex::Regex;

use gymdesk::auth::session::SessionUser;
use gymdesk::config::AppConfig;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const DEMO_PASSWORD: &str = "demo123";
pub const MEMBER_EMAIL: &str = "member@gymdesk.test";
pub const STAFF_EMAIL: &str = "staff@gymdesk.test";
pub const MANAGER_EMAIL: &str = "manager@gymdesk.test";
pub const BRANCH_ADMIN_EMAIL: &str = "branch@gymdesk.test";
pub const SESSION_COOKIE: &str = "id";
pub const SESSION_KEY: [u8; 64] = [7u8; 64];

// ============================================================================
// HELPERS
// ============================================================================

/// Mock-mode configuration with every default.
pub fn test_config() -> AppConfig {
    AppConfig::from_lookup(|_| None)
}

pub fn user(role: &str) -> SessionUser {
    SessionUser {
        user_id: "u-test".to_string(),
        role: role.to_string(),
        display_name: "Test User".to_string(),
        token: Some("tok".to_string()),
    }
}

/// The session cookie set on a response, if any.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Pull the hidden CSRF field out of a rendered form.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page has no CSRF token")
}

pub async fn body_text<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

pub fn location<B>(resp: &ServiceResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Initialise the full app over a `MockGymApi`. An optional second argument
/// registers extra routes ahead of the app's own.
macro_rules! app {
    ($api:expr) => {
        app!($api, |_: &mut actix_web::web::ServiceConfig| {})
    };
    ($api:expr, $extra:expr) => {{
        let api: std::sync::Arc<dyn gymdesk::api::GymApi> = std::sync::Arc::new($api);
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(gymdesk::session_middleware(
                    actix_web::cookie::Key::from(&common::SESSION_KEY[..]),
                    false,
                ))
                .app_data(actix_web::web::Data::from(api))
                .app_data(actix_web::web::Data::new(common::test_config()))
                .configure($extra)
                .configure(gymdesk::routes),
        )
        .await
    }};
}

/// Sign in through the login form and return the authenticated session cookie.
macro_rules! sign_in {
    ($app:expr, $email:expr) => {{
        use actix_web::test;
        let resp = test::call_service(&$app, test::TestRequest::get().uri("/login").to_request()).await;
        let cookie = common::session_cookie(&resp).expect("login page sets a session cookie");
        let body = test::read_body(resp).await;
        let token = common::csrf_token(std::str::from_utf8(&body).expect("utf8"));
        let form = serde_urlencoded::to_string([
            ("email", $email),
            ("password", common::DEMO_PASSWORD),
            ("csrf_token", token.as_str()),
        ])
        .expect("form encoding");
        let req = test::TestRequest::post()
            .uri("/login")
            .cookie(cookie)
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload(form)
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), 303, "login should redirect");
        assert_eq!(common::location(&resp), "/dashboard");
        common::session_cookie(&resp).expect("login sets the session cookie")
    }};
}
