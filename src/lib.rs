pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, web};

/// Cookie-backed session: the user and role live in the signed, encrypted cookie.
pub fn session_middleware(key: Key, cookie_secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .build()
}

/// All routes. Expects `web::Data<dyn GymApi>` and `web::Data<AppConfig>` in app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Static files
        .service(actix_files::Files::new("/static", "./static"))
        // Public routes
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        // Root redirect
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        // Fetched by script: answers 401 instead of redirecting
        .route("/dashboard/panel", web::get().to(handlers::dashboard::panel))
        .service(web::scope("/api/v1").configure(handlers::api_v1::configure))
        // Protected pages
        .service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                .route("/logout", web::post().to(handlers::auth_handlers::logout))
                .route("/crm/leads", web::get().to(handlers::crm_handlers::leads))
                .route("/billing/invoices", web::get().to(handlers::billing_handlers::invoices)),
        )
        .default_service(web::to(|| async {
            let html = include_str!("../templates/errors/404.html");
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(html)
        }));
}
