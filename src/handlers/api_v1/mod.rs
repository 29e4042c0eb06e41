pub mod dashboard;

use actix_web::web;

/// Configure API v1 routes. Handlers authenticate through the `CurrentUser`
/// extractor, so an anonymous call gets a 401 rather than a redirect.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(dashboard::read));
}
