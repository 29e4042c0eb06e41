use actix_web::{App, HttpServer, middleware, web};
use std::sync::Arc;

use gymdesk::api::{HttpGymApi, MockGymApi, SharedApi};
use gymdesk::config::{ApiMode, AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env first so RUST_LOG from it applies
    let dotenv = dotenvy::dotenv();
    env_logger::init();
    if let Err(e) = dotenv {
        log::debug!("No .env file loaded: {e}");
    }

    let config = AppConfig::from_env();

    let api: SharedApi = match config.api_mode {
        ApiMode::Http => {
            log::info!("Using club backend at {}", config.backend_url);
            Arc::new(HttpGymApi::new(config.backend_url.clone()))
        }
        ApiMode::Mock => {
            log::warn!("Using mock backend with demo data (set GYMDESK_API_MODE=http for a real one)");
            Arc::new(MockGymApi::new())
        }
    };

    let secret_key = config.session_key();
    let cookie_secure = config.cookie_secure;
    let bind_addr = config.bind_addr.clone();
    let config = web::Data::new(config);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(gymdesk::session_middleware(secret_key.clone(), cookie_secure))
            .wrap(middleware::Logger::default())
            .app_data(web::Data::from(api.clone()))
            .app_data(config.clone())
            .configure(gymdesk::routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
