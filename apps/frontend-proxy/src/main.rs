//! # Masterblog Frontend Proxy
//!
//! Thin actix-web server that serves the index page and forwards
//! `/api/posts` requests to the backend API, passing errors through.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;

use config::ProxyConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = ProxyConfig::from_env();

    tracing::info!(
        "Starting Masterblog frontend proxy on {}:{} (backend: {})",
        config.host,
        config.port,
        config.backend_api_url
    );

    let client = reqwest::Client::new();
    let bind_addr = (config.host.clone(), config.port);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(client.clone()))
            .app_data(web::Data::new(config.clone()))
            .route("/", web::get().to(handlers::index))
            .route("/api/posts", web::get().to(handlers::get_posts))
            .route("/api/posts", web::post().to(handlers::create_post))
    })
    .bind(bind_addr)?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,frontend_proxy=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
