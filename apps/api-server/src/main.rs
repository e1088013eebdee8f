//! # Masterblog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_server::config::AppConfig;
use api_server::handlers;
use api_server::middleware::error::json_config;
use api_server::middleware::rate_limit::RateLimits;
use api_server::observability::RequestIdMiddleware;
use api_server::openapi::ApiDoc;
use api_server::state::AppState;
use masterblog_infra::{KeyedRateLimiter, RateLimitConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Masterblog API Server on {}:{}",
        config.host,
        config.port
    );

    // Build application state
    let state = AppState::new(config.storage_path.as_deref());

    // Per-route rate limits: reads and writes get separate quotas
    let limits = RateLimits::new(
        Arc::new(KeyedRateLimiter::new(RateLimitConfig::per_minute(
            config.read_limit_per_minute,
        ))),
        Arc::new(KeyedRateLimiter::new(RateLimitConfig::per_minute(
            config.write_limit_per_minute,
        ))),
    );

    let openapi = ApiDoc::openapi();

    // Start HTTP server
    HttpServer::new(move || {
        let limits = limits.clone();
        App::new()
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .configure(move |cfg| handlers::configure_routes(cfg, limits))
            .service(
                SwaggerUi::new("/api/docs/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), openapi.clone()),
            )
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,masterblog_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
