//! HTTP handlers and route configuration.

pub mod health;
pub mod posts;

use actix_web::web;

use crate::middleware::rate_limit::{RateLimitMiddleware, RateLimits};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig, limits: RateLimits) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes, rate limited per client per route
            .service(
                web::scope("/posts")
                    .wrap(RateLimitMiddleware::new(limits))
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/search", web::get().to(posts::search_posts))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    );
}
