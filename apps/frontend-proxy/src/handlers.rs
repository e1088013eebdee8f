//! Proxy handlers - relay browser requests to the backend API verbatim.

use actix_web::{HttpResponse, http::StatusCode, web};
use masterblog_shared::ErrorResponse;
use serde_json::Value;

use crate::config::ProxyConfig;

/// Serve the embedded index page.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../static/index.html"))
}

fn backend_status(status: reqwest::StatusCode) -> StatusCode {
    StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY)
}

/// Relay `GET /api/posts` to the backend.
pub async fn get_posts(
    client: web::Data<reqwest::Client>,
    config: web::Data<ProxyConfig>,
) -> HttpResponse {
    let response = match client.get(&config.backend_api_url).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Backend unreachable: {}", e);
            return HttpResponse::BadGateway()
                .json(ErrorResponse::new("Failed to fetch posts"));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return HttpResponse::build(backend_status(status))
            .json(ErrorResponse::new("Failed to fetch posts"));
    }

    match response.json::<Value>().await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(e) => {
            tracing::error!("Backend returned invalid JSON: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to fetch posts"))
        }
    }
}

/// Relay `POST /api/posts` to the backend after a presence check on the
/// required fields.
pub async fn create_post(
    client: web::Data<reqwest::Client>,
    config: web::Data<ProxyConfig>,
    body: web::Json<Value>,
) -> HttpResponse {
    let body = body.into_inner();

    let has = |field: &str| body.get(field).and_then(Value::as_str).is_some();
    if !(has("title") && has("content") && has("author") && has("date")) {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Missing required fields: title, content, author, or date.",
        ));
    }

    let response = match client
        .post(&config.backend_api_url)
        .json(&body)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            tracing::error!("Backend unreachable: {}", e);
            return HttpResponse::BadGateway()
                .json(ErrorResponse::new("Failed to create post"));
        }
    };

    let status = response.status();
    if status != reqwest::StatusCode::CREATED {
        return HttpResponse::build(backend_status(status))
            .json(ErrorResponse::new("Failed to create post"));
    }

    match response.json::<Value>().await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(e) => {
            tracing::error!("Backend returned invalid JSON: {}", e);
            HttpResponse::BadGateway().json(ErrorResponse::new("Failed to create post"))
        }
    }
}
