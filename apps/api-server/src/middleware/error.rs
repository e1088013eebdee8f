//! Error handling - maps failures to the `{"error": <message>}` envelope.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, web};
use masterblog_shared::ErrorResponse;
use std::fmt;

/// Application-level error type for handler failures.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::NotFound(detail) => ErrorResponse::new(detail.clone()),
            AppError::BadRequest(detail) => ErrorResponse::new(detail.clone()),
            AppError::Internal(detail) => {
                // Log internal errors, hide the detail from clients
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::new("Internal server error")
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversion from domain errors
impl From<masterblog_core::error::DomainError> for AppError {
    fn from(err: masterblog_core::error::DomainError) -> Self {
        match err {
            masterblog_core::error::DomainError::Validation(msg) => AppError::BadRequest(msg),
            masterblog_core::error::DomainError::NotFound(_) => {
                AppError::NotFound("Post not found.".to_string())
            }
            masterblog_core::error::DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<masterblog_core::error::RepoError> for AppError {
    fn from(err: masterblog_core::error::RepoError) -> Self {
        match err {
            masterblog_core::error::RepoError::Storage(msg) => {
                tracing::error!("Store access error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
            masterblog_core::error::RepoError::Serialization(msg) => {
                tracing::error!("Store serialization error: {}", msg);
                AppError::Internal("Storage error".to_string())
            }
        }
    }
}

/// JSON extractor configuration: malformed bodies become a 400 with
/// the standard error envelope instead of actix's default response.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(format!("Invalid JSON body: {err}")).into())
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
