//! Rate limiting middleware.
//!
//! Requests are keyed by client address plus matched route, with separate
//! quotas for reads (list, search) and writes (create, update, delete).

use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::Method,
};
use masterblog_shared::ErrorResponse;
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::sync::Arc;

use masterblog_core::ports::RateLimiter;

/// The read and write limiters the middleware chooses between.
#[derive(Clone)]
pub struct RateLimits {
    pub read: Arc<dyn RateLimiter>,
    pub write: Arc<dyn RateLimiter>,
}

impl RateLimits {
    pub fn new(read: Arc<dyn RateLimiter>, write: Arc<dyn RateLimiter>) -> Self {
        Self { read, write }
    }
}

/// Rate limiting middleware factory.
pub struct RateLimitMiddleware {
    limits: RateLimits,
}

impl RateLimitMiddleware {
    pub fn new(limits: RateLimits) -> Self {
        Self { limits }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service,
            limits: self.limits.clone(),
        }))
    }
}

pub struct RateLimitMiddlewareService<S> {
    service: S,
    limits: RateLimits,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let limiter = if req.method() == Method::GET || req.method() == Method::HEAD {
            self.limits.read.clone()
        } else {
            self.limits.write.clone()
        };

        // Client identifier plus route: each client gets an independent
        // budget on every route.
        let client = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();
        let route = req
            .match_pattern()
            .unwrap_or_else(|| req.path().to_string());
        let key = format!("{client}:{route}");

        // Check rate limit synchronously before calling inner service.
        // The keyed limiter resolves without awaiting anything external.
        let check_result = { futures::executor::block_on(limiter.check(&key)) };

        match check_result {
            Ok(result) if !result.allowed => {
                tracing::warn!("Rate limit exceeded for key: {}", key);

                let body = ErrorResponse::new(format!(
                    "Rate limit exceeded. Try again in {} seconds.",
                    result.reset_after.as_secs()
                ));

                let response = HttpResponse::TooManyRequests()
                    .insert_header(("X-RateLimit-Remaining", "0"))
                    .insert_header(("Retry-After", result.reset_after.as_secs().to_string()))
                    .json(body);

                let (http_req, _payload) = req.into_parts();
                let srv_response = ServiceResponse::new(http_req, response);

                Box::pin(async move { Ok(srv_response.map_into_right_body()) })
            }
            Ok(_) | Err(_) => {
                // Allowed or limiter error (fail open) - proceed with request
                if check_result.is_err() {
                    tracing::error!("Rate limiter error, failing open");
                }

                let fut = self.service.call(req);
                Box::pin(async move {
                    let res = fut.await?;
                    Ok(res.map_into_left_body())
                })
            }
        }
    }
}
