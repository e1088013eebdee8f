//! # Masterblog Infrastructure
//!
//! Concrete implementations of the ports defined in `masterblog-core`:
//! the in-memory and JSON-file post stores and the keyed rate limiter.

pub mod rate_limit;
pub mod store;

pub use rate_limit::{KeyedRateLimiter, RateLimitConfig};
pub use store::{InMemoryPostStore, JsonFilePostStore};
