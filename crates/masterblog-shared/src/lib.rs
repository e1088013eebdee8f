//! # Masterblog Shared
//!
//! Request/response types shared between the API server and the
//! frontend proxy.

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, MessageResponse};
