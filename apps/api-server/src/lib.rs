//! # Masterblog API Server
//!
//! Actix-web HTTP server exposing the blog post CRUD API.
//! The binary entry point lives in `main.rs`; everything here is also
//! reachable from integration tests.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod openapi;
pub mod state;
