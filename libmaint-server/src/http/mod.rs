//! HTTP server layer
//!
//! Axum server with:
//! - CORS (all origins by default, or an explicit allow-list)
//! - Request tracing
//! - Graceful shutdown
//! - Plain JSON-string error bodies

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
pub use error::ApiError;
