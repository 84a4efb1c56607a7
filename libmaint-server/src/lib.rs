//! libmaint-server: HTTP API over the music library database
//!
//! Exposes track search, YouTube retry flags and artist genre tagging
//! as JSON endpoints backed by a PostgreSQL connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DatabaseConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
