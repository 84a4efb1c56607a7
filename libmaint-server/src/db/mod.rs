//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - One pool, created at startup and handed to handlers through `AppState`
//! - Every operation is a single parameterized statement
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Mutations run in a transaction that is rolled back unless committed

pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options, ping};
pub use repos::*;
