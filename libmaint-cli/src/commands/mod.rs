//! Subcommand implementations

pub mod ping;
pub mod serve;

use anyhow::{Context, Result};
use libmaint_server::DatabaseConfig;

/// Resolve database settings, letting CLI flags override the environment.
pub(crate) fn database_config(
    database_url: Option<String>,
    max_connections: Option<u32>,
) -> Result<DatabaseConfig> {
    let mut config = match database_url {
        Some(url) => DatabaseConfig::with_url(url)?,
        None => DatabaseConfig::from_env().context(
            "Database not configured. Set --database-url, DATABASE_URL, or POSTGRES_* (env or ~/.libmaint/.env)",
        )?,
    };

    if let Some(n) = max_connections {
        config.max_connections = n;
    }
    Ok(config)
}
