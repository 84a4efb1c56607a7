//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use libmaint_server::db::create_pool;
use libmaint_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "LIBMAINT_BIND", default_value = "0.0.0.0:5001")]
    pub bind: SocketAddr,

    /// Only allow these browser origins (repeatable); default allows any origin
    #[arg(long = "allow-origin", value_name = "ORIGIN")]
    pub allow_origins: Vec<String>,

    /// Database URL (overrides DATABASE_URL / POSTGRES_* settings)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_connections: Option<u32>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = super::database_config(args.database_url, args.max_connections)?;
    tracing::info!(database = %db_config.redacted_url(), "Starting libmaint server on {}", args.bind);

    let pool = create_pool(&db_config)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.allow_origins.is_empty(),
        allowed_origins: args.allow_origins,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
