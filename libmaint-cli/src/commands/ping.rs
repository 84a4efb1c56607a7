//! Database connectivity check

use anyhow::{Context, Result};
use clap::Parser;

use libmaint_server::db::create_pool;

/// Arguments for the ping command
#[derive(Parser, Debug)]
pub struct PingArgs {
    /// Database URL (overrides DATABASE_URL / POSTGRES_* settings)
    #[arg(long)]
    pub database_url: Option<String>,
}

/// Connect once, run `SELECT 1`, report.
pub async fn run_ping(args: PingArgs) -> Result<()> {
    let config = super::database_config(args.database_url, Some(1))?;

    let pool = create_pool(&config)
        .await
        .with_context(|| format!("Cannot reach {}", config.redacted_url()))?;
    pool.close().await;

    println!("ok: {}", config.redacted_url());
    Ok(())
}
