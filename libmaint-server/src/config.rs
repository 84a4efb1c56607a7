//! Database configuration from the environment
//!
//! `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
//! `POSTGRES_*` variables used by the container deployment.

use std::fmt;

/// Default pool size when `DB_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: &str = "5432";

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing environment variable {0} (or set DATABASE_URL)")]
    Missing(&'static str),

    #[error("invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

/// Connection settings for the library database
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Resolve settings from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let max_connections = max_connections_from(&get)?;

        if let Some(url) = get("DATABASE_URL") {
            return Ok(Self {
                url,
                max_connections,
            });
        }

        let db = get("POSTGRES_DB").ok_or(ConfigError::Missing("POSTGRES_DB"))?;
        let user = get("POSTGRES_USER").ok_or(ConfigError::Missing("POSTGRES_USER"))?;
        let password = get("POSTGRES_PASSWORD").unwrap_or_default();
        let host = get("POSTGRES_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = get("POSTGRES_PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());

        if port.parse::<u16>().is_err() {
            return Err(ConfigError::Invalid {
                name: "POSTGRES_PORT",
                value: port,
            });
        }

        let credentials = if password.is_empty() {
            urlencoding::encode(&user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&user),
                urlencoding::encode(&password)
            )
        };

        Ok(Self {
            url: format!("postgres://{}@{}:{}/{}", credentials, host, port, db),
            max_connections,
        })
    }

    /// Use an explicit URL; the pool size still comes from `DB_MAX_CONNECTIONS`.
    pub fn with_url(url: String) -> Result<Self, ConfigError> {
        Self::with_url_lookup(url, |key| std::env::var(key).ok())
    }

    pub fn with_url_lookup<F>(url: String, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Ok(Self {
            url,
            max_connections: max_connections_from(&get)?,
        })
    }

    /// Connection URL with the password masked, for logging.
    pub fn redacted_url(&self) -> String {
        let Some((scheme, rest)) = self.url.split_once("://") else {
            return self.url.clone();
        };
        let Some((userinfo, host)) = rest.rsplit_once('@') else {
            return self.url.clone();
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{}://{}:***@{}", scheme, user, host),
            None => self.url.clone(),
        }
    }
}

fn max_connections_from(get: &impl Fn(&str) -> Option<String>) -> Result<u32, ConfigError> {
    let Some(raw) = get("DB_MAX_CONNECTIONS") else {
        return Ok(DEFAULT_MAX_CONNECTIONS);
    };
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or(ConfigError::Invalid {
            name: "DB_MAX_CONNECTIONS",
            value: raw,
        })
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.redacted_url())
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
