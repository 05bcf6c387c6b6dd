//! Runtime configuration loaded from the environment.

use crate::error::{CompanionError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Env var overriding the SQLite database location.
pub const DB_PATH_ENV_VAR: &str = "FFL_DB_PATH";

/// Env var overriding the nflverse player stats URL template.
pub const STATS_URL_ENV_VAR: &str = "NFLVERSE_PLAYER_STATS_URL";

/// Env var naming the account league commands act as.
pub const USER_ENV_VAR: &str = "FFL_USER";

/// Env var holding that account's password.
pub const PASSWORD_ENV_VAR: &str = "FFL_PASSWORD";

/// Env var overriding the HTTP timeout, in seconds.
pub const HTTP_TIMEOUT_ENV_VAR: &str = "FFL_HTTP_TIMEOUT_SECS";

/// Weekly player stats release asset; `{year}` is substituted per season.
pub const DEFAULT_STATS_URL: &str =
    "https://github.com/nflverse/nflverse-data/releases/download/player_stats/player_stats_{year}.parquet";

const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub stats_url_template: String,
    pub http_timeout: Duration,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path = match lookup(DB_PATH_ENV_VAR).filter(|v| !v.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => default_database_path()?,
        };

        let stats_url_template = lookup(STATS_URL_ENV_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATS_URL.to_string());
        if !stats_url_template.contains("{year}") {
            return Err(CompanionError::Config {
                message: format!("{STATS_URL_ENV_VAR} must contain a {{year}} placeholder"),
            });
        }

        let http_timeout = match lookup(HTTP_TIMEOUT_ENV_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| CompanionError::Config {
                    message: format!("{HTTP_TIMEOUT_ENV_VAR} must be a whole number of seconds, got {raw:?}"),
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        Ok(Self {
            database_path,
            stats_url_template,
            http_timeout,
            user: lookup(USER_ENV_VAR).filter(|v| !v.trim().is_empty()),
            password: lookup(PASSWORD_ENV_VAR).filter(|v| !v.is_empty()),
        })
    }

    /// Replace the database path, e.g. from a `--db` flag.
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }

    /// Replace the acting account, e.g. from `--user` / `--password` flags.
    pub fn with_credentials(mut self, user: Option<String>, password: Option<String>) -> Self {
        if user.is_some() {
            self.user = user;
        }
        if password.is_some() {
            self.password = password;
        }
        self
    }
}

/// Path: ~/.cache/ffl-companion/stats.db
fn default_database_path() -> Result<PathBuf> {
    let cache_dir = dirs::cache_dir().ok_or_else(|| CompanionError::Config {
        message: "Could not determine cache directory".to_string(),
    })?;
    Ok(cache_dir.join("ffl-companion").join("stats.db"))
}
