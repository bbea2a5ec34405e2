//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::ActivitySeed;
use crate::domain::seed::{default_seed, load_seed_file};
use crate::error::SeedError;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text lines.
    Text,
    /// One JSON object per line.
    Json,
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`RosterConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RosterConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8000`).
    pub listen_addr: SocketAddr,

    /// JSON seed file for the catalog. `None` uses the built-in catalog.
    pub seed_file: Option<PathBuf>,

    /// Directory holding the browser client. `None` disables it.
    pub static_dir: Option<PathBuf>,

    /// Per-request timeout applied by the HTTP middleware.
    pub request_timeout: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl RosterConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
            .parse()?;

        let seed_file = std::env::var("SEED_FILE")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let static_dir = match std::env::var("STATIC_DIR") {
            Ok(v) if v.is_empty() => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => Some(PathBuf::from("static")),
        };

        let request_timeout = Duration::from_secs(parse_env("REQUEST_TIMEOUT_SECS", 30));

        let log_format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") | Some("JSON") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            listen_addr,
            seed_file,
            static_dir,
            request_timeout,
            log_format,
        })
    }

    /// Returns the catalog seed: the configured file, or the built-in list.
    ///
    /// # Errors
    ///
    /// Returns a [`SeedError`] if the seed file cannot be read or parsed.
    pub fn load_seed(&self) -> Result<Vec<ActivitySeed>, SeedError> {
        match &self.seed_file {
            Some(path) => load_seed_file(path),
            None => Ok(default_seed()),
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u64 = parse_env("ACTIVITY_ROSTER_TEST_UNSET_KEY", 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn load_seed_defaults_to_builtin_catalog() {
        let config = RosterConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            seed_file: None,
            static_dir: None,
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Text,
        };
        let seed = config.load_seed().unwrap_or_default();
        assert_eq!(seed, default_seed());
    }

    #[test]
    fn load_seed_propagates_file_errors() {
        let config = RosterConfig {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
            seed_file: Some(PathBuf::from("/nonexistent/activity-roster/seed.json")),
            static_dir: None,
            request_timeout: Duration::from_secs(30),
            log_format: LogFormat::Json,
        };
        assert!(matches!(config.load_seed(), Err(SeedError::Io { .. })));
    }
}
