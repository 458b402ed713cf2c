//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::service::IdStrategy;

/// Default name of the backing file.
pub const DEFAULT_STORE_PATH: &str = "notification.json";

/// Which [`crate::persistence::NotificationStore`] implementation to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreBackend {
    /// JSON file on disk.
    #[default]
    File,
    /// Process memory; nothing survives a restart.
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown store backend: {other}")),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Path of the JSON file holding the notifications.
    pub store_path: PathBuf,

    /// Storage backend.
    pub store_backend: StoreBackend,

    /// Rule for assigning ids to new notifications.
    pub id_strategy: IdStrategy,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            store_backend: StoreBackend::default(),
            id_strategy: IdStrategy::default(),
            log_format: LogFormat::default(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or not
    /// recognised. Calls `dotenvy::dotenv().ok()` to optionally load a
    /// `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.listen_addr,
        };

        let store_path = std::env::var("NOTIFICATION_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);

        Ok(Self {
            listen_addr,
            store_path,
            store_backend: parse_env("NOTIFICATION_STORE_BACKEND", defaults.store_backend),
            id_strategy: parse_env("NOTIFICATION_ID_STRATEGY", defaults.id_strategy),
            log_format: parse_env("LOG_FORMAT", defaults.log_format),
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_legacy_layout() {
        let config = ServiceConfig::default();
        assert_eq!(config.listen_addr.port(), 8080);
        assert_eq!(config.store_path, PathBuf::from("notification.json"));
        assert_eq!(config.store_backend, StoreBackend::File);
        assert_eq!(config.id_strategy, IdStrategy::MaxPlusOne);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("MEMORY".parse::<StoreBackend>(), Ok(StoreBackend::Memory));
        assert_eq!("Json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("sqlite".parse::<StoreBackend>().is_err());
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value = parse_env("NOTIFICATION_SERVICE_TEST_UNSET_KEY", StoreBackend::Memory);
        assert_eq!(value, StoreBackend::Memory);
    }
}
