//! # Application State
//!
//! Immutable configuration shared by every handler. The core library is
//! stateless, so there is nothing else to share.

use std::fmt::Display;
use std::str::FromStr;
use std::sync::Arc;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default upper bound on `count` for a single generate request.
pub const DEFAULT_MAX_BATCH: usize = 100;

/// Service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Largest `count` accepted by the generate endpoint.
    pub max_batch: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_batch: DEFAULT_MAX_BATCH,
        }
    }
}

impl AppConfig {
    /// Read `BRDOC_HOST`, `BRDOC_PORT` and `BRDOC_MAX_BATCH`.
    ///
    /// Missing variables fall back to defaults; malformed ones log a warning
    /// and fall back too.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("BRDOC_HOST").unwrap_or(defaults.host),
            port: parse_or("BRDOC_PORT", lookup("BRDOC_PORT"), defaults.port),
            max_batch: parse_or("BRDOC_MAX_BATCH", lookup("BRDOC_MAX_BATCH"), defaults.max_batch),
        }
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        tracing::debug!("{key} not set, using default: {default}");
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Invalid {key} value {raw:?}: {e}; using default: {default}");
            default
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// State with explicit configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
