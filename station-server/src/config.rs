//! Service configuration.
//!
//! Read from environment variables at startup:
//!
//! | Variable            | Default                          |
//! |---------------------|----------------------------------|
//! | `STATIONS_CSV`      | `data/stations.csv`              |
//! | `BIND_ADDR`         | `127.0.0.1:3000`                 |
//! | `STATIONS_BASE_URI` | `http://irail.be/stations/NMBS`  |
//! | `CACHE_TTL_SECS`    | `300`                            |
//! | `CACHE_CAPACITY`    | `1000`                           |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::CacheConfig;
use crate::document::DEFAULT_BASE_URI;

/// Bundled catalog, relative to the crate root.
const DEFAULT_CATALOG_PATH: &str = "data/stations.csv";

/// An environment variable held an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name}: {value:?} ({reason})")]
pub struct ConfigError {
    name: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the whole service.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path to the stations CSV.
    pub catalog_path: PathBuf,

    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Namespace for station URIs and listing identities.
    pub base_uri: String,

    /// Listing cache settings.
    pub cache: CacheConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            base_uri: DEFAULT_BASE_URI.to_string(),
            cache: CacheConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset or blank variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("STATIONS_CSV") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = parse("BIND_ADDR", &addr)?;
        }
        if let Some(uri) = get("STATIONS_BASE_URI") {
            config.base_uri = uri;
        }
        if let Some(secs) = get("CACHE_TTL_SECS") {
            config.cache.ttl = Duration::from_secs(parse("CACHE_TTL_SECS", &secs)?);
        }
        if let Some(capacity) = get("CACHE_CAPACITY") {
            config.cache.max_capacity = parse("CACHE_CAPACITY", &capacity)?;
        }

        Ok(config)
    }
}

fn parse<T>(name: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError {
        name,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
