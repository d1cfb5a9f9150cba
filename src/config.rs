//! Process configuration read from the environment (after `.env` is loaded).
//!
//! | Variable             | Default                         |
//! |----------------------|---------------------------------|
//! | `DATABASE_URL`       | `postgres://localhost/contacts` |
//! | `BIND_ADDR`          | `0.0.0.0:3000`                  |
//! | `DB_MAX_CONNECTIONS` | `5`                             |
//! | `MAX_BODY_BYTES`     | `65536`                         |
//! | `STORAGE`            | `postgres` (or `memory`)        |

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/contacts";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub max_body_bytes: usize,
    pub storage: StorageBackend,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            storage: StorageBackend::Postgres,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: parse_or("DB_MAX_CONNECTIONS", lookup("DB_MAX_CONNECTIONS"), defaults.max_connections)?,
            max_body_bytes: parse_or("MAX_BODY_BYTES", lookup("MAX_BODY_BYTES"), defaults.max_body_bytes)?,
            storage: match lookup("STORAGE") {
                Some(s) => s.parse()?,
                None => defaults.storage,
            },
        })
    }
}

fn parse_or<T: FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}
