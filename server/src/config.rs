use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "recipebox.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_POOL_SIZE: u32 = 8;
pub const DEFAULT_MEDIA_DIR: &str = "media";

#[derive(Error, Debug)]
#[error("{name} has invalid value {value:?}: {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (`DATABASE_URL`)
    pub database_url: String,
    /// Listen address (`BIND_ADDR`)
    pub bind_addr: SocketAddr,
    /// Connection pool size (`DB_POOL_SIZE`)
    pub pool_size: u32,
    /// Directory served under `/media` (`MEDIA_DIR`)
    pub media_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source; unset and blank values use defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr.parse().map_err(|e: std::net::AddrParseError| ConfigError {
            name: "BIND_ADDR",
            value: bind_addr.clone(),
            reason: e.to_string(),
        })?;

        let pool_size = match get("DB_POOL_SIZE") {
            None => DEFAULT_POOL_SIZE,
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                Ok(_) => {
                    return Err(ConfigError {
                        name: "DB_POOL_SIZE",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError {
                        name: "DB_POOL_SIZE",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
        };

        let media_dir = PathBuf::from(get("MEDIA_DIR").unwrap_or_else(|| DEFAULT_MEDIA_DIR.to_string()));

        Ok(Self {
            database_url,
            bind_addr,
            pool_size,
            media_dir,
        })
    }
}
