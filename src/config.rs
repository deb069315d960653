//! Runtime configuration from environment variables.

use crate::error::ConfigError;
use std::env;

/// Listen address used when `BIND_ADDR` is absent.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
}

impl Config {
    /// Read configuration from the environment. `DATABASE_URL` is required;
    /// startup must fail before any connection is attempted when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Ok(Config {
            database_url,
            bind_addr,
        })
    }
}
