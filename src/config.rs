use anyhow::Context;
use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_CONNECT_RETRIES, DEFAULT_MAX_CONNECTIONS, DEFAULT_SERVER_PORT};

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub max_connections: u32,
    pub connect_retries: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. `DATABASE_URL` wins over
    /// the individual `DB_*` variables when both are present.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let database_url = match lookup("DATABASE_URL").filter(|url| !url.is_empty()) {
            Some(url) => url,
            None => format!(
                "postgresql://{}:{}@{}:{}/{}",
                get("DB_USER", "postgres"),
                get("DB_PASSWORD", ""),
                get("DB_HOST", "localhost"),
                get("DB_PORT", "5432"),
                get("DB_NAME", "carzone"),
            ),
        };

        Ok(Config {
            database_url,
            server_port: parse_or(&lookup, "PORT", DEFAULT_SERVER_PORT)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_retries: parse_or(&lookup, "DB_CONNECT_RETRIES", DEFAULT_CONNECT_RETRIES)?,
            log_level: get("RUST_LOG", "info"),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
