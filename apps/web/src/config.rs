use std::str::FromStr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the resume backend, without a trailing slash.
    pub api_base_url: String,
    /// Optional timeout for backend calls. `None` keeps reqwest's default (no timeout).
    pub api_timeout: Option<Duration>,
    pub port: u16,
    pub rust_log: String,
    /// How long a search result stays reachable under its result id.
    /// Never zero; `u32` keeps it inside what `chrono::Duration` can hold.
    pub result_ttl_secs: u32,
    pub result_capacity: usize,
    pub upload_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let api_base_url = std::env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let api_timeout = match std::env::var("API_TIMEOUT_SECS") {
            Ok(raw) => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .context("API_TIMEOUT_SECS must be a whole number of seconds")?,
            )),
            Err(_) => None,
        };

        Ok(Config {
            api_base_url: normalize_base_url(&api_base_url),
            api_timeout,
            port: env_or("PORT", 3000)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            result_ttl_secs: nonzero("RESULT_TTL_SECS", env_or("RESULT_TTL_SECS", 600)?)?,
            result_capacity: env_or("RESULT_CAPACITY", 256)?,
            upload_limit_bytes: env_or("UPLOAD_LIMIT_BYTES", 10 * 1024 * 1024)?,
        })
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}

fn nonzero(key: &str, value: u32) -> Result<u32> {
    ensure!(value > 0, "Environment variable '{key}' must be greater than zero");
    Ok(value)
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
