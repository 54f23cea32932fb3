use std::time::Duration;

use url::Url;

use crate::errors::{AppError, AppResult};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: Option<Url>,
    pub timeout: Duration,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> AppResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let feed_url = lookup("FEED_URL")
            .filter(|value| !value.trim().is_empty())
            .map(|value| {
                Url::parse(value.trim()).map_err(|e| AppError::InvalidUrl(format!("{}: {}", value, e)))
            })
            .transpose()?;

        let timeout_secs = match lookup("FEED_TIMEOUT_SECS") {
            Some(value) => parse_timeout_secs(&value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            feed_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// The feed URL given on the command line wins over `FEED_URL`.
    pub fn resolve_feed_url(&self, arg: Option<&str>) -> AppResult<Url> {
        match arg {
            Some(raw) => {
                Url::parse(raw).map_err(|e| AppError::InvalidUrl(format!("{}: {}", raw, e)))
            }
            None => self
                .feed_url
                .clone()
                .ok_or_else(|| AppError::MissingEnvVar("FEED_URL".to_string())),
        }
    }
}

pub fn parse_timeout_secs(value: &str) -> AppResult<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(AppError::Config(format!(
            "FEED_TIMEOUT_SECS must be a positive number of seconds, got '{}'",
            value
        ))),
    }
}
