// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub organization: Option<String>,
    pub api_base: String,
    pub model: String,
    pub request_timeout: Option<Duration>,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load `.env` (if any) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let request_timeout = match get("OPENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                    ConfigError::Invalid {
                        key: "OPENAI_TIMEOUT_SECS",
                        value: raw.clone(),
                        reason: e.to_string(),
                    }
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let bind_raw = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_key: get("OPENAI_API_KEY"),
            organization: get("OPENAI_ORGANIZATION"),
            api_base: get("OPENAI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            request_timeout,
            bind_addr,
        })
    }
}
