//! Environment configuration for the bot binary
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Initial implementation with Discord and dictionary settings

use anyhow::{anyhow, Result};
use std::time::Duration;

/// Default Urban Dictionary define endpoint
pub const DEFAULT_DEFINE_API_URL: &str = "http://api.urbandictionary.com/v0/define";

/// Default HTTP timeout for a lookup (seconds)
pub const DEFAULT_DEFINE_TIMEOUT_SECS: u64 = 10;

/// Settings handed to the lookup handler.
///
/// The handler never reads the environment itself; whoever builds it passes
/// one of these in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_DEFINE_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_DEFINE_TIMEOUT_SECS),
        }
    }
}

/// Process configuration loaded from environment variables (and `.env`)
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub discord_guild_id: Option<String>,
    pub log_level: String,
    pub define_api_url: String,
    pub define_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    fn from_source<F>(get: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = get("DISCORD_TOKEN")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DISCORD_TOKEN must be set"))?;

        let discord_guild_id = get("DISCORD_GUILD_ID").filter(|v| !v.trim().is_empty());

        let log_level = get("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        let define_api_url =
            get("DEFINE_API_URL").unwrap_or_else(|| DEFAULT_DEFINE_API_URL.to_string());
        url::Url::parse(&define_api_url)
            .map_err(|e| anyhow!("DEFINE_API_URL is not a valid URL ({define_api_url}): {e}"))?;

        let define_timeout_secs = match get("DEFINE_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(anyhow!(
                        "DEFINE_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    ))
                }
            },
            None => DEFAULT_DEFINE_TIMEOUT_SECS,
        };

        Ok(Self {
            discord_token,
            discord_guild_id,
            log_level,
            define_api_url,
            define_timeout_secs,
        })
    }

    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            endpoint: self.define_api_url.clone(),
            timeout: Duration::from_secs(self.define_timeout_secs),
        }
    }
}
