//! Bot configuration, loaded once from the environment at startup and never mutated.
//!
//! Required: `TUISHUJUN_BOT_TOKEN`, `TUISHUJUN_API_TOKEN`. Optional: `TUISHUJUN_API_URL`,
//! `TELEGRAM_API_URL` (or `TELOXIDE_API_URL`), `LOG_FILE`.

use std::env;

use tuishujun_client::DEFAULT_API_BASE;
use tuishujun_core::{DbotError, Result};

pub const ENV_BOT_TOKEN: &str = "TUISHUJUN_BOT_TOKEN";
pub const ENV_API_TOKEN: &str = "TUISHUJUN_API_TOKEN";
pub const ENV_API_URL: &str = "TUISHUJUN_API_URL";
pub const DEFAULT_LOG_FILE: &str = "logs/tuishujun-bot.log";

/// Catalog API settings: token for the `x-auth-token` header and base URL.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub api_token: String,
    pub api_base_url: String,
}

impl CatalogConfig {
    /// Loads from env. `TUISHUJUN_API_TOKEN` is required.
    pub fn load() -> Result<Self> {
        let api_token = required_var(ENV_API_TOKEN)?;
        let api_base_url = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Ok(Self {
            api_token,
            api_base_url,
        })
    }

    /// The base URL must parse as a URL.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_base_url).is_err() {
            return Err(DbotError::Config(format!(
                "{} is not a valid URL: {}",
                ENV_API_URL, self.api_base_url
            )));
        }
        Ok(())
    }
}

/// Full bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// TUISHUJUN_BOT_TOKEN (or the CLI override)
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL; points teloxide at another Bot API server
    pub telegram_api_url: Option<String>,
    /// LOG_FILE
    pub log_file: String,
    pub catalog: CatalogConfig,
}

impl BotConfig {
    /// Loads from environment variables. `token` overrides `TUISHUJUN_BOT_TOKEN` if provided.
    ///
    /// The bot token is checked before the API token; either one missing (or empty) is a config error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) if !t.is_empty() => t,
            _ => required_var(ENV_BOT_TOKEN)?,
        };
        let catalog = CatalogConfig::load()?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file: log_file_from_env(),
            catalog,
        })
    }

    /// Validate config (URLs must parse if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(DbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        self.catalog.validate()
    }
}

/// Log file path from `LOG_FILE`, default `logs/tuishujun-bot.log`. Read before the rest of the
/// config so that config errors can be logged.
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(DbotError::Config(format!("{} not set", name))),
    }
}
