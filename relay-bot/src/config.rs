//! Relay config: Telegram connection, logging, and the completion API.
//! Loaded from env; tokens are never hard-coded.

use anyhow::{Context, Result};
use completion_client::CompletionConfig;
use std::env;

/// Full config for the relay bot.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL (mock servers in tests)
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// Completion API config (OPENAI_API_KEY, OPENAI_BASE_URL, MODEL)
    pub completion: CompletionConfig,
}

impl RelayConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/relay-bot.log".to_string());
        let completion = CompletionConfig::from_env()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            completion,
        })
    }

    /// Validate config (e.g. telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}
