//! Completion API configuration, loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Config for an OpenAI-compatible completion API.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// OPENAI_API_KEY
    pub api_key: String,
    /// OPENAI_BASE_URL, without the `/chat/completions` suffix
    pub base_url: String,
    /// MODEL
    pub model: String,
}

impl CompletionConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());
        Ok(Self {
            api_key,
            base_url,
            model,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_with_defaults() {
        env::remove_var("OPENAI_API_KEY");
        env::set_var("OPENAI_API_KEY", "test_key");
        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("MODEL");

        let config = CompletionConfig::from_env().unwrap();

        assert_eq!(config.api_key, "test_key");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    #[serial]
    fn test_from_env_with_custom_values() {
        env::remove_var("OPENAI_API_KEY");
        env::set_var("OPENAI_API_KEY", "custom_key");
        env::remove_var("OPENAI_BASE_URL");
        env::set_var("OPENAI_BASE_URL", "http://localhost:9090/v1");
        env::remove_var("MODEL");
        env::set_var("MODEL", "gpt-4o-mini");

        let config = CompletionConfig::from_env().unwrap();

        assert_eq!(config.api_key, "custom_key");
        assert_eq!(config.base_url, "http://localhost:9090/v1");
        assert_eq!(config.model, "gpt-4o-mini");

        env::remove_var("OPENAI_BASE_URL");
        env::remove_var("MODEL");
    }

    #[test]
    #[serial]
    fn test_from_env_requires_api_key() {
        env::remove_var("OPENAI_API_KEY");

        assert!(CompletionConfig::from_env().is_err());
    }
}
