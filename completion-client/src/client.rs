//! Completion client: one POST per call, bearer auth, no retry.

use crate::config::CompletionConfig;
use crate::error::CompletionError;
use crate::mask_token;
use crate::types::{ChatMessage, CompletionRequest, CompletionResponse};
use tracing::debug;

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Holds a reqwest client built once at construction; every [`complete`]
/// call is a single attempt with no retry or backoff. The caller decides
/// what to do with a failure.
///
/// [`complete`]: CompletionClient::complete
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    config: CompletionConfig,
}

impl CompletionClient {
    /// Builds a client using the given config.
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends the given conversation to the completion API and returns the
    /// parsed response.
    ///
    /// Failure modes map to [`CompletionError`]: transport failures to
    /// `Transport`, non-2xx statuses to `Remote { status }` (no response
    /// object is produced), and a 2xx body with no choices to
    /// `EmptyResponse`. On Ok the `choices` list is non-empty.
    pub async fn complete(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<CompletionResponse, CompletionError> {
        let request = CompletionRequest {
            model: self.config.model.clone(),
            messages,
        };

        debug!(
            base_url = %self.config.base_url,
            model = %self.config.model,
            api_key = %mask_token(&self.config.api_key),
            message_count = request.messages.len(),
            "Sending completion request"
        );

        let response = self
            .http
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Remote {
                status: status.as_u16(),
            });
        }

        let data: CompletionResponse = response.json().await?;
        if data.choices.is_empty() {
            return Err(CompletionError::EmptyResponse);
        }

        Ok(data)
    }
}
