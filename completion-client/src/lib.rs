//! # completion-client
//!
//! Client for an OpenAI-compatible chat-completion API: wire types, a single
//! POST per call, env-based config, and token masking for safe logging.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::CompletionClient;
pub use config::CompletionConfig;
pub use error::CompletionError;
pub use types::{ChatMessage, Choice, CompletionRequest, CompletionResponse, Role, Usage};

/// Masks a bearer token for log output: the first 7 and last 4 characters
/// stay visible with `***` between them. Tokens of 11 characters or fewer
/// become `***` outright, so no part of a short key leaks. Counts
/// characters, not bytes, so a multibyte key cannot split a boundary.
pub fn mask_token(token: &str) -> String {
    const HEAD: usize = 7;
    const TAIL: usize = 4;

    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= HEAD + TAIL {
        return "***".to_string();
    }
    let head: String = chars[..HEAD].iter().collect();
    let tail: String = chars[chars.len() - TAIL..].iter().collect();
    format!("{}***{}", head, tail)
}
