//! # relay-bot
//!
//! Telegram-to-completion-API relay: one shared conversation, one handler.
//! A text message is appended to the conversation, the whole history is sent
//! to the completion API, and the first choice is relayed back to the chat.

pub mod cli;
pub mod config;
pub mod conversation;
pub mod handler;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use config::RelayConfig;
pub use conversation::Conversation;
pub use handler::RelayHandler;
pub use runner::{run_bot, run_repl};
