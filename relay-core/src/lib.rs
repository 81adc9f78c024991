//! # relay-core
//!
//! Core types and traits for the relay bot: [`Bot`], message and user types,
//! and tracing initialization. Transport-agnostic; used by relay-bot.

pub mod adapters;
pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot::{Bot, TelegramBot};
pub use error::{RelayError, Result};
pub use logger::init_tracing;
pub use types::{Chat, Message, ToCoreMessage, ToCoreUser, User};
