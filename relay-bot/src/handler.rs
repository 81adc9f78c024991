//! Relay handler: appends the user message, calls the completion API with the
//! full history, and sends the first choice back to the originating chat.

use completion_client::{ChatMessage, CompletionClient, CompletionError};
use relay_core::{Bot, Message, Result};
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::conversation::Conversation;

/// Raw text that clears the shared history. Case-sensitive, matched before
/// the empty-text check, so `"  Clear "` is an ordinary message.
pub const RESET_COMMAND: &str = "Clear";

/// Handles one inbound text message end to end.
///
/// Completion failures and send failures are logged and swallowed; the chat
/// user never sees an error and the process never dies on one. A failed
/// completion leaves the user message in history, so the next turn carries
/// it as context.
#[derive(Clone)]
pub struct RelayHandler {
    bot: Arc<dyn Bot>,
    client: CompletionClient,
    conversation: Conversation,
}

impl RelayHandler {
    pub fn new(bot: Arc<dyn Bot>, client: CompletionClient, conversation: Conversation) -> Self {
        Self {
            bot,
            client,
            conversation,
        }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<()> {
        let text = message.content.as_str();

        if text == RESET_COMMAND {
            self.conversation.clear().await;
            info!(chat_id = message.chat.id, "Conversation history cleared");
            return Ok(());
        }

        if text.trim().is_empty() {
            return Ok(());
        }

        // Append raw text; the lock is released before the network call.
        self.conversation.append(ChatMessage::user(text)).await;
        let snapshot = self.conversation.snapshot().await;

        let response = match self.client.complete(snapshot).await {
            Ok(response) => response,
            Err(err) => {
                self.log_completion_error(&err);
                return Ok(());
            }
        };

        // complete() guarantees a non-empty choices list; only index 0 is used.
        let choice = &response.choices[0];
        let assistant_message = choice.message.clone();
        let reply = format!(
            "{}\n{}",
            assistant_message.content.trim(),
            response.usage.total_tokens
        );

        // Stored as returned (untrimmed); only the outbound reply is trimmed.
        self.conversation.append(assistant_message).await;

        info!(
            chat_id = message.chat.id,
            total_tokens = response.usage.total_tokens,
            finish_reason = %choice.finish_reason,
            "Sending completion reply"
        );

        if let Err(e) = self.bot.send_message(&message.chat, &reply).await {
            error!(error = %e, chat_id = message.chat.id, "Failed to send reply");
        }

        Ok(())
    }

    /// One log line per taxonomy entry; nothing reaches the chat user.
    fn log_completion_error(&self, err: &CompletionError) {
        match err {
            CompletionError::Transport(cause) => {
                error!(cause = %cause, "Completion request failed in transport");
            }
            CompletionError::Remote { status } => {
                error!(status = status, "Completion API returned an error status");
            }
            CompletionError::EmptyResponse => {
                error!("No choices were returned by the API");
            }
        }
    }
}
