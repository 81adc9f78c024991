//! Runner: builds the bot from config and drives the teloxide REPL.
//!
//! Each teloxide message is converted to a core Message and handled inline,
//! so one update's state mutations complete before the next one's begin.

use anyhow::Result;
use completion_client::{mask_token, CompletionClient};
use relay_core::{init_tracing, Bot as CoreBot, TelegramBot, TelegramMessageWrapper, ToCoreMessage};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::config::RelayConfig;
use crate::conversation::Conversation;
use crate::handler::RelayHandler;

/// Builds the teloxide bot, honoring a custom API URL when configured
/// (mock servers in tests point TELEGRAM_API_URL at themselves).
fn build_teloxide_bot(config: &RelayConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}

/// Main entry: validate config, init logging, wire the handler, run the REPL.
/// Blocks until the update stream itself completes (Ctrl-C via teloxide).
#[instrument(skip(config))]
pub async fn run_bot(config: RelayConfig) -> Result<()> {
    config.validate()?;
    if let Some(parent) = Path::new(&config.log_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    init_tracing(config.log_file.as_str())?;

    info!(
        base_url = %config.completion.base_url,
        model = %config.completion.model,
        api_key = %mask_token(&config.completion.api_key),
        "Initializing relay bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBot::from_teloxide(teloxide_bot.clone()));
    let client = CompletionClient::new(config.completion.clone());
    let conversation = Conversation::new();
    let handler = RelayHandler::new(bot, client, conversation);

    info!("Relay bot started successfully");

    run_repl(teloxide_bot, handler).await?;

    Ok(())
}

/// Starts the REPL with the given teloxide Bot and handler.
/// Each message is converted to a core Message and awaited to completion
/// before teloxide delivers the next one; non-text updates are ignored.
#[instrument(skip(bot, handler))]
pub async fn run_repl(bot: teloxide::Bot, handler: RelayHandler) -> Result<()> {
    teloxide::repl(
        bot,
        move |_bot: teloxide::Bot, msg: teloxide::types::Message| {
            let handler = handler.clone();

            async move {
                let wrapper = TelegramMessageWrapper(&msg);
                let core_msg = wrapper.to_core();

                match msg.text() {
                    Some(text) => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            message_content = %text,
                            "Received message"
                        );
                    }
                    None => {
                        info!(
                            user_id = core_msg.user.id,
                            chat_id = core_msg.chat.id,
                            "Received non-text message, ignoring"
                        );
                        return Ok(());
                    }
                }

                if let Err(e) = handler.handle(&core_msg).await {
                    error!(error = %e, user_id = core_msg.user.id, "Relay handler failed");
                }

                Ok(())
            }
        },
    )
    .await;

    Ok(())
}
