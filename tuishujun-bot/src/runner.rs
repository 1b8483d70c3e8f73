//! Startup wiring: build the teloxide bot, authorize it, build the catalog client and handler chain,
//! then run the polling loop.

use std::sync::Arc;

use anyhow::{Context, Result};
use teloxide::requests::Requester;
use tracing::{info, instrument};
use tuishujun_client::{mask_token, BookClient, BookLookup};
use tuishujun_core::Bot;

use crate::chain::HandlerChain;
use crate::config::{BotConfig, CatalogConfig};
use crate::handlers::{BookCommandHandler, LoggingHandler};
use crate::telegram::{run_polling, TelegramBotAdapter};

/// Logging first, then command routing.
pub fn build_handler_chain(bot: Arc<dyn Bot>, lookup: Arc<dyn BookLookup>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(BookCommandHandler::new(bot, lookup)))
}

fn build_teloxide_bot(config: &BotConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match &config.telegram_api_url {
        Some(url) => {
            let url = reqwest::Url::parse(url).context("Invalid TELEGRAM_API_URL")?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Main entry: validate config, authorize the bot account (fatal on failure), then poll forever.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    info!(
        bot_token = %mask_token(&config.bot_token),
        telegram_api_url = ?config.telegram_api_url,
        api_base_url = %config.catalog.api_base_url,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config)?;
    let me = teloxide_bot
        .get_me()
        .await
        .context("Failed to authorize bot account")?;
    info!(
        "Authorized on account {}",
        me.user.username.as_deref().unwrap_or("unknown")
    );

    let book_client = BookClient::with_base_url(
        config.catalog.api_token.clone(),
        config.catalog.api_base_url.clone(),
    )?;
    let handler_chain = build_handler_chain(
        Arc::new(TelegramBotAdapter::new(teloxide_bot.clone())),
        Arc::new(book_client),
    );

    info!("Bot started successfully");

    run_polling(teloxide_bot, handler_chain).await
}

/// One-off lookup for the CLI; prints the image URL and caption.
#[instrument(skip(config))]
pub async fn lookup_once(config: CatalogConfig, book_id: &str) -> Result<()> {
    config.validate()?;
    let client = BookClient::with_base_url(config.api_token, config.api_base_url)?;
    let reply = client
        .lookup_book(book_id)
        .await
        .with_context(|| format!("Unable to find book {:?}", book_id))?;

    println!("{}", reply.image_url);
    println!("{}", reply.caption);
    Ok(())
}
