//! # Tuishujun bot application
//!
//! Telegram bot that looks up books on tuishujun.com. Loads config from env, authorizes the bot
//! account, then long-polls updates and handles them one at a time through a [`HandlerChain`].

pub mod chain;
pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod runner;
pub mod telegram;

pub use chain::HandlerChain;
pub use cli::{Cli, Commands};
pub use commands::{parse_command, Command, BOOK_NOT_FOUND_TEXT, HELP_TEXT};
pub use config::{BotConfig, CatalogConfig};
pub use handlers::{BookCommandHandler, LoggingHandler};
pub use runner::{build_handler_chain, lookup_once, run_bot};
pub use telegram::{
    dispatch_messages, run_polling, update_to_message, TelegramBotAdapter, TelegramMessageWrapper,
    TelegramUserWrapper, POLLING_TIMEOUT,
};

pub use tuishujun_core::{Bot, Chat, Handler, HandlerResponse, Message, User};
