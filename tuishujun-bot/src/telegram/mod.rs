//! Telegram layer: teloxide → core conversions, [`TelegramBotAdapter`], and the polling loop.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use runner::{dispatch_messages, run_polling, update_to_message, POLLING_TIMEOUT};
