//! # tuishujun-core
//!
//! Core types and traits for the book-lookup bot: [`Bot`], [`Handler`], message and user types,
//! errors and tracing initialization. Transport-agnostic; the Telegram side lives in `tuishujun-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{DbotError, HandlerError, Result};
pub use logger::{init_tracing, open_log_file, LogOutput};
pub use types::{Chat, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User};
