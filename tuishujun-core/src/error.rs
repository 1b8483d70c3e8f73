//! Error types for the bot core.
//!
//! [`DbotError`] is the error of bot transport and startup; [`HandlerError`] covers command resolution.

use thiserror::Error;

/// Top-level error (bot transport, config).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// Errors produced by handlers (unknown or malformed commands).
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
