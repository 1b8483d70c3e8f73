//! Handler implementations: message logging and the `/help` / `/book` commands.

mod book_command;
mod logging;

pub use book_command::BookCommandHandler;
pub use logging::LoggingHandler;
