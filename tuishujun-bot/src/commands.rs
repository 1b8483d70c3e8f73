//! Bot commands: `/help` and `/book <id>`.

use tuishujun_core::HandlerError;

/// Reply to `/help`.
pub const HELP_TEXT: &str = "I can help you to get book info from tuishujun.com.\n\
You can control me by sending these commands:\n\
\n\
/book <id> - look up a book by its tuishujun id\n\
/help - show this message\n";

/// Reply for any failed lookup, whatever the cause.
pub const BOOK_NOT_FOUND_TEXT: &str = "Unable to find book";

/// A recognized command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Raw argument text, unvalidated; may be empty.
    Book(String),
}

impl Command {
    /// Resolves a command name (without `/` or `@bot`) and its argument text.
    pub fn from_parts(name: &str, args: &str) -> Result<Self, HandlerError> {
        match name {
            "help" => Ok(Command::Help),
            "book" => Ok(Command::Book(args.to_string())),
            other => Err(HandlerError::InvalidCommand(other.to_string())),
        }
    }
}

/// Splits `/name@bot args` into `("name", "args")`. Returns None when `text` is not a command.
///
/// The command token ends at the first char outside `[A-Za-z0-9_@]`, the way Telegram delimits a
/// `bot_command` entity. The argument is everything after the single separator char that follows
/// the token, kept raw.
pub fn parse_command(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix('/')?;
    let (token, tail) = match rest.find(|c: char| !is_command_char(c)) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };
    let name = token.split('@').next().unwrap_or(token);

    let mut tail_chars = tail.chars();
    tail_chars.next();
    Some((name, tail_chars.as_str()))
}

fn is_command_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '@'
}
