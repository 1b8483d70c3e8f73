//! Command handler: `/help` replies with the help text, `/book <id>` looks the book up and replies
//! with its cover and caption, or with [`BOOK_NOT_FOUND_TEXT`] on any lookup failure.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};
use tuishujun_client::BookLookup;
use tuishujun_core::{Bot, Handler, HandlerResponse, Message, Result};

use crate::commands::{parse_command, Command, BOOK_NOT_FOUND_TEXT, HELP_TEXT};

/// Routes recognized commands; everything else is ignored without a reply.
#[derive(Clone)]
pub struct BookCommandHandler {
    bot: Arc<dyn Bot>,
    lookup: Arc<dyn BookLookup>,
}

impl BookCommandHandler {
    pub fn new(bot: Arc<dyn Bot>, lookup: Arc<dyn BookLookup>) -> Self {
        Self { bot, lookup }
    }

    /// Sends `text` to the message's chat. Send failures are logged, not retried.
    async fn send_text(&self, message: &Message, text: &str) -> HandlerResponse {
        if let Err(e) = self.bot.reply_to(message, text).await {
            error!(chat_id = message.chat.id, error = %e, "Failed to send text reply");
        }
        HandlerResponse::Reply(text.to_string())
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle_book(&self, message: &Message, book_id: &str) -> HandlerResponse {
        let reply = match self.lookup.lookup_book(book_id).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(
                    book_id = %book_id,
                    network = e.is_network(),
                    error = %e,
                    "Book lookup failed"
                );
                return self.send_text(message, BOOK_NOT_FOUND_TEXT).await;
            }
        };

        match self
            .bot
            .send_photo(&message.chat, &reply.image_url, Some(&reply.caption))
            .await
        {
            Ok(()) => info!(book_id = %book_id, image_url = %reply.image_url, "Sent book"),
            Err(e) => error!(
                book_id = %book_id,
                image_url = %reply.image_url,
                error = %e,
                "Failed to send book photo"
            ),
        }
        HandlerResponse::Reply(reply.caption)
    }
}

#[async_trait]
impl Handler for BookCommandHandler {
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some((name, args)) = parse_command(&message.content) else {
            return Ok(HandlerResponse::Ignore);
        };

        let command = match Command::from_parts(name, args) {
            Ok(command) => command,
            Err(e) => {
                debug!(chat_id = message.chat.id, error = %e, "Ignoring command");
                return Ok(HandlerResponse::Ignore);
            }
        };

        let response = match command {
            Command::Help => self.send_text(message, HELP_TEXT).await,
            Command::Book(book_id) => self.handle_book(message, &book_id).await,
        };
        Ok(response)
    }
}
