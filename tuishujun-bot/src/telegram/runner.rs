//! Polling loop: long-polls Telegram updates, converts text messages to core::Message and runs the
//! HandlerChain on each one in delivery order. The next update is not taken until the current one
//! (lookup and reply included) has been fully handled.

use std::time::Duration;

use anyhow::Result;
use futures::{future, Stream, StreamExt};
use teloxide::{
    types::{Update, UpdateKind},
    update_listeners::{AsUpdateStream, Polling},
};
use tracing::{debug, error, info, instrument, warn};
use tuishujun_core::{Message as CoreMessage, ToCoreMessage};

use super::adapters::TelegramMessageWrapper;
use crate::chain::HandlerChain;

/// Long-poll timeout for getUpdates.
pub const POLLING_TIMEOUT: Duration = Duration::from_secs(60);

/// Converts an update to a core message. Non-message updates and messages without text yield None.
pub fn update_to_message(update: Update) -> Option<CoreMessage> {
    match update.kind {
        UpdateKind::Message(msg) => {
            if msg.text().is_none() {
                info!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
                return None;
            }
            Some(TelegramMessageWrapper(&msg).to_core())
        }
        _ => {
            debug!(update_id = update.id.0, "Ignoring non-message update");
            None
        }
    }
}

/// Handles messages one at a time, in order. Chain errors are logged and the loop continues.
pub async fn dispatch_messages<S>(messages: S, chain: &HandlerChain)
where
    S: Stream<Item = CoreMessage>,
{
    futures::pin_mut!(messages);
    while let Some(message) = messages.next().await {
        debug!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "step: handling message"
        );
        if let Err(e) = chain.handle(&message).await {
            error!(error = %e, user_id = message.user.id, chat_id = message.chat.id, "Handler chain failed");
        }
    }
}

/// Long-polls `bot` and feeds text messages to `chain` until the update stream ends.
#[instrument(skip(bot, chain))]
pub async fn run_polling(bot: teloxide::Bot, chain: HandlerChain) -> Result<()> {
    let mut listener = Polling::builder(bot).timeout(POLLING_TIMEOUT).build();

    info!(timeout_secs = POLLING_TIMEOUT.as_secs(), "Polling for updates");

    let messages = listener.as_stream().filter_map(|update| {
        future::ready(match update {
            Ok(update) => update_to_message(update),
            Err(e) => {
                warn!(error = %e, "Failed to fetch updates");
                None
            }
        })
    });
    dispatch_messages(messages, &chain).await;

    info!("Update stream ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_from_json(value: serde_json::Value) -> Update {
        // teloxide's Update deserializer only handles the raw-string path, not serde_json::Value.
        serde_json::from_str(&value.to_string()).expect("valid Telegram update JSON")
    }

    #[test]
    fn test_text_message_update_is_converted() {
        let update = update_from_json(serde_json::json!({
            "update_id": 1,
            "message": {
                "message_id": 10,
                "date": 1706529600,
                "chat": {"id": 99, "type": "private", "first_name": "Li"},
                "from": {"id": 5, "is_bot": false, "first_name": "Li"},
                "text": "/help"
            }
        }));

        let message = update_to_message(update).expect("text message");

        assert_eq!(message.chat.id, 99);
        assert_eq!(message.content, "/help");
    }

    #[test]
    fn test_message_without_text_is_dropped() {
        let update = update_from_json(serde_json::json!({
            "update_id": 2,
            "message": {
                "message_id": 11,
                "date": 1706529600,
                "chat": {"id": 99, "type": "private", "first_name": "Li"},
                "from": {"id": 5, "is_bot": false, "first_name": "Li"},
                "location": {"latitude": 31.23, "longitude": 121.47}
            }
        }));

        assert!(update_to_message(update).is_none());
    }

    #[test]
    fn test_edited_message_update_is_dropped() {
        let update = update_from_json(serde_json::json!({
            "update_id": 3,
            "edited_message": {
                "message_id": 12,
                "date": 1706529600,
                "edit_date": 1706529700,
                "chat": {"id": 99, "type": "private", "first_name": "Li"},
                "from": {"id": 5, "is_bot": false, "first_name": "Li"},
                "text": "/help"
            }
        }));

        assert!(update_to_message(update).is_none());
    }
}
