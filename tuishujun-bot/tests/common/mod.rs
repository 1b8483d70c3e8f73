//! Shared test doubles: a [`MockBot`] that records every outbound send and a [`MockLookup`] that
//! records book ids and returns a canned result after an optional delay.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::StatusCode;
use tuishujun_bot::{Bot, Chat, Message, User};
use tuishujun_client::{BookLookup, BookReply, LookupError};
use tuishujun_core::{DbotError, Result};

/// One recorded outbound send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, image_url: String, caption: Option<String> },
}

/// Mock Bot that records sends in order. With `fail_sends`, every send returns an error after being recorded.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
    fail_sends: bool,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            fail_sends: true,
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, sent: Sent) -> Result<()> {
        self.sent.lock().unwrap().push(sent);
        if self.fail_sends {
            Err(DbotError::Bot("chat not found".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_photo(&self, chat: &Chat, image_url: &str, caption: Option<&str>) -> Result<()> {
        self.record(Sent::Photo {
            chat_id: chat.id,
            image_url: image_url.to_string(),
            caption: caption.map(str::to_string),
        })
    }
}

/// Which result the mock lookup produces.
#[derive(Clone)]
pub enum LookupOutcome {
    Found(BookReply),
    NotFound,
    BadJson,
}

/// Mock lookup that records every requested id.
pub struct MockLookup {
    outcome: LookupOutcome,
    delay: Duration,
    calls: Mutex<Vec<String>>,
}

impl MockLookup {
    pub fn new(outcome: LookupOutcome) -> Arc<Self> {
        Self::with_delay(outcome, Duration::ZERO)
    }

    pub fn with_delay(outcome: LookupOutcome, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            delay,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BookLookup for MockLookup {
    async fn lookup_book(&self, book_id: &str) -> std::result::Result<BookReply, LookupError> {
        self.calls.lock().unwrap().push(book_id.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.outcome {
            LookupOutcome::Found(reply) => Ok(reply.clone()),
            LookupOutcome::NotFound => Err(LookupError::Status(StatusCode::NOT_FOUND)),
            LookupOutcome::BadJson => Err(serde_json::from_str::<serde_json::Value>("{")
                .unwrap_err()
                .into()),
        }
    }
}

pub fn sample_reply() -> BookReply {
    BookReply {
        image_url: "https://img.tuishujun.com/1.jpg".to_string(),
        caption: "简介\n<pre>作者: 猫腻  状态: 完本 字数: 12 万</pre>\n".to_string(),
    }
}

/// Builds a core text message from chat `chat_id`.
pub fn text_message(chat_id: i64, content: &str) -> Message {
    Message {
        id: "1".to_string(),
        user: User {
            id: 7,
            username: Some("reader".to_string()),
            first_name: Some("Li".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: chat_id,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
