//! Integration tests for [`tuishujun_bot::HandlerChain`].
//!
//! Covers: before/handle/after counts, before stopping the chain, Reply stopping the handle phase
//! and reaching every after in reverse order.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::text_message;
use tuishujun_bot::{Handler, HandlerChain, HandlerResponse, Message};

/// Records every phase it runs as `"<name>:<phase>"` and answers `handle` with a fixed response.
struct RecordingHandler {
    name: &'static str,
    response: HandlerResponse,
    log: Arc<Mutex<Vec<String>>>,
}

impl RecordingHandler {
    fn new(name: &'static str, response: HandlerResponse, log: Arc<Mutex<Vec<String>>>) -> Arc<Self> {
        Arc::new(Self { name, response, log })
    }

    fn push(&self, phase: &str) {
        self.log.lock().unwrap().push(format!("{}:{}", self.name, phase));
    }
}

#[async_trait]
impl Handler for RecordingHandler {
    async fn before(&self, _message: &Message) -> tuishujun_core::Result<bool> {
        self.push("before");
        Ok(true)
    }

    async fn handle(&self, _message: &Message) -> tuishujun_core::Result<HandlerResponse> {
        self.push("handle");
        Ok(self.response.clone())
    }

    async fn after(&self, _message: &Message, response: &HandlerResponse) -> tuishujun_core::Result<()> {
        self.push(&format!("after({:?})", response));
        Ok(())
    }
}

/// **Test: Reply stops the handle phase; after runs in reverse with the reply.**
#[tokio::test]
async fn test_reply_stops_chain_and_reaches_after() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(RecordingHandler::new("a", HandlerResponse::Continue, log.clone()))
        .add_handler(RecordingHandler::new("b", HandlerResponse::Reply("ok".to_string()), log.clone()))
        .add_handler(RecordingHandler::new("c", HandlerResponse::Continue, log.clone()));

    let response = chain.handle(&text_message(1, "/help")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply("ok".to_string()));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "a:before",
            "b:before",
            "c:before",
            "a:handle",
            "b:handle",
            "c:after(Reply(\"ok\"))",
            "b:after(Reply(\"ok\"))",
            "a:after(Reply(\"ok\"))",
        ]
    );
}

/// **Test: Ignore does not stop the chain; the final response stays Continue.**
#[tokio::test]
async fn test_ignore_passes_to_next_handler() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_handler(RecordingHandler::new("a", HandlerResponse::Ignore, log.clone()))
        .add_handler(RecordingHandler::new("b", HandlerResponse::Continue, log.clone()));

    let response = chain.handle(&text_message(1, "hi")).await.unwrap();

    assert_eq!(response, HandlerResponse::Continue);
    assert!(log.lock().unwrap().contains(&"b:handle".to_string()));
}

/// **Test: before returning false stops the chain; no handle runs.**
#[tokio::test]
async fn test_before_false_stops_chain() {
    struct BlockingHandler;

    #[async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> tuishujun_core::Result<bool> {
            Ok(false)
        }
    }

    struct CountingHandler(Arc<AtomicUsize>);

    #[async_trait]
    impl Handler for CountingHandler {
        async fn handle(&self, _message: &Message) -> tuishujun_core::Result<HandlerResponse> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(HandlerResponse::Continue)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(CountingHandler(handle_count.clone())));

    let response = chain.handle(&text_message(1, "/help")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}
