//! # tuishujun-client
//!
//! Client for the tuishujun.com book catalog API.
//!
//! - [`Book`]: the record returned by `GET /v1/books/{id}`.
//! - [`BookClient`]: authenticated reqwest client (10s timeout) implementing [`BookLookup`].
//! - [`format_caption`]: Telegram HTML caption for a book.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tuishujun_client::{BookClient, BookLookup};
//!
//! async fn example() -> Result<(), tuishujun_client::LookupError> {
//!     let client = BookClient::new("api-token".to_string())?;
//!     let reply = client.lookup_book("42").await?;
//!     println!("{}\n{}", reply.image_url, reply.caption);
//!     Ok(())
//! }
//! ```

mod book;
mod caption;
mod client;
mod error;

pub use book::{Book, Tag};
pub use caption::{format_caption, MAX_CAPTION_CHARS, MAX_FIELD_CHARS, MAX_TAG_LINE_CHARS};
pub use client::{
    mask_token, BookClient, BookLookup, BookReply, AUTH_HEADER, DEFAULT_API_BASE, REQUEST_TIMEOUT,
};
pub use error::LookupError;
