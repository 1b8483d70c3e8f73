//! HTTP client for the tuishujun.com catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::book::Book;
use crate::caption::format_caption;
use crate::error::LookupError;

/// Base path for book records; the book id is appended verbatim.
pub const DEFAULT_API_BASE: &str = "https://api.tuishujun.com/v1/books/";

/// Header carrying the catalog API token.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Default total deadline for one lookup (connect, send, and body read).
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// What the bot sends back for a book: cover image URL and HTML caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookReply {
    pub image_url: String,
    pub caption: String,
}

/// Looks up a book by id. Implemented by [`BookClient`]; tests substitute their own.
#[async_trait]
pub trait BookLookup: Send + Sync {
    async fn lookup_book(&self, book_id: &str) -> Result<BookReply, LookupError>;
}

/// Masks a token for logging: first 4 chars + `***` + last 4 chars; tokens of ≤ 11 chars become `***`.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Authenticated catalog client. Cheap to clone; the inner reqwest client is shared.
#[derive(Debug, Clone)]
pub struct BookClient {
    client: Client,
    api_token: String,
    base_url: String,
    timeout: Duration,
}

impl BookClient {
    /// Creates a client against [`DEFAULT_API_BASE`].
    pub fn new(api_token: String) -> Result<Self, LookupError> {
        Self::with_base_url(api_token, DEFAULT_API_BASE.to_string())
    }

    /// Creates a client against another base URL (mirror or test server). A trailing `/` is added if missing.
    pub fn with_base_url(api_token: String, base_url: String) -> Result<Self, LookupError> {
        Self::with_timeout(api_token, base_url, REQUEST_TIMEOUT)
    }

    /// Like [`BookClient::with_base_url`], with a custom total request deadline.
    pub fn with_timeout(
        api_token: String,
        mut base_url: String,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = Client::builder().timeout(timeout).build()?;

        info!(
            base_url = %base_url,
            api_token = %mask_token(&api_token),
            timeout_ms = timeout.as_millis() as u64,
            "Book client created"
        );

        Ok(Self {
            client,
            api_token,
            base_url,
            timeout,
        })
    }

    /// Returns the base URL book ids are appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Total deadline applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Request URL for a book id. The id is not escaped or validated.
    pub fn book_url(&self, book_id: &str) -> String {
        format!("{}{}", self.base_url, book_id)
    }

    /// Fetches and decodes one book record.
    ///
    /// # Errors
    ///
    /// - [`LookupError::Timeout`] if the request deadline (10s by default) elapses
    /// - [`LookupError::Network`] on connection or transport failure
    /// - [`LookupError::Status`] on a non-2xx response (the body is not decoded)
    /// - [`LookupError::Decode`] if the body does not match the book schema
    #[instrument(skip(self))]
    pub async fn fetch_book(&self, book_id: &str) -> Result<Book, LookupError> {
        let url = self.book_url(book_id);
        info!(url = %url, "step: catalog request");

        let response = self
            .client
            .get(&url)
            .header(AUTH_HEADER, &self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, url = %url, "Catalog returned non-success status");
            return Err(LookupError::Status(status));
        }

        let body = response.bytes().await?;
        let book: Book = serde_json::from_slice(&body)?;

        info!(
            book_id = book.id,
            book_name = %book.name,
            tag_count = book.tags.len(),
            "step: catalog request done"
        );
        Ok(book)
    }
}

#[async_trait]
impl BookLookup for BookClient {
    async fn lookup_book(&self, book_id: &str) -> Result<BookReply, LookupError> {
        let book = self.fetch_book(book_id).await?;
        Ok(BookReply {
            caption: format_caption(&book),
            image_url: book.image_url,
        })
    }
}
