//! Page fetching
//!
//! Design: the orchestrator only needs "URL in, body text out", so fetching
//! sits behind the [`Fetcher`] trait. [`HttpFetcher`] is the real
//! implementation; tests plug in in-memory fetchers.

mod http;

pub use http::HttpFetcher;

use crate::error::FetchError;
use async_trait::async_trait;

/// Source of page bodies
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Identifier for logging
    fn name(&self) -> &'static str;

    /// Fetch `url` and return its body as text
    ///
    /// Must fail when the request does not complete with a success status.
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

#[async_trait]
impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch_text(url).await
    }
}
