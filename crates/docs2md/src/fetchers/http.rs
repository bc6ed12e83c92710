//! HTTP fetcher
//!
//! Plain GET over reqwest. Any non-2xx status is an error, and the body is
//! streamed and decoded as (lossy) UTF-8.

use crate::config::Config;
use crate::error::FetchError;
use crate::fetchers::Fetcher;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use tracing::debug;
use url::Url;

/// Accept header: documentation pages first, then OpenAPI JSON
const ACCEPT_VALUE: &str = "text/html, application/xhtml+xml, application/json;q=0.9, */*;q=0.8";

/// Fetcher backed by a shared reqwest client
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the User-Agent and timeout from `config`
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static(crate::DEFAULT_USER_AGENT)),
        );
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::ClientBuildError)?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrlScheme)?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrlScheme);
        }

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = read_body(url, response).await?;
        debug!(url, status = status.as_u16(), size = body.len(), "Fetched page");

        Ok(String::from_utf8_lossy(&body).into_owned())
    }
}

/// Read the whole response body
async fn read_body(url: &str, response: reqwest::Response) -> Result<Bytes, FetchError> {
    let mut body = BytesMut::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| FetchError::from_reqwest(url, e))?;
        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
