//! OpenAPI spec lookup
//!
//! The site does not publish a single location for OpenAPI specs, so a
//! fixed list of candidate URLs is probed in order.

use crate::config::Config;
use crate::error::FetchError;
use crate::fetchers::Fetcher;
use tracing::debug;

/// Candidate spec URLs for `api_name`, in probing order
pub fn candidate_urls(config: &Config, api_name: &str) -> Vec<String> {
    let root = config.api_root();
    vec![
        format!("{root}/search/{api_name}/openapi.json"),
        format!("{root}/navigation/{api_name}/openapi.json"),
        format!("{root}/{api_name}/openapi.json"),
    ]
}

/// Fetch the OpenAPI spec of `api_name`
///
/// Returns the body of the first candidate that answers successfully;
/// later candidates are not requested. Fails with
/// [`FetchError::OpenApiNotFound`] once every candidate has failed.
pub async fn fetch_openapi<F: Fetcher + ?Sized>(
    fetcher: &F,
    config: &Config,
    api_name: &str,
) -> Result<String, FetchError> {
    probe(fetcher, &candidate_urls(config, api_name), api_name).await
}

/// Try `candidates` in order, returning the first successful body
pub async fn probe<F: Fetcher + ?Sized>(
    fetcher: &F,
    candidates: &[String],
    api_name: &str,
) -> Result<String, FetchError> {
    for url in candidates {
        match fetcher.fetch_text(url).await {
            Ok(body) => {
                debug!(api = api_name, url = %url, "Found OpenAPI spec");
                return Ok(body);
            }
            Err(e) => {
                debug!(api = api_name, url = %url, error = %e, "OpenAPI candidate failed");
            }
        }
    }

    Err(FetchError::OpenApiNotFound {
        api: api_name.to_string(),
    })
}
