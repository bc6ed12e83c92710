//! Run orchestration
//!
//! APIs are processed one at a time: fetch the page, convert it, save it,
//! then try the OpenAPI spec. A failing API is logged and recorded in the
//! [`RunReport`]; it never stops the run. Index files are written last and
//! their failures are fatal.

use crate::catalog::{self, ApiEntry};
use crate::config::Config;
use crate::convert::html_to_markdown;
use crate::error::Error;
use crate::fetchers::{Fetcher, HttpFetcher};
use crate::index::{render_category_index, render_main_readme};
use crate::openapi::fetch_openapi;
use crate::storage::save_file;
use crate::types::{ApiOutcome, RunReport};
use chrono::Local;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Drives fetching, conversion and writing for a list of APIs
pub struct Scraper {
    config: Config,
    fetcher: Box<dyn Fetcher>,
}

impl Scraper {
    /// Create a scraper using a custom fetcher
    pub fn new(config: Config, fetcher: impl Fetcher + 'static) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
        }
    }

    /// Create a scraper that fetches over HTTP
    pub fn from_config(config: Config) -> Result<Self, Error> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::new(config, fetcher))
    }

    /// Process every API in `apis`, then write the index files
    pub async fn run(&self, apis: &[ApiEntry]) -> Result<RunReport, Error> {
        info!(
            apis = apis.len(),
            output_dir = %self.config.output_dir.display(),
            fetcher = self.fetcher.name(),
            "Starting documentation scrape"
        );

        let mut report = RunReport::default();
        for api in apis {
            report.apis.push(self.process_api(api).await);
        }

        report.indexes = self.write_indexes(apis).await?;

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            openapi = report.openapi_saved(),
            "Documentation scrape completed"
        );
        Ok(report)
    }

    /// Fetch, convert and save one API, then its OpenAPI spec
    ///
    /// Errors are logged and recorded in the returned outcome.
    pub async fn process_api(&self, api: &ApiEntry) -> ApiOutcome {
        info!(api = api.name, "Processing API");
        let mut outcome = ApiOutcome::new(api);

        match self.save_documentation(api).await {
            Ok(path) => outcome.doc_path = Some(path),
            Err(e) => {
                error!(api = api.name, error = %e, "Failed to process API");
                outcome.error = Some(e.to_string());
                return outcome;
            }
        }

        match self.save_openapi(api).await {
            Ok(path) => outcome.openapi_path = Some(path),
            Err(e) => {
                warn!(api = api.name, error = %e, "Could not fetch OpenAPI spec");
                outcome.openapi_error = Some(e.to_string());
            }
        }

        info!(api = api.name, "Completed API");
        outcome
    }

    async fn save_documentation(&self, api: &ApiEntry) -> Result<PathBuf, Error> {
        let url = self.config.doc_url(api);
        let html = self.fetcher.fetch_text(&url).await?;
        let markdown = html_to_markdown(&html);

        let path = self.config.doc_path(api);
        save_file(&markdown, &path).await?;
        Ok(path)
    }

    async fn save_openapi(&self, api: &ApiEntry) -> Result<PathBuf, Error> {
        let spec = fetch_openapi(&*self.fetcher, &self.config, api.name).await?;

        let path = self.config.openapi_path(api);
        save_file(&spec, &path).await?;
        Ok(path)
    }

    /// Write one index per category of `apis` plus the top-level README
    pub async fn write_indexes(&self, apis: &[ApiEntry]) -> Result<Vec<PathBuf>, Error> {
        let mut written = Vec::new();

        for category in catalog::categories(apis) {
            let path = self.config.category_index_path(category);
            save_file(&render_category_index(category, apis), &path).await?;
            written.push(path);
        }

        let readme = render_main_readme(
            apis,
            &self.config.base_url,
            Local::now().naive_local(),
        );
        let path = self.config.readme_path();
        save_file(&readme, &path).await?;
        written.push(path);

        Ok(written)
    }
}
