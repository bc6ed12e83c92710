//! Run configuration
//!
//! Every setting has a default and can be overridden from the environment
//! via [`Config::from_env`]. The CLI layers its flags on top.

use crate::catalog::{ApiEntry, Category};
use crate::error::Error;
use crate::DEFAULT_USER_AGENT;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "./docs";

/// Default documentation site
pub const DEFAULT_BASE_URL: &str = "https://docs.2gis.com";

/// Default documentation locale
pub const DEFAULT_LOCALE: &str = "ru";

/// Default transport timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for a scraping run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the generated documentation tree
    pub output_dir: PathBuf,
    /// Documentation site, without trailing slash
    pub base_url: String,
    /// Locale segment of documentation URLs
    pub locale: String,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Transport timeout for a single request
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Reads `OUTPUT_DIR`, `BASE_URL`, `DOCS_LOCALE` and
    /// `REQUEST_TIMEOUT_SECS`; unset or empty variables keep their defaults.
    /// The result is not validated, so callers can apply overrides first and
    /// then call [`Config::validate`].
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(dir) = var("OUTPUT_DIR") {
            config = config.with_output_dir(dir);
        }
        if let Some(url) = var("BASE_URL") {
            config = config.with_base_url(url);
        }
        if let Some(locale) = var("DOCS_LOCALE") {
            config = config.with_locale(locale);
        }
        if let Some(secs) = var("REQUEST_TIMEOUT_SECS") {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!("REQUEST_TIMEOUT_SECS must be a number, got {secs}"))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Set the documentation site; a trailing slash is ignored
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the locale segment
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the User-Agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the transport timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check that the base URL is an http(s) URL
    pub fn validate(&self) -> Result<(), Error> {
        let parsed = Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("invalid base URL {}: {}", self.base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "base URL must use http or https: {}",
                self.base_url
            )));
        }
        if self.locale.is_empty() || self.locale.contains('/') {
            return Err(Error::Config(format!("invalid locale: {:?}", self.locale)));
        }
        Ok(())
    }

    /// Root of the API section of the site, e.g. `https://docs.2gis.com/ru/api`
    pub fn api_root(&self) -> String {
        format!("{}/{}/api", self.base_url, self.locale)
    }

    /// Documentation page URL of an API
    pub fn doc_url(&self, api: &ApiEntry) -> String {
        format!("{}/{}", self.api_root(), api.path)
    }

    /// `<out>/<category>/<name>-api.md`
    pub fn doc_path(&self, api: &ApiEntry) -> PathBuf {
        self.output_dir
            .join(api.category.slug())
            .join(format!("{}-api.md", api.name))
    }

    /// `<out>/openapi/<category>/<name>.json`
    pub fn openapi_path(&self, api: &ApiEntry) -> PathBuf {
        self.output_dir
            .join("openapi")
            .join(api.category.slug())
            .join(format!("{}.json", api.name))
    }

    /// `<out>/<category>/README.md`
    pub fn category_index_path(&self, category: Category) -> PathBuf {
        self.output_dir.join(category.slug()).join("README.md")
    }

    /// `<out>/README.md`
    pub fn readme_path(&self) -> PathBuf {
        self.output_dir.join("README.md")
    }
}
