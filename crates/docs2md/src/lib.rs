//! docs2md - API documentation scraper
//!
//! Fetches the documentation pages of a fixed catalog of APIs, converts
//! their HTML to markdown and writes them, together with any OpenAPI specs
//! that can be found, into an output directory with generated indexes.
//!
//! ## Pipeline
//!
//! - [`Fetcher`] - page source; [`HttpFetcher`] fetches over HTTP
//! - [`html_to_markdown`] - ordered regex rules turning HTML into markdown
//! - [`save_file`] - writes output, creating directories as needed
//! - [`Scraper`] - drives the above for every [`ApiEntry`] in a catalog
//!
//! The converter is usable on its own:
//!
//! ```
//! let md = docs2md::html_to_markdown("<h2>Request</h2><p>Use <code>GET</code>.</p>");
//! assert_eq!(md, "## Request\n\nUse `GET`.");
//! ```

pub mod app;
pub mod catalog;
pub mod config;
mod convert;
mod error;
pub mod fetchers;
pub mod index;
pub mod openapi;
mod storage;
mod types;

pub use app::Scraper;
pub use catalog::{ApiEntry, Category, APIS};
pub use config::Config;
pub use convert::{collapse_blank_lines, decode_entities, html_to_markdown};
pub use error::{Error, FetchError, StorageError};
pub use fetchers::{Fetcher, HttpFetcher};
pub use openapi::fetch_openapi;
pub use storage::save_file;
pub use types::{ApiOutcome, RunReport};

/// Default User-Agent string
pub const DEFAULT_USER_AGENT: &str = concat!("docs2md/", env!("CARGO_PKG_VERSION"));
