//! Result types of a scraping run

use crate::catalog::{ApiEntry, Category};
use serde::Serialize;
use std::path::PathBuf;

/// What happened to one API during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiOutcome {
    /// API name
    pub name: String,

    /// API category
    pub category: Category,

    /// Saved documentation file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_path: Option<PathBuf>,

    /// Saved OpenAPI spec
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi_path: Option<PathBuf>,

    /// Why the documentation could not be fetched, converted or saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Why the OpenAPI spec could not be fetched or saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi_error: Option<String>,
}

impl ApiOutcome {
    /// Empty outcome for `api`
    pub fn new(api: &ApiEntry) -> Self {
        Self {
            name: api.name.to_string(),
            category: api.category,
            doc_path: None,
            openapi_path: None,
            error: None,
            openapi_error: None,
        }
    }

    /// True if the documentation page was saved
    pub fn succeeded(&self) -> bool {
        self.error.is_none() && self.doc_path.is_some()
    }
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    /// One outcome per processed API, in processing order
    pub apis: Vec<ApiOutcome>,

    /// Generated index files
    pub indexes: Vec<PathBuf>,
}

impl RunReport {
    /// Number of APIs whose documentation was saved
    pub fn succeeded(&self) -> usize {
        self.apis.iter().filter(|a| a.succeeded()).count()
    }

    /// Number of APIs whose documentation failed
    pub fn failed(&self) -> usize {
        self.apis.len() - self.succeeded()
    }

    /// Number of OpenAPI specs saved
    pub fn openapi_saved(&self) -> usize {
        self.apis.iter().filter(|a| a.openapi_path.is_some()).count()
    }

    /// Outcome for the API called `name`
    pub fn get(&self, name: &str) -> Option<&ApiOutcome> {
        self.apis.iter().find(|a| a.name == name)
    }

    /// Pretty-printed JSON form of the report
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
