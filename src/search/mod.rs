// Document search adapter
//
// Module Organization:
// - mod.rs: wire types and the SearchService seam
// - discovery.rs: REST client for the hosted search service
// - format.rs: link rewriting and context block assembly
// - tool.rs: the `search_gcs_documents` tool exposed to the agent runtime

pub mod discovery;
pub mod format;
pub mod tool;

use crate::error::Result;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

pub use discovery::DiscoveryEngineClient;
pub use format::{format_context, rewrite_storage_link};
pub use tool::{DocumentSearchTool, NO_RESULTS_MESSAGE, SEARCH_ERROR_PREFIX};

/// Hosted search backend
///
/// One call per invocation; implementations must not retry or paginate.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Execute a single search request
    ///
    /// # Errors
    /// - Transport failures and timeouts
    /// - Non-success responses from the service
    /// - Credential failures
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse>;
}

/// Search request in the service's JSON form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// Full serving config resource name
    #[serde(skip_serializing)]
    pub serving_config: String,

    pub query: String,

    pub page_size: u32,

    pub content_search_spec: ContentSearchSpec,

    pub data_store_specs: Vec<DataStoreSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSearchSpec {
    pub snippet_spec: SnippetSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnippetSpec {
    pub return_snippet: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataStoreSpec {
    /// Full data store resource name
    pub data_store: String,
}

/// Search response; read-only view, every field optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,

    #[serde(default)]
    pub total_size: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub document: Document,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub id: Option<String>,

    /// Fields extracted by the service (title, link, snippets)
    #[serde(default)]
    pub derived_struct_data: DerivedData,
}

/// Derived-data mapping; keys are snake_case as emitted by the service
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DerivedData {
    #[serde(default)]
    pub title: Option<String>,

    /// Storage URI of the source object (`gs://bucket/path`)
    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub snippets: Option<Vec<Snippet>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snippet {
    #[serde(default)]
    pub snippet: Option<String>,

    #[serde(default)]
    pub snippet_status: Option<String>,
}
