use super::format::format_context;
use super::{ContentSearchSpec, DataStoreSpec, SearchRequest, SearchService, SnippetSpec};
use crate::config::SearchConfig;
use std::sync::Arc;

/// Prefix of every failure reported as tool output
pub const SEARCH_ERROR_PREFIX: &str = "Error executing search against data store";

/// Returned when no document carries a snippet
pub const NO_RESULTS_MESSAGE: &str =
    "No relevant documents found in the GCS catalog for this query.";

/// The `search_gcs_documents` tool
///
/// Searches the document data store for catalogs, drawings and technical
/// specifications and returns raw snippets and links for the agent to analyze.
/// Failures are returned as text, never raised: the agent runtime feeds the
/// string back to the model either way.
pub struct DocumentSearchTool {
    service: Arc<dyn SearchService>,
    config: SearchConfig,
}

impl DocumentSearchTool {
    pub const NAME: &'static str = "search_gcs_documents";

    pub fn new(service: Arc<dyn SearchService>, config: SearchConfig) -> Self {
        Self { service, config }
    }

    /// Build the single request issued for a query
    pub fn build_request(&self, query: &str) -> SearchRequest {
        SearchRequest {
            serving_config: self.config.serving_config_path(),
            query: query.to_string(),
            page_size: self.config.page_size,
            content_search_spec: ContentSearchSpec {
                snippet_spec: SnippetSpec {
                    return_snippet: true,
                },
            },
            data_store_specs: vec![DataStoreSpec {
                data_store: self.config.data_store_path(),
            }],
        }
    }

    /// Run one search and format the results as a context block
    pub async fn search_gcs_documents(&self, query: &str) -> String {
        if query.trim().is_empty() {
            tracing::warn!("Rejected empty search query");
            return format!("{}: query must not be empty", SEARCH_ERROR_PREFIX);
        }

        let request = self.build_request(query);

        tracing::info!("Executing GCS search for: '{}'", query);
        let response = match self.service.search(&request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Search call failed: {}", e);
                return format!("{}: {}", SEARCH_ERROR_PREFIX, e);
            }
        };

        tracing::info!("Found {} documents. Preparing context...", response.results.len());

        match format_context(&response) {
            Some(context) => context,
            None => {
                tracing::warn!("No relevant documents found.");
                NO_RESULTS_MESSAGE.to_string()
            }
        }
    }
}
