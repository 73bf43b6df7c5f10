// Tool execution abstraction for the agent runtime
// Lets a runtime dispatch tool calls by name without knowing the tool types

use crate::error::{AgentError, Result};
use crate::search::DocumentSearchTool;
use async_trait::async_trait;
use serde::Deserialize;

/// Trait for executing tool calls requested by the model
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a tool call and return the result as a string
    ///
    /// # Arguments
    /// * `tool_name` - Name of the tool to call (e.g., "search_gcs_documents")
    /// * `arguments` - JSON arguments for the tool call
    ///
    /// # Errors
    /// - Unknown tool name
    /// - Malformed or missing arguments
    async fn execute_tool(&self, tool_name: &str, arguments: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct SearchArguments {
    query: String,
}

#[async_trait]
impl ToolExecutor for DocumentSearchTool {
    async fn execute_tool(&self, tool_name: &str, arguments: &str) -> Result<String> {
        if tool_name != Self::NAME {
            return Err(AgentError::ToolError(format!("Unknown tool: {}", tool_name)));
        }

        let args: SearchArguments = serde_json::from_str(arguments).map_err(|e| {
            AgentError::ToolError(format!("Invalid arguments for {}: {}", tool_name, e))
        })?;

        Ok(self.search_gcs_documents(&args.query).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::search::{MockSearchService, SearchResponse, NO_RESULTS_MESSAGE};
    use std::sync::Arc;

    fn tool(mock: MockSearchService) -> DocumentSearchTool {
        DocumentSearchTool::new(Arc::new(mock), SearchConfig::new("p", "e", "d"))
    }

    #[tokio::test]
    async fn test_dispatches_query_argument() {
        let mut mock = MockSearchService::new();
        mock.expect_search()
            .withf(|request| request.query == "PT8 catalog")
            .times(1)
            .returning(|_| Ok(SearchResponse::default()));

        let output = tool(mock)
            .execute_tool("search_gcs_documents", r#"{"query": "PT8 catalog"}"#)
            .await
            .unwrap();
        assert_eq!(output, NO_RESULTS_MESSAGE);
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = tool(MockSearchService::new())
            .execute_tool("web_search", r#"{"query": "x"}"#)
            .await;

        match result {
            Err(AgentError::ToolError(msg)) => assert!(msg.contains("web_search")),
            other => panic!("Expected ToolError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_query_argument() {
        let result = tool(MockSearchService::new())
            .execute_tool("search_gcs_documents", r#"{"message": "x"}"#)
            .await;

        assert!(matches!(result, Err(AgentError::ToolError(_))));
    }
}
