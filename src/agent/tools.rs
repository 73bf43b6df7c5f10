// Tool definitions in function calling format
//
// The external agent runtime reads these to decide when to invoke a tool.
// Example:
// ```json
// {
//   "type": "function",
//   "function": {
//     "name": "search_gcs_documents",
//     "description": "Searches the GCS Document Data Store ...",
//     "parameters": {
//       "type": "object",
//       "properties": { "query": { "type": "string", "description": "..." } },
//       "required": ["query"]
//     }
//   }
// }
// ```

use crate::search::DocumentSearchTool;
use serde::{Deserialize, Serialize};

/// Tool definition handed to the agent runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Always "function" for function calling
    #[serde(rename = "type")]
    pub tool_type: String,

    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,

    /// What the function does and when to use it
    pub description: String,

    pub parameters: FunctionParameters,
}

/// Parameters schema for a function (JSON Schema format)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionParameters {
    /// Always "object" for parameter schemas
    #[serde(rename = "type")]
    pub param_type: String,

    pub properties: serde_json::Value,

    pub required: Vec<String>,
}

impl ToolDefinition {
    /// Definition of the document search tool
    pub fn search_gcs_documents() -> Self {
        Self {
            tool_type: "function".to_string(),
            function: FunctionDefinition {
                name: DocumentSearchTool::NAME.to_string(),
                description: "Searches the GCS Document Data Store for catalogs, drawings, and technical specifications, and returns the raw search snippets and links for the agent to analyze.".to_string(),
                parameters: FunctionParameters {
                    param_type: "object".to_string(),
                    properties: serde_json::json!({
                        "query": {
                            "type": "string",
                            "description": "The user's search query, e.g. \"catalog for PT8FX8MX2DB25\""
                        }
                    }),
                    required: vec!["query".to_string()],
                },
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }
}
