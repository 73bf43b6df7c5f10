// Centralized error handling using thiserror
//
// Search failures never surface through this type at the tool boundary:
// DocumentSearchTool turns them into plain tool output. These variants cover
// startup, configuration, credentials and dispatch failures, plus the
// internal SearchService contract.

use thiserror::Error;

/// Main error type for the document retrieval agent
#[derive(Debug, Error)]
pub enum AgentError {
    /// Configuration loading or validation error
    ///
    /// Placeholder identifiers, empty values, or unparsable numbers.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Required environment variable missing
    #[error("Environment error: {0}")]
    EnvError(String),

    /// Access token could not be obtained
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// The hosted search service rejected or failed the request
    ///
    /// Contains the HTTP status and response body when available.
    #[error("Search error: {0}")]
    SearchError(String),

    /// Tool dispatch failure (unknown tool, malformed arguments)
    #[error("Tool error: {0}")]
    ToolError(String),

    /// JSON serialization/deserialization failed
    #[error("JSON serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// HTTP request failed
    ///
    /// Connection failures, timeouts and body decoding errors.
    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

/// Type alias for Result with AgentError
pub type Result<T> = std::result::Result<T, AgentError>;

impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::SearchError(err.to_string())
    }
}
