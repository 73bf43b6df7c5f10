// Library interface for the document retrieval agent
// Exposes the search tool and the agent configuration so an external
// agent runtime (or a script/test) can wire them together.

pub mod agent;
pub mod agents;
pub mod config;
pub mod credentials;
pub mod error;
pub mod search;
pub mod tool_executor;
pub mod version;

// Re-export commonly used types for convenience
pub use agent::{AgentConfig, GenerationConfig, ToolDefinition};
pub use agents::create_document_retrieval_agent;
pub use config::SearchConfig;
pub use credentials::TokenSource;
pub use error::{AgentError, Result};
pub use search::{DiscoveryEngineClient, DocumentSearchTool, SearchService};
pub use tool_executor::ToolExecutor;
