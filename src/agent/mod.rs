// Declarative agent configuration
//
// Module Organization:
// - tools.rs: function calling tool definitions
// - AgentConfig and GenerationConfig defined in this file
//
// These records carry no behaviour. The conversation loop, model calls and
// tool invocation belong to the external agent runtime that reads them.

pub mod tools;

use crate::error::{AgentError, Result};
use serde::{Deserialize, Serialize};

pub use tools::{FunctionDefinition, FunctionParameters, ToolDefinition};

/// Model generation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature (0.0 = deterministic, 2.0 = very random)
    pub temperature: f32,

    /// Top-p nucleus sampling parameter
    pub top_p: f32,

    /// Model request timeout in milliseconds
    pub timeout_ms: u64,
}

impl GenerationConfig {
    /// Near-deterministic sampling with a 60 second request timeout
    pub fn near_deterministic() -> Self {
        Self {
            temperature: 0.1,
            top_p: 0.1,
            timeout_ms: 60_000,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::near_deterministic()
    }
}

/// Agent configuration consumed by the external runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Unique agent identifier
    pub name: String,

    /// Human-readable description of agent purpose
    pub description: String,

    /// Model identifier
    pub model: String,

    /// System instruction block
    pub instruction: String,

    #[serde(default)]
    pub generation: GenerationConfig,

    /// Callable tools registered with the runtime
    #[serde(default)]
    pub tools: Vec<ToolDefinition>,
}

impl AgentConfig {
    /// Names of the registered tools, in registration order
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(ToolDefinition::name).collect()
    }

    /// Check identifiers and sampling ranges
    ///
    /// # Errors
    /// - Empty model identifier
    /// - Temperature outside 0.0..=2.0
    /// - top_p outside 0.0..=1.0
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(AgentError::ConfigError(
                "Model identifier cannot be empty".to_string(),
            ));
        }

        let temperature = self.generation.temperature;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(AgentError::ConfigError(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                temperature
            )));
        }

        let top_p = self.generation.top_p;
        if !(0.0..=1.0).contains(&top_p) {
            return Err(AgentError::ConfigError(format!(
                "top_p must be between 0.0 and 1.0, got {}",
                top_p
            )));
        }

        Ok(())
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
