// Search configuration loaded once at startup
//
// Identifiers come from environment variables (.env file via dotenvy).
// The config is immutable after loading and validated before use, so a
// deployment that still carries placeholder values fails at startup rather
// than on the first tool call.

use crate::error::{AgentError, Result};
use std::time::Duration;

/// Placeholder value shipped in sample configuration files
pub const PLACEHOLDER: &str = "<CHANGE-ME>";

pub const DEFAULT_LOCATION: &str = "global";
pub const DEFAULT_COLLECTION: &str = "default_collection";
pub const DEFAULT_SERVING_CONFIG: &str = "default_search";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_MODEL: &str = "gemini-3.1-pro-preview";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection parameters for the hosted document search service
///
/// Environment Variables:
/// - DOCSEARCH_PROJECT_ID (required): cloud project identifier
/// - DOCSEARCH_ENGINE_ID (required): engine (app) that owns the serving config
/// - DOCSEARCH_DATA_STORE_ID (required): data store the search is scoped to
/// - DOCSEARCH_LOCATION (optional): defaults to "global"
/// - DOCSEARCH_MODEL (optional): model used by the agent configuration
/// - DOCSEARCH_PAGE_SIZE (optional): results requested per search, defaults to 5
/// - DOCSEARCH_TIMEOUT_SECS (optional): HTTP timeout, defaults to 60
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub project_id: String,
    pub location: String,
    pub engine_id: String,
    pub data_store_id: String,
    pub collection_id: String,
    pub serving_config_id: String,
    pub page_size: u32,
    pub model: String,
    pub timeout: Duration,
}

impl SearchConfig {
    /// Create a config with default location, collection, serving config and limits
    pub fn new(
        project_id: impl Into<String>,
        engine_id: impl Into<String>,
        data_store_id: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            location: DEFAULT_LOCATION.to_string(),
            engine_id: engine_id.into(),
            data_store_id: data_store_id.into(),
            collection_id: DEFAULT_COLLECTION.to_string(),
            serving_config_id: DEFAULT_SERVING_CONFIG.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Override the data store location (e.g. "us", "eu")
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Load configuration from environment and validate it
    ///
    /// # Errors
    /// - Required variable not set (EnvError)
    /// - Numeric variable not parsable (ConfigError)
    /// - Placeholder or empty identifiers (ConfigError)
    pub fn from_env() -> Result<Self> {
        // Load .env file (ignore if not found)
        dotenvy::dotenv().ok();

        let mut config = Self::new(
            required_var("DOCSEARCH_PROJECT_ID")?,
            required_var("DOCSEARCH_ENGINE_ID")?,
            required_var("DOCSEARCH_DATA_STORE_ID")?,
        );

        if let Some(location) = optional_var("DOCSEARCH_LOCATION") {
            config.location = location;
        }
        if let Some(model) = optional_var("DOCSEARCH_MODEL") {
            config.model = model;
        }
        if let Some(page_size) = optional_var("DOCSEARCH_PAGE_SIZE") {
            config.page_size = page_size.parse().map_err(|_| {
                AgentError::ConfigError(format!(
                    "DOCSEARCH_PAGE_SIZE must be a positive integer, got '{}'",
                    page_size
                ))
            })?;
        }
        if let Some(timeout) = optional_var("DOCSEARCH_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| {
                AgentError::ConfigError(format!(
                    "DOCSEARCH_TIMEOUT_SECS must be an integer, got '{}'",
                    timeout
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject empty or placeholder identifiers and a zero page size
    pub fn validate(&self) -> Result<()> {
        let identifiers = [
            ("project_id", &self.project_id),
            ("location", &self.location),
            ("engine_id", &self.engine_id),
            ("data_store_id", &self.data_store_id),
            ("collection_id", &self.collection_id),
            ("serving_config_id", &self.serving_config_id),
            ("model", &self.model),
        ];

        for (field, value) in identifiers {
            let value = value.trim();
            if value.is_empty() {
                return Err(AgentError::ConfigError(format!("{} cannot be empty", field)));
            }
            if value == PLACEHOLDER {
                return Err(AgentError::ConfigError(format!(
                    "{} still holds the placeholder value {}",
                    field, PLACEHOLDER
                )));
            }
        }

        if self.page_size == 0 {
            return Err(AgentError::ConfigError(
                "page_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Full resource name of the data store
    pub fn data_store_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/collections/{}/dataStores/{}",
            self.project_id, self.location, self.collection_id, self.data_store_id
        )
    }

    /// Full resource name of the serving config searched against
    pub fn serving_config_path(&self) -> String {
        format!(
            "projects/{}/locations/{}/collections/{}/engines/{}/servingConfigs/{}",
            self.project_id,
            self.location,
            self.collection_id,
            self.engine_id,
            self.serving_config_id
        )
    }

    /// API host; regional data stores use a location-prefixed endpoint
    pub fn api_endpoint(&self) -> String {
        if self.location == DEFAULT_LOCATION {
            "discoveryengine.googleapis.com".to_string()
        } else {
            format!("{}-discoveryengine.googleapis.com", self.location)
        }
    }
}

fn required_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AgentError::EnvError(format!("{} environment variable not set", name)))
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
