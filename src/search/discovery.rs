use super::{SearchRequest, SearchResponse, SearchService};
use crate::config::SearchConfig;
use crate::credentials::TokenSource;
use crate::error::{AgentError, Result};
use crate::version;
use async_trait::async_trait;
use reqwest::Client;

/// REST client for the hosted document search service
///
/// Sends exactly one `:search` call per request. Timeouts are enforced
/// by the underlying reqwest client.
pub struct DiscoveryEngineClient {
    client: Client,
    base_url: String,
    quota_project: String,
    tokens: TokenSource,
}

impl DiscoveryEngineClient {
    /// # Errors
    /// - HTTP client construction failure (TLS backend unavailable)
    pub fn new(config: &SearchConfig, tokens: TokenSource) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(version::user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: format!("https://{}", config.api_endpoint()),
            quota_project: config.project_id.clone(),
            tokens,
        })
    }

    /// Override scheme and host (private endpoints, local test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of the `:search` method for a serving config
    pub fn search_url(&self, serving_config: &str) -> String {
        format!("{}/v1/{}:search", self.base_url, serving_config)
    }
}

#[async_trait]
impl SearchService for DiscoveryEngineClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let token = self.tokens.access_token().await?;
        let url = self.search_url(&request.serving_config);

        tracing::debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .header("x-goog-user-project", &self.quota_project)
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgentError::SearchError(format!(
                "search service returned {}: {}",
                status,
                error_text.trim()
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body)
    }
}
