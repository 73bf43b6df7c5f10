use anyhow::Context;
use docsearch_agent::{
    create_document_retrieval_agent, DiscoveryEngineClient, DocumentSearchTool, SearchConfig,
    TokenSource,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Startup entry point
///
/// Without arguments, prints the agent configuration as JSON for the agent
/// runtime. With arguments, runs a single search with them as the query.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SearchConfig::from_env().context("Failed to load search configuration")?;

    let agent = create_document_retrieval_agent(&config.model);
    agent.validate().context("Invalid agent configuration")?;
    tracing::info!("Agent {} ready (model: {})", agent.name, agent.model);

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query.is_empty() {
        println!("{}", agent.to_json_pretty()?);
        return Ok(());
    }

    let client = DiscoveryEngineClient::new(&config, TokenSource::from_env())
        .context("Failed to build search client")?;
    let tool = DocumentSearchTool::new(Arc::new(client), config);

    println!("{}", tool.search_gcs_documents(&query).await);
    Ok(())
}
