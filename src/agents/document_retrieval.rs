// Document & Drawing Retrieval Agent Configuration
// This agent answers questions from the document data store and cites every fact

use crate::agent::{AgentConfig, GenerationConfig, ToolDefinition};

pub const AGENT_NAME: &str = "document_retrieval_agent";

/// Create the document retrieval agent
///
/// # Features
/// - Near-deterministic sampling (temperature 0.1, top_p 0.1)
/// - 60 second model request timeout
/// - `search_gcs_documents` as the only tool
/// - Mandatory inline citations and a references list
pub fn create_document_retrieval_agent(model: &str) -> AgentConfig {
    AgentConfig {
        name: AGENT_NAME.to_string(),
        description: "Specialized agent for retrieving technical files, drawings, and catalog information via GCS Search.".to_string(),
        model: model.to_string(),
        instruction: build_system_instruction(),
        generation: GenerationConfig::near_deterministic(),
        tools: vec![ToolDefinition::search_gcs_documents()],
    }
}

/// Instruction block tailored strictly for document retrieval
fn build_system_instruction() -> String {
    r###"
# Document & Drawing Retrieval Agent Instructions

You are a specialized expert for retrieving technical files, drawings, and catalog information for Switchcraft/Conxall products.

## 1. Intent & Tool Usage
* Analyze every user input to identify the document or drawing they are looking for.
* **`search_gcs_documents`**: You MUST use this tool IMMEDIATELY to search for documents, drawings, and catalog data. Pass the user's search query (e.g., "catalog for PT8FX8MX2DB25") directly to this tool.

## 2. Document Retrieval Protocol
1. **Tool Execution:** Use ONLY the `search_gcs_documents` tool to query the GCS Vertex AI Search datastore.
2. **Analysis & Response:** The tool returns raw text snippets and document links. Read the provided snippets carefully and extract technical details (materials, dimensions, specs) to answer the user's question accurately.
3. **Citation (MANDATORY):** Use clickable Markdown links for inline citations using the format `[[Source X]](URL)` for every fact mentioned (do not display the raw URL inline).
4. **References List:** At the end of your response, create a "## References" section listing every source used in the format: `[Source X]: Document Title - URL`.
5. **Final Action:** After providing the document details and links, politely ask if the user has any other questions. Do not offer an email draft.

## 3. Output Format & Branding
* **Source Citation:** Always end your response with:
  > **Source:** search_gcs_documents
"###
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_retrieval_agent_creation() {
        let agent = create_document_retrieval_agent("gemini-3.1-pro-preview");

        assert_eq!(agent.name, "document_retrieval_agent");
        assert_eq!(agent.model, "gemini-3.1-pro-preview");
        assert!(agent.description.contains("GCS Search"));
        assert_eq!(agent.tool_names(), vec!["search_gcs_documents"]);
        assert!(agent.validate().is_ok());
    }

    #[test]
    fn test_generation_is_near_deterministic() {
        let agent = create_document_retrieval_agent("m");

        assert_eq!(agent.generation.temperature, 0.1);
        assert_eq!(agent.generation.top_p, 0.1);
        assert_eq!(agent.generation.timeout_ms, 60_000);
    }

    #[test]
    fn test_instruction_citation_rules() {
        let agent = create_document_retrieval_agent("m");

        assert!(agent.instruction.contains("`[[Source X]](URL)`"));
        assert!(agent.instruction.contains("## References"));
        assert!(agent.instruction.contains("> **Source:** search_gcs_documents"));
    }
}
