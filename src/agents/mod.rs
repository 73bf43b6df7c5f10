// Agent Configurations Module
// Contains pre-configured agent templates

pub mod document_retrieval;

pub use document_retrieval::create_document_retrieval_agent;
