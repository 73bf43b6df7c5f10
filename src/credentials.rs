// OAuth access token resolution for the search service
//
// Supports two sources:
// 1. A fixed token from DOCSEARCH_ACCESS_TOKEN or GOOGLE_OAUTH_ACCESS_TOKEN
// 2. The gcloud CLI (`gcloud auth print-access-token`), asked on every request

use crate::error::{AgentError, Result};
use tokio::process::Command;

const TOKEN_ENV_VARS: [&str; 2] = ["DOCSEARCH_ACCESS_TOKEN", "GOOGLE_OAUTH_ACCESS_TOKEN"];

/// Where bearer tokens come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// Fixed token, returned as-is
    Static(String),

    /// Ask the gcloud CLI for a fresh token on each call
    Gcloud,
}

impl TokenSource {
    /// Pick a token source from the environment
    ///
    /// A non-empty token variable wins; otherwise fall back to gcloud.
    pub fn from_env() -> Self {
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
            .map(TokenSource::Static)
            .unwrap_or(TokenSource::Gcloud)
    }

    /// Resolve a bearer token
    ///
    /// # Errors
    /// - gcloud CLI not installed
    /// - Not logged in (non-zero exit)
    /// - Empty token output
    pub async fn access_token(&self) -> Result<String> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::Gcloud => read_gcloud_token().await,
        }
    }
}

async fn read_gcloud_token() -> Result<String> {
    let output = Command::new("gcloud")
        .args(["auth", "print-access-token"])
        .output()
        .await
        .map_err(|e| {
            AgentError::AuthError(format!(
                "Failed to execute gcloud CLI ({}). Install the Google Cloud SDK or set DOCSEARCH_ACCESS_TOKEN",
                e
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AgentError::AuthError(format!(
            "gcloud auth print-access-token failed: {}. Run: gcloud auth login",
            stderr.trim()
        )));
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return Err(AgentError::AuthError(
            "gcloud returned an empty access token".to_string(),
        ));
    }

    tracing::debug!("Obtained access token from gcloud");
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static TOKEN_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for name in TOKEN_ENV_VARS {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_from_env_prefers_static_token() {
        let _lock = TOKEN_TEST_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("GOOGLE_OAUTH_ACCESS_TOKEN", " ya29.token \n");

        assert_eq!(
            TokenSource::from_env(),
            TokenSource::Static("ya29.token".to_string())
        );

        clear_env();
    }

    #[test]
    fn test_from_env_falls_back_to_gcloud() {
        let _lock = TOKEN_TEST_LOCK.lock().unwrap();
        clear_env();
        std::env::set_var("DOCSEARCH_ACCESS_TOKEN", "   ");

        assert_eq!(TokenSource::from_env(), TokenSource::Gcloud);

        clear_env();
    }

    #[tokio::test]
    async fn test_static_token_returned_as_is() {
        let source = TokenSource::Static("abc".to_string());
        assert_eq!(source.access_token().await.unwrap(), "abc");
    }
}
