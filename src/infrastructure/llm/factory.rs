use serde::Deserialize;
use std::sync::Arc;

use super::gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiProvider};
use super::http_client::HttpClient;
use crate::domain::{Credential, CredentialType, LlmProvider};

/// Generative-text backend configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LlmProviderConfig {
    Gemini {
        #[serde(default = "default_gemini_model")]
        model: String,
        #[serde(default = "default_gemini_base_url")]
        base_url: String,
    },
}

fn default_gemini_model() -> String {
    DEFAULT_GEMINI_MODEL.to_string()
}

fn default_gemini_base_url() -> String {
    DEFAULT_GEMINI_BASE_URL.to_string()
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self::Gemini {
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
        }
    }
}

impl LlmProviderConfig {
    /// Credential type this backend authenticates with
    pub fn credential_type(&self) -> CredentialType {
        match self {
            Self::Gemini { .. } => CredentialType::Gemini,
        }
    }
}

/// Factory for creating generative-text providers
#[derive(Debug)]
pub struct LlmProviderFactory;

impl LlmProviderFactory {
    /// Create a provider from configuration and credential
    pub fn create(config: &LlmProviderConfig, credential: &Credential) -> Arc<dyn LlmProvider> {
        match config {
            LlmProviderConfig::Gemini { model, base_url } => Arc::new(
                GeminiProvider::with_base_url(HttpClient::new(), credential.api_key(), base_url)
                    .with_model(model),
            ),
        }
    }
}
