use async_trait::async_trait;
use std::fmt::Debug;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Trait for generative-text backends (Gemini, ...)
///
/// One `call` is one request/response round trip. Implementations hold no
/// per-call state, so a single instance is shared across concurrent runs.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LlmProvider: Send + Sync + Debug {
    /// Send a fully rendered prompt and return the generated text
    async fn call(&self, prompt: &str) -> Result<String, DomainError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
