//! Text Workflow Runner
//!
//! Runs named, ordered sequences of text-transformation steps against a
//! generative-text backend, feeding each step's output into the next step:
//! - A closed step registry (`clean`, `summarize`, `extract`, `tag`, `insight`)
//! - Deterministic prompt construction with per-step configuration
//! - Sequential, fail-fast workflow execution
//! - Built-in workflow templates
//! - A Gemini backend authenticated from the process environment

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{
    StepConfig, StepDescriptor, StepType, WorkflowDefinition, WorkflowError, WorkflowExecutor,
};
pub use infrastructure::workflow::WorkflowRunner;

use infrastructure::credentials::EnvCredentialProvider;

/// Create a workflow runner from configuration
///
/// The backend credential is read once from the environment variable named
/// in `config.credentials`. A missing credential is fatal.
pub async fn create_runner(config: &AppConfig) -> Result<WorkflowRunner, WorkflowError> {
    let credentials = EnvCredentialProvider::new().with_mapping(
        config.backend.credential_type(),
        config.credentials.api_key_env.clone(),
    );

    WorkflowRunner::from_credentials(&credentials, &config.backend).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialsConfig;

    #[tokio::test]
    async fn test_create_runner_missing_credential() {
        let config = AppConfig {
            credentials: CredentialsConfig {
                api_key_env: "TEXT_WORKFLOW_TEST_MISSING_KEY".to_string(),
            },
            ..AppConfig::default()
        };

        let err = create_runner(&config).await.unwrap_err();

        assert!(matches!(err, WorkflowError::MissingCredential(_)));
        assert!(err.to_string().contains("TEXT_WORKFLOW_TEST_MISSING_KEY"));
    }

    #[tokio::test]
    async fn test_create_runner_with_credential() {
        // SAFETY: Test runs in isolation
        unsafe { std::env::set_var("TEXT_WORKFLOW_TEST_PRESENT_KEY", "AIza-test") };

        let config = AppConfig {
            credentials: CredentialsConfig {
                api_key_env: "TEXT_WORKFLOW_TEST_PRESENT_KEY".to_string(),
            },
            ..AppConfig::default()
        };

        let runner = create_runner(&config).await.unwrap();
        assert_eq!(runner.llm_provider().provider_name(), "gemini");

        // SAFETY: Test cleanup
        unsafe { std::env::remove_var("TEXT_WORKFLOW_TEST_PRESENT_KEY") };
    }
}
