//! Workflow runner implementation

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{Instrument, debug, debug_span};
use uuid::Uuid;

use crate::domain::workflow::build_prompt;
use crate::domain::{
    CredentialProvider, DomainError, LlmProvider, StepConfig, StepDescriptor, StepType,
    WorkflowError, WorkflowExecutor,
};
use crate::infrastructure::llm::{LlmProviderConfig, LlmProviderFactory};

/// Runs steps and workflows against a generative-text backend
///
/// The provider handle is the only state. It is shared read-only, so one
/// runner can serve any number of concurrent runs.
#[derive(Debug, Clone)]
pub struct WorkflowRunner {
    llm_provider: Arc<dyn LlmProvider>,
}

impl WorkflowRunner {
    /// Create a runner around an already constructed provider
    pub fn new(llm_provider: Arc<dyn LlmProvider>) -> Self {
        Self { llm_provider }
    }

    /// Read the backend credential once and build the configured provider
    ///
    /// Fails with [`WorkflowError::MissingCredential`] when the credential
    /// cannot be read; no runner is constructed in that case.
    pub async fn from_credentials(
        credentials: &dyn CredentialProvider,
        config: &LlmProviderConfig,
    ) -> Result<Self, WorkflowError> {
        let credential = credentials
            .get_credential(&config.credential_type())
            .await
            .map_err(|e| match e {
                DomainError::Credential { message } => WorkflowError::missing_credential(message),
                other => WorkflowError::missing_credential(other.to_string()),
            })?;

        let provider = LlmProviderFactory::create(config, &credential);

        debug!(
            provider = provider.provider_name(),
            credentials = credentials.provider_name(),
            "Workflow runner initialized"
        );

        Ok(Self::new(provider))
    }

    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.llm_provider
    }

    /// Render the prompt for a resolved step and make the single backend call
    async fn execute(
        &self,
        step_type: StepType,
        input: &str,
        config: &StepConfig,
    ) -> Result<String, WorkflowError> {
        let prompt = build_prompt(step_type, input, config);

        debug!(step_type = %step_type, prompt_len = prompt.len(), "Calling backend");

        self.llm_provider
            .call(&prompt)
            .await
            .map_err(WorkflowError::from)
    }
}

#[async_trait]
impl WorkflowExecutor for WorkflowRunner {
    async fn run_step(
        &self,
        step_type: &str,
        input: &str,
        config: &StepConfig,
    ) -> Result<String, WorkflowError> {
        let step_type: StepType = step_type.parse()?;
        self.execute(step_type, input, config).await
    }

    async fn run_workflow(
        &self,
        steps: &[StepDescriptor],
        input: &str,
    ) -> Result<String, WorkflowError> {
        // Resolve everything up front so an unknown type costs no backend calls
        let resolved = steps
            .iter()
            .map(|step| step.resolve().map(|step_type| (step_type, step.config())))
            .collect::<Result<Vec<_>, WorkflowError>>()?;

        let span = debug_span!("workflow_run", run_id = %Uuid::new_v4(), steps = resolved.len());

        async move {
            let mut current = input.to_string();

            for (index, (step_type, config)) in resolved.into_iter().enumerate() {
                debug!(index, step_type = %step_type, "Executing step");

                current = self.execute(step_type, &current, config).await?;
            }

            Ok(current)
        }
        .instrument(span)
        .await
    }
}
