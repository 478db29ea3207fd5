//! Workflow executor trait and prompt construction

use async_trait::async_trait;

use super::entity::{StepConfig, StepDescriptor, WorkflowDefinition};
use super::error::WorkflowError;
use super::step_types::StepType;

/// Prefix of the suffix appended when a step carries configuration
pub const ADDITIONAL_INSTRUCTIONS_PREFIX: &str = "Additional instructions: ";

/// Serialize step configuration for the prompt suffix
///
/// Compact JSON of the key-ordered map, e.g. `{"focus":"dates","tone":"formal"}`.
/// Returns `None` for an empty configuration.
pub fn format_config(config: &StepConfig) -> Option<String> {
    if config.is_empty() {
        return None;
    }

    // A BTreeMap<String, Value> always serializes
    Some(serde_json::to_string(config).unwrap_or_default())
}

/// Render the full prompt for one step: template, then the config suffix
pub fn build_prompt(step_type: StepType, input: &str, config: &StepConfig) -> String {
    let mut prompt = step_type.render(input);

    if let Some(config) = format_config(config) {
        prompt.push_str("\n\n");
        prompt.push_str(ADDITIONAL_INSTRUCTIONS_PREFIX);
        prompt.push_str(&config);
    }

    prompt
}

/// Trait for workflow execution
#[async_trait]
pub trait WorkflowExecutor: Send + Sync + std::fmt::Debug {
    /// Run one step against `input`, issuing exactly one backend call
    async fn run_step(
        &self,
        step_type: &str,
        input: &str,
        config: &StepConfig,
    ) -> Result<String, WorkflowError>;

    /// Run `steps` in order, threading each output into the next step
    ///
    /// An empty list returns `input` unchanged. The first failure aborts the
    /// run and no intermediate output is returned.
    async fn run_workflow(
        &self,
        steps: &[StepDescriptor],
        input: &str,
    ) -> Result<String, WorkflowError>;

    /// Run the steps of a workflow definition
    async fn run_definition(
        &self,
        definition: &WorkflowDefinition,
        input: &str,
    ) -> Result<String, WorkflowError> {
        self.run_workflow(definition.steps(), input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_prompt_without_config() {
        let prompt = build_prompt(StepType::Summarize, "long text", &StepConfig::new());

        assert_eq!(
            prompt,
            "Providing a concise summary of the following text:\n\nlong text"
        );
        assert!(!prompt.contains(ADDITIONAL_INSTRUCTIONS_PREFIX));
    }

    #[test]
    fn test_build_prompt_with_config() {
        let mut config = StepConfig::new();
        config.insert("tone".to_string(), json!("formal"));

        let prompt = build_prompt(StepType::Clean, "text", &config);

        assert!(prompt.ends_with("\n\ntext\n\nAdditional instructions: {\"tone\":\"formal\"}"));
    }

    #[test]
    fn test_format_config_is_key_ordered() {
        let mut first = StepConfig::new();
        first.insert("tone".to_string(), json!("formal"));
        first.insert("focus".to_string(), json!("dates"));
        first.insert("max".to_string(), json!(3));

        let mut second = StepConfig::new();
        second.insert("max".to_string(), json!(3));
        second.insert("focus".to_string(), json!("dates"));
        second.insert("tone".to_string(), json!("formal"));

        let rendered = format_config(&first).unwrap();
        assert_eq!(rendered, r#"{"focus":"dates","max":3,"tone":"formal"}"#);
        assert_eq!(format_config(&second).unwrap(), rendered);
    }

    #[test]
    fn test_format_config_nested_values() {
        let mut config = StepConfig::new();
        config.insert("fields".to_string(), json!({"a": [true, null], "b": 1}));

        assert_eq!(
            format_config(&config).unwrap(),
            r#"{"fields":{"a":[true,null],"b":1}}"#
        );
    }

    #[test]
    fn test_format_config_empty() {
        assert_eq!(format_config(&StepConfig::new()), None);
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let mut config = StepConfig::new();
        config.insert("language".to_string(), json!("en"));
        config.insert("audience".to_string(), json!("execs"));

        let first = build_prompt(StepType::Insight, "input", &config);
        let second = build_prompt(StepType::Insight, "input", &config.clone());

        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
