//! Workflow definition entities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::WorkflowError;
use super::step_types::StepType;

/// Free-form per-step configuration
///
/// Keys are kept sorted so the rendered prompt does not depend on the order
/// in which the caller inserted them.
pub type StepConfig = BTreeMap<String, Value>;

/// One stage of a workflow, as supplied by the caller
///
/// The step type stays a raw identifier until the runner resolves it, so an
/// unknown value surfaces as [`WorkflowError::UnknownStepType`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepDescriptor {
    #[serde(rename = "type")]
    step_type: String,

    #[serde(default)]
    config: StepConfig,
}

impl StepDescriptor {
    pub fn new(step_type: impl Into<String>) -> Self {
        Self {
            step_type: step_type.into(),
            config: StepConfig::new(),
        }
    }

    pub fn with_config(mut self, config: StepConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_config_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.config.insert(key.into(), value.into());
        self
    }

    pub fn step_type(&self) -> &str {
        &self.step_type
    }

    pub fn config(&self) -> &StepConfig {
        &self.config
    }

    /// Resolve the raw identifier against the registry
    pub fn resolve(&self) -> Result<StepType, WorkflowError> {
        self.step_type.parse()
    }
}

impl From<StepType> for StepDescriptor {
    fn from(step_type: StepType) -> Self {
        Self::new(step_type.as_str())
    }
}

/// A named, ordered list of steps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkflowDefinition {
    name: String,

    #[serde(default)]
    steps: Vec<StepDescriptor>,
}

impl WorkflowDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<StepDescriptor>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_step(mut self, step: impl Into<StepDescriptor>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Check the name and that every step type resolves
    pub fn validate(&self) -> Result<(), WorkflowError> {
        if self.name.trim().is_empty() {
            return Err(WorkflowError::validation("Workflow name cannot be empty"));
        }

        for step in &self.steps {
            step.resolve()?;
        }

        Ok(())
    }
}
