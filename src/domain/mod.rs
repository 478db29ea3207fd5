//! Domain layer - Core workflow logic and entities

pub mod credentials;
pub mod error;
pub mod llm;
pub mod workflow;

pub use credentials::{Credential, CredentialProvider, CredentialType};
pub use error::DomainError;
pub use llm::LlmProvider;
pub use workflow::{
    StepConfig, StepDescriptor, StepType, WorkflowDefinition, WorkflowError, WorkflowExecutor,
    WorkflowTemplate, builtin_templates, find_template,
};
