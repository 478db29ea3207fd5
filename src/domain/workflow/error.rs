//! Workflow error types

use thiserror::Error;

use crate::domain::DomainError;

/// Errors that can occur while rendering or running workflows
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkflowError {
    #[error("Unknown step type: {0}")]
    UnknownStepType(String),

    #[error("Backend call failed: {message}")]
    BackendCallFailed { message: String, rate_limited: bool },

    #[error("Missing backend credential: {0}")]
    MissingCredential(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Workflow template not found: {0}")]
    TemplateNotFound(String),
}

impl WorkflowError {
    pub fn unknown_step_type(id: impl Into<String>) -> Self {
        Self::UnknownStepType(id.into())
    }

    pub fn backend_call_failed(message: impl Into<String>) -> Self {
        Self::BackendCallFailed {
            message: message.into(),
            rate_limited: false,
        }
    }

    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn template_not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound(id.into())
    }

    /// True when the backend rejected the call for rate-limit or quota reasons
    pub fn is_rate_limited(&self) -> bool {
        matches!(
            self,
            Self::BackendCallFailed {
                rate_limited: true,
                ..
            }
        )
    }

    /// True for errors caused by caller input rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownStepType(_) | Self::Validation(_) | Self::TemplateNotFound(_)
        )
    }
}

impl From<DomainError> for WorkflowError {
    fn from(error: DomainError) -> Self {
        Self::BackendCallFailed {
            rate_limited: error.is_rate_limited(),
            message: error.to_string(),
        }
    }
}
