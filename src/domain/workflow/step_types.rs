//! Step type registry
//!
//! Every step type owns exactly one instruction preamble. A rendered prompt is
//! the preamble, a blank line, then the input text. New step types are added
//! here only; the runner resolves them through [`StepType::from_str`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::WorkflowError;

/// Known step types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    /// Strip noise and normalize the text
    Clean,

    /// Condense the text
    Summarize,

    /// Pull entities as a JSON-like string
    Extract,

    /// Comma-separated tag list
    Tag,

    /// Three insights and two recommendations
    Insight,
}

static ALL_STEP_TYPES: [StepType; 5] = [
    StepType::Clean,
    StepType::Summarize,
    StepType::Extract,
    StepType::Tag,
    StepType::Insight,
];

impl StepType {
    /// All registered step types, in catalogue order
    pub fn all() -> &'static [StepType] {
        &ALL_STEP_TYPES
    }

    /// Identifier used in workflow definitions
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Summarize => "summarize",
            Self::Extract => "extract",
            Self::Tag => "tag",
            Self::Insight => "insight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Clean => "CLEAN",
            Self::Summarize => "SUMMARIZE",
            Self::Extract => "EXTRACT",
            Self::Tag => "TAG",
            Self::Insight => "INSIGHT",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clean => "Normalize text input",
            Self::Summarize => "Create a concise brief",
            Self::Extract => "Pull key entities",
            Self::Tag => "Categorize content",
            Self::Insight => "Surface insights and recommendations",
        }
    }

    /// Fixed instruction placed before the input text
    pub fn preamble(&self) -> &'static str {
        match self {
            Self::Clean => {
                "Clean and normalize the following text. Remove any unnecessary formatting or noise. Keep it concise:"
            }
            Self::Summarize => "Providing a concise summary of the following text:",
            Self::Extract => {
                "Extract the key entities and structured information from the following text as a JSON-like string:"
            }
            Self::Tag => {
                "Categorize the following text with relevant tags based on its content. Return only a comma-separated list of tags:"
            }
            Self::Insight => {
                "Read the following text and produce 3 short insights and 2 actionable recommendations. Keep each insight to one sentence and each recommendation short and specific:"
            }
        }
    }

    /// Render the prompt for this step type
    pub fn render(&self, input: &str) -> String {
        format!("{}\n\n{}", self.preamble(), input)
    }
}

impl FromStr for StepType {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STEP_TYPES
            .iter()
            .copied()
            .find(|step_type| step_type.as_str() == s)
            .ok_or_else(|| WorkflowError::unknown_step_type(s))
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a step type identifier and render its prompt
pub fn render(step_type: &str, input: &str) -> Result<String, WorkflowError> {
    let step_type: StepType = step_type.parse()?;
    Ok(step_type.render(input))
}
