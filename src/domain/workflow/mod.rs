//! Workflow domain module
//!
//! A workflow is an ordered list of text-transformation steps. Running it
//! folds over the steps: each step renders a prompt from the current text,
//! sends it to the generative-text backend, and the response becomes the
//! input of the next step.
//!
//! ## Step types
//!
//! - `clean` - strip noise and normalize
//! - `summarize` - condense
//! - `extract` - entities as a JSON-like string
//! - `tag` - comma-separated tags only
//! - `insight` - 3 insights and 2 recommendations

mod entity;
mod error;
mod executor;
mod step_types;
mod template;

pub use entity::{StepConfig, StepDescriptor, WorkflowDefinition};
pub use error::WorkflowError;
pub use executor::{ADDITIONAL_INSTRUCTIONS_PREFIX, WorkflowExecutor, build_prompt, format_config};
pub use step_types::{StepType, render};
pub use template::{WorkflowTemplate, builtin_templates, find_template};
