//! Built-in workflow templates

use once_cell::sync::Lazy;
use serde::Serialize;

use super::entity::{StepDescriptor, WorkflowDefinition};
use super::error::WorkflowError;
use super::step_types::StepType;

/// A ready-made step list that can be instantiated as a workflow
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowTemplate {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    steps: Vec<StepType>,
}

impl WorkflowTemplate {
    fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        steps: Vec<StepType>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            steps,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn steps(&self) -> &[StepType] {
        &self.steps
    }

    /// Build a workflow definition from this template
    ///
    /// The template's own name is used when `name` is `None`.
    pub fn instantiate(&self, name: Option<&str>) -> WorkflowDefinition {
        let steps = self.steps.iter().copied().map(StepDescriptor::from).collect();

        WorkflowDefinition::new(name.unwrap_or(self.name)).with_steps(steps)
    }
}

static BUILTIN_TEMPLATES: Lazy<Vec<WorkflowTemplate>> = Lazy::new(|| {
    vec![
        WorkflowTemplate::new(
            "notes_insights_tag",
            "Notes to Insights",
            "Clean raw notes, draw insights and recommendations, then tag them",
            vec![StepType::Clean, StepType::Insight, StepType::Tag],
        ),
        WorkflowTemplate::new(
            "quick_summary",
            "Quick Summary",
            "Clean the text and condense it into a short summary",
            vec![StepType::Clean, StepType::Summarize],
        ),
        WorkflowTemplate::new(
            "insight_extractor",
            "Insight Extractor",
            "Clean the text, extract key entities, then tag them",
            vec![StepType::Clean, StepType::Extract, StepType::Tag],
        ),
        WorkflowTemplate::new(
            "brief_generator",
            "Brief Generator",
            "Produce a concise brief from noisy input",
            vec![StepType::Clean, StepType::Summarize],
        ),
        WorkflowTemplate::new(
            "full_pipeline",
            "Full Pipeline",
            "Clean, summarize, extract and tag",
            vec![
                StepType::Clean,
                StepType::Summarize,
                StepType::Extract,
                StepType::Tag,
            ],
        ),
    ]
});

/// All built-in templates, in catalogue order
pub fn builtin_templates() -> &'static [WorkflowTemplate] {
    &BUILTIN_TEMPLATES
}

/// Look up a built-in template by id
pub fn find_template(id: &str) -> Result<&'static WorkflowTemplate, WorkflowError> {
    BUILTIN_TEMPLATES
        .iter()
        .find(|template| template.id == id)
        .ok_or_else(|| WorkflowError::template_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_list_not_empty() {
        let templates = builtin_templates();

        assert!(!templates.is_empty());
        assert_eq!(templates[0].id(), "notes_insights_tag");
    }

    #[test]
    fn test_create_workflow_from_template() {
        let definition = find_template("quick_summary")
            .unwrap()
            .instantiate(Some("Custom Name"));

        assert_eq!(definition.name(), "Custom Name");
        assert_eq!(definition.len(), 2);
        assert_eq!(definition.steps()[0].step_type(), "clean");
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_instantiate_defaults_to_template_name() {
        let definition = find_template("full_pipeline").unwrap().instantiate(None);

        assert_eq!(definition.name(), "Full Pipeline");
        assert_eq!(definition.len(), 4);
    }

    #[test]
    fn test_template_ids_are_unique() {
        let mut ids: Vec<&str> = builtin_templates().iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), builtin_templates().len());
    }

    #[test]
    fn test_unknown_template() {
        let err = find_template("missing").unwrap_err();
        assert_eq!(err, WorkflowError::TemplateNotFound("missing".to_string()));
    }
}
