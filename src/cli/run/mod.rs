//! Run command - executes a workflow definition or a built-in template

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use tracing::info;

use super::{InputArgs, bootstrap};
use crate::config::AppConfig;
use crate::domain::{WorkflowDefinition, WorkflowExecutor, find_template};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Workflow definition file: {"name": ..., "steps": [{"type": ..., "config": {...}}]}
    #[arg(long, short = 'w')]
    pub workflow: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Template id, see `templates`
    pub id: String,

    #[command(flatten)]
    pub input: InputArgs,
}

/// Run a workflow definition file
pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    run_with_config(&config, args).await
}

/// Run a built-in template
pub async fn run_template(args: TemplateArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    run_template_with_config(&config, args).await
}

async fn run_with_config(config: &AppConfig, args: RunArgs) -> anyhow::Result<()> {
    let definition = load_definition(&args.workflow).await?;
    definition.validate()?;

    // Credential first: a missing key must not wait on stdin
    let runner = crate::create_runner(config).await?;
    let input = args.input.read().await?;

    execute(&runner, &definition, &input).await
}

async fn run_template_with_config(config: &AppConfig, args: TemplateArgs) -> anyhow::Result<()> {
    let definition = find_template(&args.id)?.instantiate(None);

    let runner = crate::create_runner(config).await?;
    let input = args.input.read().await?;

    execute(&runner, &definition, &input).await
}

async fn execute(
    runner: &impl WorkflowExecutor,
    definition: &WorkflowDefinition,
    input: &str,
) -> anyhow::Result<()> {
    info!(
        "Running workflow '{}' ({} steps)",
        definition.name(),
        definition.len()
    );

    let output = runner
        .run_definition(definition, input)
        .await
        .with_context(|| format!("Workflow '{}' failed", definition.name()))?;

    println!("{}", output);
    Ok(())
}

async fn load_definition(path: &Path) -> anyhow::Result<WorkflowDefinition> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read workflow file {}", path.display()))?;

    parse_definition(&raw).with_context(|| format!("Invalid workflow file {}", path.display()))
}

fn parse_definition(raw: &str) -> Result<WorkflowDefinition, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CredentialsConfig;
    use crate::domain::WorkflowError;

    fn config_without_key() -> AppConfig {
        AppConfig {
            credentials: CredentialsConfig {
                api_key_env: "TEXT_WORKFLOW_CLI_RUN_MISSING_KEY".to_string(),
            },
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_credential_reported_before_reading_input() {
        let args = TemplateArgs {
            id: "quick_summary".to_string(),
            input: InputArgs {
                input: Some(PathBuf::from("/nonexistent/text-workflow-input.txt")),
                text: None,
            },
        };

        let err = run_template_with_config(&config_without_key(), args)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WorkflowError>(),
            Some(WorkflowError::MissingCredential(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_template_reported_before_credential() {
        let args = TemplateArgs {
            id: "no_such_template".to_string(),
            input: InputArgs {
                input: None,
                text: Some("text".to_string()),
            },
        };

        let err = run_template_with_config(&config_without_key(), args)
            .await
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<WorkflowError>(),
            Some(WorkflowError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn test_parse_definition() {
        let definition = parse_definition(
            r#"{
                "name": "Test Workflow",
                "steps": [
                    {"type": "clean", "config": {}},
                    {"type": "summarize", "config": {}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(definition.name(), "Test Workflow");
        assert_eq!(definition.len(), 2);
        assert!(definition.validate().is_ok());
    }

    #[test]
    fn test_parse_definition_rejects_missing_name() {
        assert!(parse_definition(r#"{"steps": []}"#).is_err());
    }
}
