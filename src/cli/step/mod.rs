//! Step command - runs a single step for ad-hoc testing

use anyhow::anyhow;
use clap::Args;
use serde_json::Value;

use super::{InputArgs, bootstrap};
use crate::config::AppConfig;
use crate::domain::{StepConfig, StepType, WorkflowExecutor};

#[derive(Args, Debug)]
pub struct StepArgs {
    /// Step type, see `steps`
    pub step_type: String,

    /// Extra instruction as key=value; values that parse as JSON are kept typed
    #[arg(long = "config", short = 'c', value_parser = parse_config_entry)]
    pub config: Vec<(String, Value)>,

    #[command(flatten)]
    pub input: InputArgs,
}

pub async fn run(args: StepArgs) -> anyhow::Result<()> {
    let config = bootstrap();
    run_with_config(&config, args).await
}

async fn run_with_config(config: &AppConfig, args: StepArgs) -> anyhow::Result<()> {
    // Reject unknown types before touching the credential or stdin
    let step_type: StepType = args.step_type.parse()?;
    let step_config: StepConfig = args.config.into_iter().collect();

    let runner = crate::create_runner(config).await?;
    let input = args.input.read().await?;

    let output = runner
        .run_step(step_type.as_str(), &input, &step_config)
        .await?;

    println!("{}", output);
    Ok(())
}

fn parse_config_entry(raw: &str) -> anyhow::Result<(String, Value)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(anyhow!("config key cannot be empty"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
