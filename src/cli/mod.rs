//! CLI module for the text workflow runner
//!
//! Provides subcommands for driving the workflow engine from a terminal:
//! - `run`: run a workflow definition file
//! - `template`: run a built-in workflow template
//! - `step`: run a single step
//! - `steps` / `templates`: list the step registry and built-in templates

pub mod catalog;
pub mod run;
pub mod step;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Text workflow runner - chain generative-text steps over an input text
#[derive(Parser)]
#[command(name = "text-workflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run a workflow definition (JSON file)
    Run(run::RunArgs),

    /// Run a built-in workflow template
    Template(run::TemplateArgs),

    /// Run a single step
    Step(step::StepArgs),

    /// List registered step types
    Steps(catalog::CatalogArgs),

    /// List built-in workflow templates
    Templates(catalog::CatalogArgs),
}

/// Where the initial text comes from
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Read the input text from a file
    #[arg(long, short = 'i', conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Use the given string as input text
    #[arg(long, short = 't')]
    pub text: Option<String>,
}

impl InputArgs {
    /// Resolve the input text, falling back to stdin
    pub async fn read(&self) -> anyhow::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }

        if let Some(path) = &self.input {
            return tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()));
        }

        let mut buffer = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buffer)
            .await
            .context("Failed to read input from stdin")?;
        Ok(buffer)
    }
}

/// Load `.env`, layered configuration, and install logging
pub fn bootstrap() -> AppConfig {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);
    config
}
