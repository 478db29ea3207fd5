//! Catalogue commands - list step types and built-in templates

use clap::Args;
use serde::Serialize;

use crate::domain::{StepType, builtin_templates};

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct StepTypeEntry {
    id: &'static str,
    label: &'static str,
    description: &'static str,
}

fn step_entries() -> Vec<StepTypeEntry> {
    StepType::all()
        .iter()
        .map(|step_type| StepTypeEntry {
            id: step_type.as_str(),
            label: step_type.label(),
            description: step_type.description(),
        })
        .collect()
}

pub fn list_steps(args: CatalogArgs) -> anyhow::Result<()> {
    let entries = step_entries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in entries {
        println!("{:<10} {}", entry.id, entry.description);
    }
    Ok(())
}

pub fn list_templates(args: CatalogArgs) -> anyhow::Result<()> {
    let templates = builtin_templates();

    if args.json {
        println!("{}", serde_json::to_string_pretty(templates)?);
        return Ok(());
    }

    for template in templates {
        let steps: Vec<&str> = template.steps().iter().map(StepType::as_str).collect();
        println!("{:<20} {}", template.id(), steps.join(" -> "));
        println!("{:<20} {}", "", template.description());
    }
    Ok(())
}
