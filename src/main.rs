use clap::Parser;
use text_workflow_runner::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run(args) => cli::run::run(args).await,
        Command::Template(args) => cli::run::run_template(args).await,
        Command::Step(args) => cli::step::run(args).await,
        Command::Steps(args) => cli::catalog::list_steps(args),
        Command::Templates(args) => cli::catalog::list_templates(args),
    }
}
