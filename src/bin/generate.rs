// Code generator: `generate c` creates a component, anything else prints the menu.

use anyhow::{Context, Result};
use clap::Parser;
use custom_scaffold::application::logging;
use custom_scaffold::domain::config::AppConfig;
use custom_scaffold::domain::types::OverwritePolicy;
use custom_scaffold::infrastructure::terminal::ConsoleReporter;
use custom_scaffold::interface::commands::component::handle_component;
use custom_scaffold::interface::commands::help::handle_help;
use custom_scaffold::interface::commands::GenerateMode;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "generate", disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// `c` / `component`, or `-h` / `--help`
    #[arg(allow_hyphen_values = true)]
    command: Option<String>,

    #[arg(long)]
    force: bool,

    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let outcome = match GenerateMode::from_arg(args.command.as_deref()) {
        GenerateMode::Help => handle_help(&ConsoleReporter),
        GenerateMode::Component => {
            let config =
                AppConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
            let _guard = logging::init(&config, "generate")?;
            let cwd = std::env::current_dir().context("Failed to resolve current directory")?;

            handle_component(&config, OverwritePolicy::from_force(args.force), &cwd).await
        }
    };

    Ok(outcome.into())
}
