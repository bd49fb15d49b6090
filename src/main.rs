//! # create-custom-webapp
//!
//! Asks for an application name, copies the web-app template into `./<name>`,
//! customizes it and installs its dependencies.

use anyhow::{Context, Result};
use clap::Parser;
use custom_scaffold::application::bootstrap::BootstrapOptions;
use custom_scaffold::application::logging;
use custom_scaffold::domain::config::AppConfig;
use custom_scaffold::domain::types::OverwritePolicy;
use custom_scaffold::interface::commands::bootstrap::handle_bootstrap;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "create-custom-webapp",
    version,
    about = "Bootstrap a simple React web app from a template"
)]
struct Cli {
    /// Overwrite the destination folder if it already exists
    #[arg(long)]
    force: bool,

    /// Do not run the dependency installation step
    #[arg(long)]
    skip_install: bool,

    /// Configuration file (defaults to ./scaffold.yaml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let _guard = logging::init(&config, "create-custom-webapp")?;

    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let options = BootstrapOptions {
        policy: OverwritePolicy::from_force(cli.force),
        skip_install: cli.skip_install,
    };

    Ok(handle_bootstrap(&config, options, &cwd).await.into())
}
