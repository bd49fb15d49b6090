//! # Bootstrap Flow
//!
//! Creates a new web-app project from the bundled template: ask for the application
//! name, copy the whole template tree, replace the placeholder token with the name,
//! then install dependencies.

use crate::application::{instantiator, prompt};
use crate::domain::config::AppConfig;
use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::paths;
use crate::domain::traits::{DependencyInstaller, PromptChannel, Reporter};
use crate::domain::types::{OverwritePolicy, Question, SubstitutionRule, TemplateDescriptor};
use crate::strings::{logs, messages};
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "appName";

#[derive(Debug, Clone, Copy, Default)]
pub struct BootstrapOptions {
    pub policy: OverwritePolicy,
    pub skip_install: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOutcome {
    pub app_name: String,
    pub destination: PathBuf,
    pub files: usize,
    pub installed: bool,
}

pub fn questions() -> Vec<Question> {
    vec![Question::new(APP_NAME, messages::APP_NAME_QUESTION)]
}

/// Prompts for the application name, then bootstraps it under `cwd`.
pub async fn run<C: PromptChannel>(
    config: &AppConfig,
    options: BootstrapOptions,
    cwd: &Path,
    channel: C,
    installer: &dyn DependencyInstaller,
    reporter: &dyn Reporter,
) -> ScaffoldResult<BootstrapOutcome> {
    let answers = prompt::prompt(&questions(), channel).await?;
    let app_name = answers.get(APP_NAME).unwrap_or_default();
    bootstrap(config, options, cwd, app_name, installer, reporter).await
}

/// Copies the web-app template to `<cwd>/<app_name>` and customizes it.
///
/// Nothing is rolled back when a later step fails.
pub async fn bootstrap(
    config: &AppConfig,
    options: BootstrapOptions,
    cwd: &Path,
    app_name: &str,
    installer: &dyn DependencyInstaller,
    reporter: &dyn Reporter,
) -> ScaffoldResult<BootstrapOutcome> {
    let app_name = app_name.trim();
    if app_name.is_empty() {
        return Err(ScaffoldError::MissingRequiredInput(APP_NAME.to_string()));
    }
    if !paths::is_single_segment(app_name) {
        return Err(ScaffoldError::InvalidName(app_name.to_string()));
    }

    let descriptor = TemplateDescriptor::new(config.webapp_template(), cwd.join(app_name));

    reporter.status(messages::BOOTSTRAPPING);
    let copied = instantiator::copy_tree(&descriptor, options.policy)?;

    reporter.status(messages::CUSTOMIZING);
    let rule = SubstitutionRule::literal(config.placeholder.as_str(), app_name);
    let rewritten = instantiator::substitute_tree(&descriptor.destination, &[rule])?;
    tracing::info!("{}", logs::substituted(rewritten, &descriptor.destination));

    let installed = if options.skip_install {
        reporter.status(messages::INSTALL_SKIPPED);
        false
    } else {
        reporter.status(messages::INSTALLING);
        installer.install(&descriptor.destination).await?;
        true
    };

    reporter.status(&messages::run_instructions(app_name));

    Ok(BootstrapOutcome {
        app_name: app_name.to_string(),
        destination: descriptor.destination,
        files: copied.len(),
        installed,
    })
}
