//! # Component Command
//!
//! Handles `generate c` / `generate component`.

use super::Outcome;
use crate::application::component;
use crate::domain::config::AppConfig;
use crate::domain::error::ScaffoldError;
use crate::domain::traits::Reporter;
use crate::domain::types::OverwritePolicy;
use crate::infrastructure::terminal::{self, ConsoleReporter};
use crate::strings::{logs, messages};
use std::path::Path;

pub async fn handle_component(config: &AppConfig, policy: OverwritePolicy, cwd: &Path) -> Outcome {
    let reporter = ConsoleReporter;
    match component::run(config, policy, cwd, terminal::terminal(), &reporter).await {
        Ok(_) => Outcome::Done,
        Err(e) => report_error(&e, config, cwd, &reporter),
    }
}

pub fn report_error(
    err: &ScaffoldError,
    config: &AppConfig,
    cwd: &Path,
    reporter: &dyn Reporter,
) -> Outcome {
    let output_root = cwd.join(&config.output_dir);
    let relative = |path: &Path| {
        path.strip_prefix(&output_root)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    let message = match err {
        ScaffoldError::MissingRequiredInput(_) => messages::COMPONENT_NAME_REQUIRED.to_string(),
        ScaffoldError::InvalidName(value) => messages::invalid_component_input(value),
        ScaffoldError::MissingTargetDirectory(path) => {
            messages::missing_location(&relative(path.as_path()), &config.output_dir)
        }
        ScaffoldError::DestinationConflict(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let location = path.parent().map(|p| relative(p)).unwrap_or_default();
            messages::component_exists(&name, &location)
        }
        _ => {
            tracing::error!("{}", logs::flow_failed(err));
            reporter.status(messages::GENERATOR_TERMINATED);
            return Outcome::Failed;
        }
    };

    reporter.status(&message);
    Outcome::Done
}
