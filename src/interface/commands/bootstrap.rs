//! # Bootstrap Command
//!
//! Entry point of `create-custom-webapp`. Runs the bootstrap flow on the terminal and
//! turns its outcome into user-facing messages and an exit code.

use super::Outcome;
use crate::application::bootstrap::{self, BootstrapOptions};
use crate::domain::config::AppConfig;
use crate::domain::error::ScaffoldError;
use crate::domain::traits::Reporter;
use crate::infrastructure::terminal::{self, ConsoleReporter};
use crate::infrastructure::tools::executor::CommandInstaller;
use crate::strings::{logs, messages};
use std::path::Path;

pub async fn handle_bootstrap(config: &AppConfig, options: BootstrapOptions, cwd: &Path) -> Outcome {
    let installer = CommandInstaller::from_config(&config.install);
    let reporter = ConsoleReporter;

    let result = bootstrap::run(
        config,
        options,
        cwd,
        terminal::terminal(),
        &installer,
        &reporter,
    )
    .await;

    match result {
        Ok(_) => Outcome::Done,
        Err(e) => report_error(&e, &reporter),
    }
}

/// Validation errors get a specific message and a clean exit; everything else is
/// reported generically.
pub fn report_error(err: &ScaffoldError, reporter: &dyn Reporter) -> Outcome {
    let message = match err {
        ScaffoldError::MissingRequiredInput(_) => messages::APP_NAME_REQUIRED.to_string(),
        ScaffoldError::InvalidName(name) => messages::invalid_app_name(name),
        ScaffoldError::DestinationConflict(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            messages::app_exists(&name)
        }
        _ => {
            tracing::error!("{}", logs::flow_failed(err));
            reporter.status(messages::APP_QUIT_UNEXPECTEDLY);
            return Outcome::Failed;
        }
    };

    reporter.status(&message);
    Outcome::Done
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingReporter(Mutex<Vec<String>>);

    impl Reporter for RecordingReporter {
        fn status(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_validation_errors_exit_cleanly() {
        let reporter = RecordingReporter::default();
        let code = report_error(
            &ScaffoldError::DestinationConflict(PathBuf::from("/work/demo")),
            &reporter,
        );

        assert_eq!(code, Outcome::Done);
        assert_eq!(*reporter.0.lock().unwrap(), vec![messages::app_exists("demo")]);
    }

    #[test]
    fn test_abort_and_process_failure_share_one_message() {
        for err in [
            ScaffoldError::PromptAborted("appName".into()),
            ScaffoldError::ExternalProcessFailure {
                command: "npm install".into(),
                reason: "exit status: 1".into(),
            },
        ] {
            let reporter = RecordingReporter::default();
            assert_eq!(report_error(&err, &reporter), Outcome::Failed);
            assert_eq!(
                *reporter.0.lock().unwrap(),
                vec![messages::APP_QUIT_UNEXPECTEDLY.to_string()]
            );
        }
    }
}
