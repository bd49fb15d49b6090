//! # Errors
//!
//! Failure kinds surfaced by the prompt engine, the template instantiator and the
//! orchestrators. Validation errors get a specific user-facing message; everything
//! else collapses into one generic "exited unexpectedly" report.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("a value for '{0}' is required")]
    MissingRequiredInput(String),

    #[error("'{0}' is not a valid name")]
    InvalidName(String),

    #[error("destination {} already exists", .0.display())]
    DestinationConflict(PathBuf),

    #[error("target directory {} does not exist", .0.display())]
    MissingTargetDirectory(PathBuf),

    #[error("input ended before '{0}' was answered")]
    PromptAborted(String),

    #[error("invalid question set: {0}")]
    InvalidQuestionSet(String),

    #[error("template {} not found", .0.display())]
    MissingTemplate(PathBuf),

    #[error("`{command}` failed: {reason}")]
    ExternalProcessFailure { command: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Validation errors are reported to the user verbatim and end the flow cleanly.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingRequiredInput(_)
                | Self::InvalidName(_)
                | Self::DestinationConflict(_)
                | Self::MissingTargetDirectory(_)
        )
    }
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(ScaffoldError::MissingRequiredInput("appName".into()).is_validation());
        assert!(ScaffoldError::DestinationConflict(PathBuf::from("demo")).is_validation());
        assert!(!ScaffoldError::PromptAborted("appName".into()).is_validation());
        assert!(
            !ScaffoldError::ExternalProcessFailure {
                command: "npm install".into(),
                reason: "exit status: 1".into(),
            }
            .is_validation()
        );
    }
}
