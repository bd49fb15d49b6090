//! # Command Handlers
//!
//! One handler per tool mode. Handlers own the terminal for the duration of a flow and
//! translate its result into user-facing messages.

pub mod bootstrap;
pub mod component;
pub mod help;

use std::process::ExitCode;

/// How a command ended. Validation problems still count as `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Done => ExitCode::SUCCESS,
            Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Modes of the `generate` tool, selected by its first argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    Component,
    Help,
}

impl GenerateMode {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("c" | "component") => Self::Component,
            _ => Self::Help,
        }
    }
}
