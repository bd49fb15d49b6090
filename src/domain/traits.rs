//! # Domain Traits
//!
//! Abstract interfaces for the two external collaborators: the line-oriented text
//! channel the prompt engine talks through, and the dependency installer.

use crate::domain::error::ScaffoldResult;
use async_trait::async_trait;
use std::path::Path;

/// Line-oriented text channel (e.g. a terminal).
#[async_trait]
pub trait PromptChannel: Send {
    /// Write prompt text without a trailing newline.
    async fn write_prompt(&mut self, text: &str) -> ScaffoldResult<()>;

    /// Read one line. `Ok(None)` means the input has ended.
    async fn read_line(&mut self) -> ScaffoldResult<Option<String>>;

    /// Release the channel. No further reads happen afterwards.
    async fn close(&mut self) -> ScaffoldResult<()>;
}

/// Installs the dependencies of a freshly generated project.
#[async_trait]
pub trait DependencyInstaller: Send + Sync {
    /// Runs to completion with `project_root` as working directory.
    async fn install(&self, project_root: &Path) -> ScaffoldResult<()>;
}

/// Receives user-facing status lines while a flow runs.
pub trait Reporter: Send + Sync {
    fn status(&self, message: &str);
}
