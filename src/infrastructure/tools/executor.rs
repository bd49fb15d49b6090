//! # Command Installer
//!
//! Runs the dependency-installation command through the platform shell, blocking the
//! flow until it exits. Output is captured for the log; only the exit status decides
//! success.

use crate::domain::config::InstallConfig;
use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::traits::DependencyInstaller;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CommandInstaller {
    command: String,
    timeout: Duration,
}

impl CommandInstaller {
    pub fn new(command: impl Into<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    pub fn from_config(config: &InstallConfig) -> Self {
        Self::new(config.command.clone(), Duration::from_secs(config.timeout_secs))
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn failure(&self, reason: impl Into<String>) -> ScaffoldError {
        ScaffoldError::ExternalProcessFailure {
            command: self.command.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl DependencyInstaller for CommandInstaller {
    async fn install(&self, project_root: &Path) -> ScaffoldResult<()> {
        let mut cmd = if cfg!(target_os = "windows") {
            let mut c = tokio::process::Command::new("cmd");
            c.args(["/C", self.command.as_str()]);
            c
        } else {
            let mut c = tokio::process::Command::new("sh");
            c.args(["-c", self.command.as_str()]);
            c
        };

        cmd.current_dir(project_root);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.kill_on_drop(true);

        tracing::info!(
            "{}",
            crate::strings::logs::install_started(&self.command, project_root)
        );

        let child = cmd
            .spawn()
            .map_err(|e| self.failure(format!("failed to spawn: {e}")))?;

        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| self.failure(format!("timed out after {}s", self.timeout.as_secs())))?
            .map_err(|e| self.failure(e.to_string()))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stdout.is_empty() {
            tracing::debug!("{}", stdout);
        }
        if !stderr.is_empty() {
            tracing::debug!("{}", stderr);
        }

        if !output.status.success() {
            return Err(self.failure(output.status.to_string()));
        }

        tracing::info!("{}", crate::strings::logs::install_finished(&self.command));
        Ok(())
    }
}
