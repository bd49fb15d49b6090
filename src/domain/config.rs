//! # Configuration
//!
//! Manages the loading and parsing of the optional configuration file (`scaffold.yaml`).
//! Every key has a default, so running without any file behaves like a stock install.

use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::paths;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration structure.
/// Matches the layout of `scaffold.yaml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Root holding the `webapp` and `component` templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub install: InstallConfig,
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InstallConfig {
    #[serde(default = "default_install_command")]
    pub command: String,
    #[serde(default = "default_install_timeout")]
    pub timeout_secs: u64,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            command: default_install_command(),
            timeout_secs: default_install_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            templates_dir: None,
            output_dir: default_output_dir(),
            placeholder: default_placeholder(),
            install: InstallConfig::default(),
            log_file: None,
        }
    }
}

fn default_output_dir() -> String {
    paths::DEFAULT_OUTPUT_DIR.to_string()
}

fn default_placeholder() -> String {
    paths::APP_NAME_PLACEHOLDER.to_string()
}

fn default_install_command() -> String {
    "npm install".to_string()
}

fn default_install_timeout() -> u64 {
    600
}

impl AppConfig {
    pub fn from_yaml(content: &str) -> ScaffoldResult<Self> {
        serde_yaml::from_str(content).map_err(|e| ScaffoldError::Config(e.to_string()))
    }

    /// Loads the configuration.
    ///
    /// An explicit path must exist. Otherwise `./scaffold.yaml` and then the user config
    /// directory are tried, falling back to defaults when neither is present.
    pub fn load(explicit: Option<&Path>) -> ScaffoldResult<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::discover(),
        };

        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(&path).map_err(|e| {
                    ScaffoldError::io(format!("failed to read {}", path.display()), e)
                })?;
                tracing::debug!("{}", crate::strings::logs::config_loaded(&path));
                Self::from_yaml(&content)?
            }
            None => Self::default(),
        };

        if let Ok(dir) = std::env::var(paths::TEMPLATES_DIR_ENV)
            && !dir.is_empty()
        {
            config.templates_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    fn discover() -> Option<PathBuf> {
        let local = PathBuf::from(paths::CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join(paths::CONFIG_DIR_NAME).join(paths::USER_CONFIG_FILE))
            .filter(|path| path.is_file())
    }

    /// Templates root, defaulting to the directory bundled with the crate.
    pub fn templates_root(&self) -> PathBuf {
        self.templates_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(paths::BUNDLED_TEMPLATES_DIR))
    }

    pub fn webapp_template(&self) -> PathBuf {
        self.templates_root().join(paths::WEBAPP_TEMPLATE)
    }

    pub fn component_template(&self) -> PathBuf {
        self.templates_root().join(paths::COMPONENT_TEMPLATE)
    }
}
