//! # Logging Setup
//!
//! Installs the global `tracing` subscriber. Diagnostics go to stderr so they never
//! interleave with prompts on stdout; an optional log file receives a plain-text copy.

use crate::domain::config::AppConfig;
use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const DEFAULT_FILTER: &str = "warn";

/// Keep the returned guard alive for the whole process, otherwise buffered file
/// output is lost.
pub fn init(config: &AppConfig, tool: &str) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match &config.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .with_context(|| format!("log_file {} has no file name", path.display()))?;
            std::fs::create_dir_all(directory)
                .with_context(|| format!("Failed to create log directory {}", directory.display()))?;

            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    tracing::info!("{}", crate::strings::logs::session_start(tool, &timestamp));

    Ok(guard)
}
