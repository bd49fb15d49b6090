use std::path::Path;

pub fn session_start(tool: &str, timestamp: &str) -> String {
    format!("--- [{timestamp}] {tool} session started ---")
}

pub fn config_loaded(path: &Path) -> String {
    format!("Loaded configuration from {}", path.display())
}

pub fn answer_recorded(name: &str, answer: Option<&str>) -> String {
    format!("Answer for '{name}': {answer:?}")
}

pub fn tree_copied(source: &Path, destination: &Path, files: usize) -> String {
    format!(
        "Copied {files} file(s) from {} to {}",
        source.display(),
        destination.display()
    )
}

pub fn skipped_binary(path: &Path) -> String {
    format!("Skipping substitution in non-UTF-8 file {}", path.display())
}

pub fn overwriting(destination: &Path) -> String {
    format!("Overwriting existing destination {}", destination.display())
}

pub fn substituted(files: usize, destination: &Path) -> String {
    format!("Rewrote {files} file(s) under {}", destination.display())
}

pub fn install_started(command: &str, cwd: &Path) -> String {
    format!("Running `{command}` in {}", cwd.display())
}

pub fn install_finished(command: &str) -> String {
    format!("`{command}` finished")
}

pub fn component_created(name: &str, destination: &Path) -> String {
    format!("Component {name} written to {}", destination.display())
}

pub fn flow_failed(err: &dyn std::error::Error) -> String {
    format!("Flow failed: {err}")
}
