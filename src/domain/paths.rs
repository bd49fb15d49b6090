//! # Paths
//!
//! Centralized definitions for template locations, generated file names and
//! configuration file lookup.

use std::path::{Component, Path};

/// Templates shipped alongside the crate.
pub const BUNDLED_TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/templates");
pub const WEBAPP_TEMPLATE: &str = "webapp";
pub const COMPONENT_TEMPLATE: &str = "component";

pub const TEMPLATES_DIR_ENV: &str = "SCAFFOLD_TEMPLATES_DIR";
pub const CONFIG_FILE: &str = "scaffold.yaml";
pub const CONFIG_DIR_NAME: &str = "custom-scaffold";
pub const USER_CONFIG_FILE: &str = "config.yaml";

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_COMPONENT_LOCATION: &str = "components";

/// Literal marker standing in for the application name inside the web-app template.
pub const APP_NAME_PLACEHOLDER: &str = "CGD_APP_NAME";
/// Word replaced by the component name, in file names and contents.
pub const COMPONENT_PLACEHOLDER: &str = "Component";

/// Component template files, in the order they are generated.
pub const COMPONENT_FILES: [&str; 3] = ["Component.tsx", "index.ts", "Component.test.tsx"];

/// Maps a template file name to its generated name: `Component.tsx` -> `Button.tsx`.
/// Names that do not start with the placeholder are kept as they are.
pub fn component_file_name(template_name: &str, component_name: &str) -> String {
    match template_name.strip_prefix(COMPONENT_PLACEHOLDER) {
        Some(rest) => format!("{component_name}{rest}"),
        None => template_name.to_string(),
    }
}

/// True when `name` is exactly one normal path segment (no separators, not `.`/`..`).
pub fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_file_name() {
        assert_eq!(component_file_name("Component.tsx", "Button"), "Button.tsx");
        assert_eq!(
            component_file_name("Component.test.tsx", "Button"),
            "Button.test.tsx"
        );
        assert_eq!(component_file_name("index.ts", "Button"), "index.ts");
    }

    #[test]
    fn test_single_segment() {
        assert!(is_single_segment("demo"));
        assert!(is_single_segment("my-app_2"));
        assert!(!is_single_segment(""));
        assert!(!is_single_segment("."));
        assert!(!is_single_segment(".."));
        assert!(!is_single_segment("a/b"));
        assert!(!is_single_segment("/abs"));
        assert!(!is_single_segment("a\\b"));
    }
}
