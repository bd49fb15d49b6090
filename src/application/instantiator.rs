//! # Template Instantiator
//!
//! Copies template trees or individual template files to a destination and rewrites
//! placeholder text in place. Substitution always runs after the copy and reads each
//! file whole.

use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::paths;
use crate::domain::types::{OverwritePolicy, SubstitutionRule, TemplateDescriptor};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively copies `descriptor.source` (a directory or a single file) to
/// `descriptor.destination`, preserving names and structure.
///
/// Returns the destination paths of every copied file.
pub fn copy_tree(
    descriptor: &TemplateDescriptor,
    policy: OverwritePolicy,
) -> ScaffoldResult<Vec<PathBuf>> {
    let TemplateDescriptor {
        source,
        destination,
    } = descriptor;

    if !source.exists() {
        return Err(ScaffoldError::MissingTemplate(source.clone()));
    }
    ensure_free(destination, policy)?;

    if source.is_file() {
        copy_file(source, destination)?;
        return Ok(vec![destination.clone()]);
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(source, e))?;

        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| ScaffoldError::io("template path", std::io::Error::other(e)))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                ScaffoldError::io(format!("failed to create {}", target.display()), e)
            })?;
        } else {
            copy_file(entry.path(), &target)?;
            copied.push(target);
        }
    }

    tracing::debug!(
        "{}",
        crate::strings::logs::tree_copied(source, destination, copied.len())
    );
    Ok(copied)
}

/// Copies each named template file into `destination`, renaming
/// `Component.<ext>` after `component_name`, and rewrites the copy immediately.
///
/// `destination` must already exist.
pub fn copy_renamed(
    template_dir: &Path,
    destination: &Path,
    files: &[&str],
    component_name: &str,
    rule: &SubstitutionRule,
) -> ScaffoldResult<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(files.len());

    for file in files {
        let source = template_dir.join(file);
        if !source.is_file() {
            return Err(ScaffoldError::MissingTemplate(source));
        }

        let target = destination.join(paths::component_file_name(file, component_name));
        copy_file(&source, &target)?;
        replace_in_file(&target, rule)?;
        created.push(target);
    }

    Ok(created)
}

/// Replaces every match of `rule` in the file at `path`.
///
/// Returns `false` without touching the file when nothing matched or the file is not
/// UTF-8 text.
pub fn replace_in_file(path: &Path, rule: &SubstitutionRule) -> ScaffoldResult<bool> {
    replace_all_in_file(path, std::slice::from_ref(rule))
}

/// Applies every rule under `root`, file by file. Returns the number of rewritten files.
pub fn substitute_tree(root: &Path, rules: &[SubstitutionRule]) -> ScaffoldResult<usize> {
    let mut rewritten = 0;

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|e| walk_error(root, e))?;

        if entry.file_type().is_file() && replace_all_in_file(entry.path(), rules)? {
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

fn replace_all_in_file(path: &Path, rules: &[SubstitutionRule]) -> ScaffoldResult<bool> {
    let bytes = fs::read(path)
        .map_err(|e| ScaffoldError::io(format!("failed to read {}", path.display()), e))?;

    let Ok(original) = String::from_utf8(bytes) else {
        tracing::debug!("{}", crate::strings::logs::skipped_binary(path));
        return Ok(false);
    };

    let mut content = original;
    let mut changed = false;
    for rule in rules {
        if let Some(updated) = rule.apply(&content) {
            content = updated;
            changed = true;
        }
    }

    if changed {
        fs::write(path, content)
            .map_err(|e| ScaffoldError::io(format!("failed to write {}", path.display()), e))?;
    }
    Ok(changed)
}

fn ensure_free(destination: &Path, policy: OverwritePolicy) -> ScaffoldResult<()> {
    if destination.exists() {
        match policy {
            OverwritePolicy::Reject => {
                return Err(ScaffoldError::DestinationConflict(destination.to_path_buf()));
            }
            OverwritePolicy::Overwrite => {
                tracing::warn!("{}", crate::strings::logs::overwriting(destination));
            }
        }
    }
    Ok(())
}

fn walk_error(root: &Path, e: walkdir::Error) -> ScaffoldError {
    let context = format!("failed to walk {}", root.display());
    match e.into_io_error() {
        Some(io) => ScaffoldError::io(context, io),
        None => ScaffoldError::io(context, std::io::Error::other("filesystem loop")),
    }
}

fn copy_file(source: &Path, target: &Path) -> ScaffoldResult<()> {
    if let Some(parent) = target.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ScaffoldError::io(format!("failed to create {}", parent.display()), e)
        })?;
    }
    fs::copy(source, target).map_err(|e| {
        ScaffoldError::io(
            format!("failed to copy {} to {}", source.display(), target.display()),
            e,
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use tempfile::TempDir;

    fn write(path: &Path, content: &[u8]) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn sample_template(root: &Path) -> PathBuf {
        let template = root.join("template");
        write(
            &template.join("package.json"),
            br#"{ "name": "CGD_APP_NAME", "description": "CGD_APP_NAME app" }"#,
        );
        write(
            &template.join("public/index.html"),
            b"<title>CGD_APP_NAME</title>\n<div id=\"root\"></div>\n",
        );
        write(&template.join("src/index.js"), b"import App from './App';\n");
        write(&template.join("public/favicon.ico"), &[0x00, 0xff, 0xfe, 0x43]);
        template
    }

    #[test]
    fn test_copy_tree_preserves_structure() {
        let dir = TempDir::new().unwrap();
        let template = sample_template(dir.path());
        let destination = dir.path().join("demo");

        let copied =
            copy_tree(&TemplateDescriptor::new(&template, &destination), OverwritePolicy::Reject)
                .unwrap();

        assert_eq!(copied.len(), 4);
        for rel in ["package.json", "public/index.html", "public/favicon.ico", "src/index.js"] {
            assert_eq!(
                fs::read(template.join(rel)).unwrap(),
                fs::read(destination.join(rel)).unwrap(),
                "{rel} differs"
            );
        }
    }

    #[test]
    fn test_copy_tree_rejects_existing_destination() {
        let dir = TempDir::new().unwrap();
        let template = sample_template(dir.path());
        let destination = dir.path().join("demo");
        fs::create_dir(&destination).unwrap();

        let err =
            copy_tree(&TemplateDescriptor::new(&template, &destination), OverwritePolicy::Reject)
                .unwrap_err();
        assert!(matches!(err, ScaffoldError::DestinationConflict(_)));
        assert!(fs::read_dir(&destination).unwrap().next().is_none());
    }

    #[test]
    fn test_copy_tree_overwrites_when_allowed() {
        let dir = TempDir::new().unwrap();
        let template = sample_template(dir.path());
        let destination = dir.path().join("demo");
        write(&destination.join("package.json"), b"stale");

        copy_tree(
            &TemplateDescriptor::new(&template, &destination),
            OverwritePolicy::Overwrite,
        )
        .unwrap();
        assert_ne!(fs::read(destination.join("package.json")).unwrap(), b"stale");
    }

    #[test]
    fn test_copy_tree_missing_source() {
        let dir = TempDir::new().unwrap();
        let err = copy_tree(
            &TemplateDescriptor::new(dir.path().join("nope"), dir.path().join("demo")),
            OverwritePolicy::Reject,
        )
        .unwrap_err();
        assert!(matches!(err, ScaffoldError::MissingTemplate(_)));
    }

    #[test]
    fn test_substitution_leaves_other_bytes_untouched() {
        let dir = TempDir::new().unwrap();
        let template = sample_template(dir.path());
        let destination = dir.path().join("demo");
        copy_tree(&TemplateDescriptor::new(&template, &destination), OverwritePolicy::Reject)
            .unwrap();

        let rewritten =
            substitute_tree(&destination, &[SubstitutionRule::literal("CGD_APP_NAME", "demo")])
                .unwrap();
        assert_eq!(rewritten, 2);

        assert_eq!(
            fs::read_to_string(destination.join("package.json")).unwrap(),
            r#"{ "name": "demo", "description": "demo app" }"#
        );
        assert_eq!(
            fs::read_to_string(destination.join("public/index.html")).unwrap(),
            "<title>demo</title>\n<div id=\"root\"></div>\n"
        );
        assert_eq!(
            fs::read(destination.join("src/index.js")).unwrap(),
            fs::read(template.join("src/index.js")).unwrap()
        );
        assert_eq!(
            fs::read(destination.join("public/favicon.ico")).unwrap(),
            vec![0x00, 0xff, 0xfe, 0x43]
        );
    }

    #[test]
    fn test_copy_renamed_rewrites_each_file() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("component");
        write(
            &template.join("Component.tsx"),
            b"const Component = () => <div>Component</div>;\nexport default Component;\n",
        );
        write(&template.join("index.ts"), b"export { default } from './Component';\n");
        let destination = dir.path().join("Button");
        fs::create_dir(&destination).unwrap();

        let rule = SubstitutionRule::regex(Regex::new("Component").unwrap(), "Button");
        let created = copy_renamed(
            &template,
            &destination,
            &["Component.tsx", "index.ts"],
            "Button",
            &rule,
        )
        .unwrap();

        assert_eq!(
            created,
            vec![destination.join("Button.tsx"), destination.join("index.ts")]
        );
        assert_eq!(
            fs::read_to_string(destination.join("Button.tsx")).unwrap(),
            "const Button = () => <div>Button</div>;\nexport default Button;\n"
        );
        assert_eq!(
            fs::read_to_string(destination.join("index.ts")).unwrap(),
            "export { default } from './Button';\n"
        );
    }

    #[test]
    fn test_replace_in_file_reports_no_match() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("plain.txt");
        write(&file, b"nothing to see");

        let changed =
            replace_in_file(&file, &SubstitutionRule::literal("CGD_APP_NAME", "demo")).unwrap();
        assert!(!changed);
        assert_eq!(fs::read_to_string(&file).unwrap(), "nothing to see");
    }
}
