//! # Component Flow
//!
//! Generates a UI component triplet (`<Name>.tsx`, `index.ts`, `<Name>.test.tsx`)
//! under `<output>/<location>/<Name>` from the component template.

use crate::application::{instantiator, prompt};
use crate::domain::config::AppConfig;
use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::paths;
use crate::domain::traits::{PromptChannel, Reporter};
use crate::domain::types::{OverwritePolicy, Question, SubstitutionRule};
use crate::strings::{logs, messages};
use regex::Regex;
use std::fs;
use std::path::{Component as PathComponent, Path, PathBuf};

pub const COMPONENT_NAME: &str = "componentName";
pub const LOCATION: &str = "location";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentOutcome {
    pub name: String,
    pub location: String,
    pub destination: PathBuf,
    pub files: Vec<PathBuf>,
}

pub fn questions() -> Vec<Question> {
    vec![
        Question::new(COMPONENT_NAME, messages::COMPONENT_NAME_QUESTION).with_default(""),
        Question::new(LOCATION, messages::LOCATION_QUESTION)
            .with_default(paths::DEFAULT_COMPONENT_LOCATION),
    ]
}

/// Prompts for the component name and location, then generates the component.
pub async fn run<C: PromptChannel>(
    config: &AppConfig,
    policy: OverwritePolicy,
    cwd: &Path,
    channel: C,
    reporter: &dyn Reporter,
) -> ScaffoldResult<ComponentOutcome> {
    let answers = prompt::prompt(&questions(), channel).await?;
    let name = answers.get(COMPONENT_NAME).unwrap_or_default();
    let location = answers
        .get(LOCATION)
        .unwrap_or(paths::DEFAULT_COMPONENT_LOCATION);
    generate(config, policy, cwd, name, location, reporter)
}

/// Writes the component triplet.
///
/// `<cwd>/<output>/<location>` must already exist; the component directory itself
/// must not, unless `policy` allows overwriting.
pub fn generate(
    config: &AppConfig,
    policy: OverwritePolicy,
    cwd: &Path,
    name: &str,
    location: &str,
    reporter: &dyn Reporter,
) -> ScaffoldResult<ComponentOutcome> {
    let name = name.trim();
    let location = location.trim();
    if name.is_empty() {
        return Err(ScaffoldError::MissingRequiredInput(COMPONENT_NAME.to_string()));
    }
    if !paths::is_single_segment(name) {
        return Err(ScaffoldError::InvalidName(name.to_string()));
    }
    if !is_relative_location(location) {
        return Err(ScaffoldError::InvalidName(location.to_string()));
    }

    let parent = cwd.join(&config.output_dir).join(location);
    if !parent.is_dir() {
        return Err(ScaffoldError::MissingTargetDirectory(parent));
    }

    let destination = parent.join(name);
    if destination.exists() && policy == OverwritePolicy::Reject {
        return Err(ScaffoldError::DestinationConflict(destination));
    }

    let template = config.component_template();
    if let Some(missing) = paths::COMPONENT_FILES
        .iter()
        .map(|file| template.join(file))
        .find(|source| !source.is_file())
    {
        return Err(ScaffoldError::MissingTemplate(missing));
    }

    fs::create_dir_all(&destination).map_err(|e| {
        ScaffoldError::io(format!("failed to create {}", destination.display()), e)
    })?;

    let pattern = Regex::new(&regex::escape(paths::COMPONENT_PLACEHOLDER))
        .map_err(|e| ScaffoldError::Config(e.to_string()))?;
    let rule = SubstitutionRule::regex(pattern, name);
    let files = instantiator::copy_renamed(
        &template,
        &destination,
        &paths::COMPONENT_FILES,
        name,
        &rule,
    )?;

    tracing::info!("{}", logs::component_created(name, &destination));
    reporter.status(&messages::component_generated(name, location));

    Ok(ComponentOutcome {
        name: name.to_string(),
        location: location.to_string(),
        destination,
        files,
    })
}

/// Location must stay inside the output directory: relative, no `..`.
fn is_relative_location(location: &str) -> bool {
    !location.is_empty()
        && Path::new(location)
            .components()
            .all(|c| matches!(c, PathComponent::Normal(_) | PathComponent::CurDir))
}
