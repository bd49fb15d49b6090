//! # Domain Types
//!
//! Common data structures shared by the prompt engine, the template instantiator
//! and the orchestrators.

use regex::Regex;
use std::path::PathBuf;

/// A single interactive question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub message: String,
    pub default_value: Option<String>,
}

impl Question {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            default_value: None,
        }
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    /// Text shown before reading the answer, e.g. `Where? (components) • `.
    pub fn render(&self) -> String {
        match self.default_value.as_deref() {
            Some(default) if !default.is_empty() => {
                format!("{} ({}) • ", self.message, default)
            }
            _ => format!("{} • ", self.message),
        }
    }

    /// Trims the raw line and falls back to the default when nothing was typed.
    pub fn resolve(&self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.default_value.clone()
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Ordered mapping from question name to resolved answer.
///
/// Only the prompt engine builds one, and only after every question was answered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    entries: Vec<(String, Option<String>)>,
}

impl AnswerSet {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, name: &str, answer: Option<String>) {
        self.entries.push((name.to_string(), answer));
    }

    /// The resolved answer, or `None` when the question is unknown or had no default.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Question names in the order they were asked.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

/// What to do when a generation target already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    #[default]
    Reject,
    Overwrite,
}

impl OverwritePolicy {
    pub fn from_force(force: bool) -> Self {
        if force { Self::Overwrite } else { Self::Reject }
    }
}

/// Source/destination pair driving one copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl TemplateDescriptor {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum SearchPattern {
    Literal(String),
    Regex(Regex),
}

/// Replaces every occurrence of a pattern with a fixed string.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pub search: SearchPattern,
    pub replacement: String,
}

impl SubstitutionRule {
    pub fn literal(search: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            search: SearchPattern::Literal(search.into()),
            replacement: replacement.into(),
        }
    }

    pub fn regex(search: Regex, replacement: impl Into<String>) -> Self {
        Self {
            search: SearchPattern::Regex(search),
            replacement: replacement.into(),
        }
    }

    /// Returns the rewritten text, or `None` when nothing matched.
    pub fn apply(&self, content: &str) -> Option<String> {
        match &self.search {
            SearchPattern::Literal(needle) => {
                if needle.is_empty() || !content.contains(needle.as_str()) {
                    return None;
                }
                Some(content.replace(needle.as_str(), &self.replacement))
            }
            SearchPattern::Regex(re) => {
                if !re.is_match(content) {
                    return None;
                }
                Some(
                    re.replace_all(content, regex::NoExpand(&self.replacement))
                        .into_owned(),
                )
            }
        }
    }
}
