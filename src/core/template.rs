//! `{{TOKEN}}` placeholder substitution for run documents.
//!
//! Templates are plain Markdown or text with `{{KEY}}` placeholders.
//! Defaults are compiled into the binary; a configured directory can
//! override any of them by file name.

use crate::core::error::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Replace every `{{KEY}}` with its value.
///
/// Keys are applied in order, each replacing all of its occurrences.
/// Placeholders without a mapping are left in place.
///
/// # Example
///
/// ```
/// use shorts_creator::core::template::fill_template;
///
/// let out = fill_template("Hi {{NAME}}, {{MISSING}}", &[("NAME", "Ada")]);
/// assert_eq!(out, "Hi Ada, {{MISSING}}");
/// ```
pub fn fill_template<K, V>(content: &str, mapping: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut filled = content.to_string();
    for (key, value) in mapping {
        let token = format!("{{{{{}}}}}", key.as_ref());
        filled = filled.replace(&token, value.as_ref());
    }
    filled
}

/// Read a template file and fill it.
pub fn fill_template_file<K, V>(path: impl AsRef<Path>, mapping: &[(K, V)]) -> Result<String>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let content = fs::read_to_string(path)?;
    Ok(fill_template(&content, mapping))
}

/// Placeholder names still present in `content`, sorted and deduplicated.
pub fn unresolved_placeholders(content: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(content)
        .map(|c| c[1].to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Documents produced for each planned run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    ChannelReport,
    ShortsScript,
    VeoPrompt,
}

impl TemplateKind {
    /// File name looked up in a template override directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::ChannelReport => "channel-report-template.md",
            TemplateKind::ShortsScript => "shorts-script-template.md",
            TemplateKind::VeoPrompt => "veo-prompt-template.txt",
        }
    }

    /// Built-in template content
    pub fn default_content(&self) -> &'static str {
        match self {
            TemplateKind::ChannelReport => {
                include_str!("../../assets/channel-report-template.md")
            }
            TemplateKind::ShortsScript => include_str!("../../assets/shorts-script-template.md"),
            TemplateKind::VeoPrompt => include_str!("../../assets/veo-prompt-template.txt"),
        }
    }
}

/// Resolves templates from an optional override directory
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    dir: Option<PathBuf>,
}

impl TemplateSet {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    /// Template set using only the built-in templates
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Load a template, preferring the override directory.
    pub fn load(&self, kind: TemplateKind) -> Result<String> {
        if let Some(dir) = &self.dir {
            let path = dir.join(kind.file_name());
            if path.is_file() {
                tracing::debug!("Using template override {:?}", path);
                return Ok(fs::read_to_string(path)?);
            }
        }
        Ok(kind.default_content().to_string())
    }

    /// Load and fill a template, logging any placeholder left unfilled.
    pub fn render<K, V>(&self, kind: TemplateKind, mapping: &[(K, V)]) -> Result<String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let rendered = fill_template(&self.load(kind)?, mapping);

        let leftover = unresolved_placeholders(&rendered);
        if !leftover.is_empty() {
            tracing::debug!(
                "Template {} has unfilled placeholders: {}",
                kind.file_name(),
                leftover.join(", ")
            );
        }

        Ok(rendered)
    }
}
