//! Documentation scanner.
//!
//! Recursively walks the repository root to collect documentation files,
//! skipping any entry whose name starts with `.git` plus any user-supplied
//! exclude globs. Each file's text is then run through an [`Extractor`], which
//! pulls out command invocations, `scripts/` and `src/` path fragments, and
//! token-boundary mentions of registry command names.

use crate::error::{DriftError, Result};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The four things the extractor looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CommandInvocations,
    CommandKeyMentions,
    ScriptPaths,
    SourcePaths,
}

impl Category {
    /// Report order.
    pub const ALL: [Category; 4] = [
        Category::CommandInvocations,
        Category::CommandKeyMentions,
        Category::ScriptPaths,
        Category::SourcePaths,
    ];

    /// Whether matches in this category are filesystem paths that get an existence check.
    pub fn is_path(self) -> bool {
        matches!(self, Category::ScriptPaths | Category::SourcePaths)
    }
}

/// Per-file extraction result. Each list is free of duplicates and keeps
/// first-occurrence order, except `command_key_mentions`, which keeps registry order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub command_invocations: Vec<String>,
    pub command_key_mentions: Vec<String>,
    pub script_paths: Vec<String>,
    pub source_paths: Vec<String>,
}

impl Extraction {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::CommandInvocations => &self.command_invocations,
            Category::CommandKeyMentions => &self.command_key_mentions,
            Category::ScriptPaths => &self.script_paths,
            Category::SourcePaths => &self.source_paths,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// Script fragments followed by source fragments.
    pub fn path_fragments(&self) -> impl Iterator<Item = &str> {
        self.script_paths
            .iter()
            .chain(&self.source_paths)
            .map(String::as_str)
    }
}

/// Compiled patterns for one invocation verb.
#[derive(Debug, Clone)]
pub struct Extractor {
    invocation: Regex,
    script_path: Regex,
    source_path: Regex,
}

impl Extractor {
    /// Builds an extractor recognising `<verb> [run|run-script] <command>`.
    ///
    /// The verb is matched literally and case-insensitively.
    pub fn new(verb: &str) -> Result<Self> {
        Ok(Self {
            invocation: compile(&format!(
                r"(?i)\b{}\s*(?:run|run-script)?\s+([A-Za-z0-9:_-]+)\b",
                regex::escape(verb)
            ))?,
            script_path: compile(r"(?i)\b(?:scripts|script)[/\\][\w\-./\\]+")?,
            source_path: compile(r"(?i)\bsrc[/\\][\w\-./\\]+")?,
        })
    }

    /// Extracts all four categories from `text`. Never fails; no matches
    /// yields an empty extraction.
    pub fn extract(&self, text: &str, commands: &[String]) -> Extraction {
        let command_invocations = unique(
            self.invocation
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str()),
        );
        let script_paths = unique(self.script_path.find_iter(text).map(|m| m.as_str()));
        let source_paths = unique(self.source_path.find_iter(text).map(|m| m.as_str()));
        let command_key_mentions = unique(
            commands
                .iter()
                .map(String::as_str)
                .filter(|name| mentions_token(text, name)),
        );

        Extraction {
            command_invocations,
            command_key_mentions,
            script_paths,
            source_paths,
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| DriftError::InvalidRegex {
        pattern: pattern.to_string(),
        source,
    })
}

fn unique<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .filter(|item| seen.insert(*item))
        .map(str::to_string)
        .collect()
}

/// Characters that extend an identifier and therefore break a token boundary.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | ':' | '-')
}

/// Returns true if `name` occurs in `text` with no identifier character
/// directly before or after it.
///
/// `build` matches in `run build now` and `` `build` `` but not in
/// `rebuild-all` or `build:prod`.
pub fn mentions_token(text: &str, name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };

    let mut from = 0;
    while let Some(pos) = text[from..].find(name) {
        let start = from + pos;
        let end = start + name.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char) {
            return true;
        }
        from = start + first.len_utf8();
    }

    false
}

/// Collects documentation files under `root`, sorted by path.
///
/// Entries whose name starts with `.git` are never descended into. `excludes`
/// are glob patterns tested against both the entry's file name and its path
/// relative to `root`.
pub fn collect_doc_files(
    root: &Path,
    extensions: &[String],
    excludes: &[String],
) -> Result<Vec<PathBuf>> {
    let patterns = excludes
        .iter()
        .map(|pattern| {
            glob::Pattern::new(pattern).map_err(|source| DriftError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_excluded(e, root, &patterns))
    {
        let entry = entry?;
        let path = entry.path();
        if path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| extensions.iter().any(|wanted| wanted == ext))
        {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_excluded(entry: &walkdir::DirEntry, root: &Path, patterns: &[glob::Pattern]) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with(".git") {
        return true;
    }

    let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
    patterns
        .iter()
        .any(|p| p.matches(&name) || p.matches_path(relative))
}
