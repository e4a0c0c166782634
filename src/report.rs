//! Drift report aggregation and rendering.
//!
//! The [`Aggregator`] folds per-file scan results into running totals and the
//! report body, then [`Aggregator::finish`] appends the summary, the registry
//! listing and the list of commands the docs never mention. The rendered text
//! is built once, line by line, so identical inputs always produce identical
//! bytes.

use crate::analyzer::PathCheck;
use crate::config::{MentionScope, ScanConfig};
use crate::error::{DriftError, Result};
use crate::scanner::{Category, Extraction};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One documentation file as handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileSection {
    Scanned {
        /// Path relative to the repository root.
        path: String,
        extraction: Extraction,
        checks: Vec<PathCheck>,
    },
    Unreadable {
        path: String,
        reason: String,
    },
}

/// Match counts per category, summed across files without de-duplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub command_invocations: usize,
    pub command_key_mentions: usize,
    pub script_paths: usize,
    pub source_paths: usize,
}

impl Totals {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::CommandInvocations => self.command_invocations,
            Category::CommandKeyMentions => self.command_key_mentions,
            Category::ScriptPaths => self.script_paths,
            Category::SourcePaths => self.source_paths,
        }
    }

    fn add(&mut self, extraction: &Extraction) {
        self.command_invocations += extraction.command_invocations.len();
        self.command_key_mentions += extraction.command_key_mentions.len();
        self.script_paths += extraction.script_paths.len();
        self.source_paths += extraction.source_paths.len();
    }
}

/// The finished report.
#[derive(Debug, Clone, Serialize)]
pub struct DriftReport {
    pub root: PathBuf,
    /// Every discovered file, including ones without matches or that failed to read.
    pub files_scanned: usize,
    /// Files with at least one match, and unreadable files, in scan order.
    pub sections: Vec<FileSection>,
    pub totals: Totals,
    /// Full registry, in registry order.
    pub commands: Vec<String>,
    pub not_mentioned: Vec<String>,
    #[serde(skip)]
    lines: Vec<String>,
}

impl DriftReport {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The report as newline-joined text.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Path fragments that did not resolve, with the file that mentioned them.
    pub fn stale_paths(&self) -> Vec<(&str, &PathCheck)> {
        self.sections
            .iter()
            .filter_map(|section| match section {
                FileSection::Scanned { path, checks, .. } => Some((path.as_str(), checks)),
                FileSection::Unreadable { .. } => None,
            })
            .flat_map(|(path, checks)| {
                checks
                    .iter()
                    .filter(|check| !check.exists)
                    .map(move |check| (path, check))
            })
            .collect()
    }

    pub fn unreadable_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| matches!(s, FileSection::Unreadable { .. }))
            .count()
    }
}

/// Incrementally builds a [`DriftReport`].
#[derive(Debug)]
pub struct Aggregator {
    root: PathBuf,
    commands: Vec<String>,
    verb: String,
    registry_heading: String,
    mention_scope: MentionScope,
    files_scanned: usize,
    sections: Vec<FileSection>,
    totals: Totals,
    body: Vec<String>,
}

impl Aggregator {
    pub fn new(config: &ScanConfig, root: &Path, commands: Vec<String>) -> Self {
        Self {
            root: root.to_path_buf(),
            commands,
            verb: config.invocation_verb.clone(),
            registry_heading: registry_heading(&config.registry_path, &config.registry_field),
            mention_scope: config.mention_scope,
            files_scanned: 0,
            sections: Vec::new(),
            totals: Totals::default(),
            body: Vec::new(),
        }
    }

    /// Folds one file into the report. Scanned files without any match only
    /// count towards `files_scanned`.
    pub fn push(&mut self, file: FileSection) {
        self.files_scanned += 1;

        match &file {
            FileSection::Scanned {
                path,
                extraction,
                checks,
            } => {
                if extraction.is_empty() {
                    return;
                }
                self.body.push(format!("File: {}", path));
                for category in Category::ALL {
                    let matches = extraction.get(category);
                    if matches.is_empty() {
                        continue;
                    }
                    self.body
                        .push(format!("  {}: {:?}", section_label(category, &self.verb), matches));
                    if category.is_path() {
                        for fragment in matches {
                            let exists = checks
                                .iter()
                                .find(|check| &check.fragment == fragment)
                                .is_some_and(|check| check.exists);
                            self.body
                                .push(format!("    -> {} exists: {}", fragment, exists));
                        }
                    }
                }
                self.totals.add(extraction);
            }
            FileSection::Unreadable { path, reason } => {
                self.body.push(format!("Could not read {}: {}", path, reason));
            }
        }

        self.body.push(String::new());
        self.sections.push(file);
    }

    pub fn finish(self) -> DriftReport {
        let mut lines = vec![
            format!("Repo root: {}", self.root.display()),
            String::new(),
            format!("Found {} markdown files to scan.", self.files_scanned),
            String::new(),
        ];
        lines.extend(self.body);

        lines.push("Summary:".to_string());
        for category in Category::ALL {
            lines.push(format!(
                "  {}: {}",
                summary_label(category, &self.verb),
                self.totals.get(category)
            ));
        }

        lines.push(String::new());
        lines.push(self.registry_heading);
        let before_entries = lines.len();
        lines.extend(self.commands.iter().map(|name| format!("  - {}", name)));

        let scope = match self.mention_scope {
            MentionScope::BeforeRegistryEntries => &lines[..before_entries],
            MentionScope::WholeReport => &lines[..],
        };
        let not_mentioned: Vec<String> = self
            .commands
            .iter()
            .filter(|name| !scope.iter().any(|line| line.contains(name.as_str())))
            .cloned()
            .collect();

        lines.push(String::new());
        lines.push("Scripts not mentioned in docs:".to_string());
        lines.extend(not_mentioned.iter().map(|name| format!("  - {}", name)));

        DriftReport {
            root: self.root,
            files_scanned: self.files_scanned,
            sections: self.sections,
            totals: self.totals,
            commands: self.commands,
            not_mentioned,
            lines,
        }
    }
}

/// `Package.json scripts:` for the default registry: the file name with its
/// first letter upper-cased, then the command field.
fn registry_heading(registry_path: &Path, field: &str) -> String {
    let name = registry_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| registry_path.display().to_string());
    let mut chars = name.chars();
    let name = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => name,
    };
    format!("{} {}:", name, field)
}

fn section_label(category: Category, verb: &str) -> String {
    match category {
        Category::CommandInvocations => format!("{} run occurrences", verb),
        Category::CommandKeyMentions => "script keys mentioned".to_string(),
        Category::ScriptPaths => "scripts/... fragments".to_string(),
        Category::SourcePaths => "src/... fragments".to_string(),
    }
}

fn summary_label(category: Category, verb: &str) -> String {
    match category {
        Category::CommandInvocations => format!("{} run matches", verb),
        Category::CommandKeyMentions => "script key mentions".to_string(),
        Category::ScriptPaths => "scripts/... fragments".to_string(),
        Category::SourcePaths => "src/... fragments".to_string(),
    }
}

/// Writes the report text to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, report: &DriftReport) -> Result<()> {
    let write = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, report.to_text())
    };

    write().map_err(|source| DriftError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}
