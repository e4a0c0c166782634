//! Scan configuration.
//!
//! Every location the scanner touches is carried here explicitly. `ScanConfig::new`
//! yields the defaults used when the binary is invoked without arguments.

use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_REGISTRY_PATH: &str = "package.json";
pub const DEFAULT_REGISTRY_FIELD: &str = "scripts";
pub const DEFAULT_REPORT_PATH: &str = "reports/doc-drift-report.txt";
pub const DEFAULT_INVOCATION_VERB: &str = "npm";
pub const DEFAULT_EXTENSION: &str = "md";

/// Which report lines the "not mentioned" substring test looks at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MentionScope {
    /// Every line up to and including the registry heading.
    #[default]
    BeforeRegistryEntries,
    /// Also the registry entry lines, so every listed command counts as mentioned.
    WholeReport,
}

#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Repository root. Relative paths below are resolved against it.
    pub root: PathBuf,
    pub registry_path: PathBuf,
    /// Field of the registry document whose keys are the command names.
    pub registry_field: String,
    pub report_path: PathBuf,
    /// Tool name preceding `run <command>` in docs.
    pub invocation_verb: String,
    /// Documentation file extensions, without the leading dot.
    pub extensions: Vec<String>,
    /// Glob patterns pruned from discovery, matched against file names and
    /// root-relative paths.
    pub excludes: Vec<String>,
    pub mention_scope: MentionScope,
}

impl ScanConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            registry_path: PathBuf::from(DEFAULT_REGISTRY_PATH),
            registry_field: DEFAULT_REGISTRY_FIELD.to_string(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            invocation_verb: DEFAULT_INVOCATION_VERB.to_string(),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            excludes: Vec::new(),
            mention_scope: MentionScope::default(),
        }
    }

    pub fn registry_file(&self) -> PathBuf {
        self.resolve(&self.registry_path)
    }

    pub fn report_file(&self) -> PathBuf {
        self.resolve(&self.report_path)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_under_root() {
        let config = ScanConfig::new("/repo");
        assert_eq!(config.registry_file(), PathBuf::from("/repo/package.json"));
        assert_eq!(
            config.report_file(),
            PathBuf::from("/repo/reports/doc-drift-report.txt")
        );
        assert_eq!(config.extensions, vec!["md"]);
        assert_eq!(config.mention_scope, MentionScope::BeforeRegistryEntries);
    }

    #[test]
    fn absolute_paths_are_kept() {
        let mut config = ScanConfig::new("/repo");
        config.report_path = PathBuf::from("/tmp/out.txt");
        assert_eq!(config.report_file(), PathBuf::from("/tmp/out.txt"));
    }
}
