//! Command-line interface definitions.
//!
//! Every flag is optional; running with no arguments scans the current
//! directory with the default registry and report locations.

use clap::Parser;
use doc_drift::config::{
    DEFAULT_EXTENSION, DEFAULT_INVOCATION_VERB, DEFAULT_REGISTRY_FIELD, DEFAULT_REGISTRY_PATH,
    DEFAULT_REPORT_PATH,
};
use doc_drift::{MentionScope, ScanConfig};
use std::path::PathBuf;

/// Detect stale command and path references in project documentation.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Repository root to scan.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Command registry document, relative to the root.
    #[arg(long, default_value = DEFAULT_REGISTRY_PATH)]
    pub registry: PathBuf,

    /// Field of the registry document whose keys are the command names.
    #[arg(long, default_value = DEFAULT_REGISTRY_FIELD)]
    pub registry_field: String,

    /// Report destination, relative to the root.
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Tool name that precedes `run <command>` in the docs.
    #[arg(long, default_value = DEFAULT_INVOCATION_VERB)]
    pub verb: String,

    /// Documentation file extension to scan, without the dot. Repeatable.
    #[arg(long = "extension", default_value = DEFAULT_EXTENSION)]
    pub extensions: Vec<String>,

    /// Glob patterns for directories/files to exclude (e.g., "node_modules", "docs/archive/*").
    /// Entries starting with `.git` are always excluded.
    #[arg(short, long)]
    pub exclude: Vec<String>,

    /// Count the registry listing itself when deciding which commands the docs mention.
    #[arg(long)]
    pub whole_report_mentions: bool,

    /// Emit the report as JSON on stdout instead of a human-readable summary.
    #[arg(long)]
    pub json: bool,

    /// Print additional diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new(&self.root);
        config.registry_path = self.registry.clone();
        config.registry_field = self.registry_field.clone();
        config.report_path = self.output.clone();
        config.invocation_verb = self.verb.clone();
        config.extensions = self.extensions.clone();
        config.excludes = self.exclude.clone();
        if self.whole_report_mentions {
            config.mention_scope = MentionScope::WholeReport;
        }
        config
    }
}
