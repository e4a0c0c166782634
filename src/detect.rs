//! Repository-wide drift detection.
//!
//! Ties the collaborators together: load the registry, discover documentation
//! files, extract and check each one, and fold everything into a report.

use crate::analyzer::check_paths;
use crate::config::ScanConfig;
use crate::error::{DriftError, Result};
use crate::registry;
use crate::report::{Aggregator, DriftReport, FileSection};
use crate::scanner::{self, Extractor};
use std::path::Path;
use tracing::{debug, warn};

/// Scans the repository described by `config` and builds its drift report.
///
/// A missing registry aborts before any file is read. Files that cannot be
/// read become `Unreadable` sections and the scan carries on.
pub fn detect(config: &ScanConfig) -> Result<DriftReport> {
    let commands = registry::load(&config.registry_file(), &config.registry_field)?;
    debug!(commands = commands.len(), "loaded command registry");

    let extractor = Extractor::new(&config.invocation_verb)?;
    let root = config
        .root
        .canonicalize()
        .unwrap_or_else(|_| config.root.clone());
    let files = scanner::collect_doc_files(&root, &config.extensions, &config.excludes)?;
    debug!(files = files.len(), root = %root.display(), "collected documentation files");

    let mut aggregator = Aggregator::new(config, &root, commands.clone());
    for file in &files {
        aggregator.push(scan_file(file, &root, &extractor, &commands));
    }

    Ok(aggregator.finish())
}

/// Reads and analyzes a single documentation file.
pub fn scan_file(
    file: &Path,
    root: &Path,
    extractor: &Extractor,
    commands: &[String],
) -> FileSection {
    let path = file.strip_prefix(root).unwrap_or(file).display().to_string();

    match std::fs::read_to_string(file) {
        Ok(text) => {
            let extraction = extractor.extract(&text, commands);
            let checks = check_paths(&extraction, root);
            debug!(
                file = %path,
                invocations = extraction.command_invocations.len(),
                mentions = extraction.command_key_mentions.len(),
                fragments = checks.len(),
                "scanned"
            );
            FileSection::Scanned {
                path,
                extraction,
                checks,
            }
        }
        Err(source) => {
            let reason = source.to_string();
            let err = DriftError::UnreadableFile {
                path: file.to_path_buf(),
                source,
            };
            warn!("{err}");
            FileSection::Unreadable { path, reason }
        }
    }
}
