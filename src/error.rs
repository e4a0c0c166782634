//! Error taxonomy for a drift scan.
//!
//! Only registry, discovery and report-write failures abort a run. Unreadable
//! documentation files and unresolvable path fragments are recovered by the
//! caller and surface as report content instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriftError {
    /// The command registry document does not exist.
    #[error("command registry not found at {}", .0.display())]
    MissingRegistry(PathBuf),

    #[error("failed to parse command registry {}: {source}", path.display())]
    ParseRegistry {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The registry parsed, but its command field is not a JSON object.
    #[error("invalid command registry {}: {reason}", path.display())]
    InvalidRegistry { path: PathBuf, reason: String },

    #[error("could not read {}: {source}", path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Existence of a path fragment could not be determined.
    #[error("could not resolve {fragment}: {source}")]
    PathResolution {
        fragment: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk documentation tree: {0}")]
    Discovery(#[from] walkdir::Error),

    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A match pattern failed to compile, usually because of the configured verb.
    #[error("invalid match pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    WriteReport {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = DriftError> = std::result::Result<T, E>;
