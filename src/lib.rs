//! doc-drift library for finding stale references in project documentation.
//!
//! The scan runs in four phases:
//!
//! 1. **Registry**: load the known command names from a JSON document
//! 2. **Scanning**: collect documentation files and extract command invocations,
//!    `scripts/` and `src/` path fragments, and registry command mentions
//! 3. **Analysis**: check every path fragment against the working tree
//! 4. **Reporting**: aggregate per-file results into a text report
//!
//! # Example
//!
//! ```no_run
//! use doc_drift::{ScanConfig, detect, report};
//!
//! let config = ScanConfig::new(".");
//! let report = detect(&config).unwrap();
//! report::write_report(&config.report_file(), &report).unwrap();
//!
//! for (file, check) in report.stale_paths() {
//!     println!("{}: {} does not exist", file, check.fragment);
//! }
//! ```

pub mod analyzer;
pub mod config;
pub mod detect;
pub mod error;
pub mod registry;
pub mod report;
pub mod scanner;

// Re-export commonly used types at crate root
pub use analyzer::PathCheck;
pub use config::{MentionScope, ScanConfig};
pub use detect::detect;
pub use error::DriftError;
pub use report::{DriftReport, FileSection, Totals};
pub use scanner::{Category, Extraction, Extractor};
