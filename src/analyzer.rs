//! Path fragment existence checks.
//!
//! Joins each `scripts/` or `src/` fragment found in the docs onto the
//! repository root and asks the filesystem whether anything lives there.
//! Fragments are taken literally: no `..` normalisation, no trimming of
//! trailing punctuation the extractor may have captured.

use crate::error::{DriftError, Result};
use crate::scanner::Extraction;
use serde::Serialize;
use std::path::Path;
use tracing::warn;

/// Outcome of checking one path fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCheck {
    pub fragment: String,
    pub exists: bool,
}

/// Reports whether `root/fragment` names an existing filesystem entry.
///
/// Symlinks are followed; files, directories and any other entry type count
/// as existing. A missing path is `Ok(false)`. Only an I/O failure while
/// deciding (e.g. permission denied on a parent) yields an error.
pub fn resolves(fragment: &str, root: &Path) -> Result<bool> {
    root.join(fragment)
        .try_exists()
        .map_err(|source| DriftError::PathResolution {
            fragment: fragment.to_string(),
            source,
        })
}

/// Checks a single fragment, treating resolution failures as "does not exist".
pub fn check(fragment: &str, root: &Path) -> PathCheck {
    let exists = resolves(fragment, root).unwrap_or_else(|err| {
        warn!("{err}; reporting as missing");
        false
    });

    PathCheck {
        fragment: fragment.to_string(),
        exists,
    }
}

/// Checks every path fragment of an extraction, script fragments first.
pub fn check_paths(extraction: &Extraction, root: &Path) -> Vec<PathCheck> {
    extraction
        .path_fragments()
        .map(|fragment| check(fragment, root))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::Extractor;

    fn repo_with(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for rel in files {
            let path = dir.path().join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
        }
        dir
    }

    #[test]
    fn resolves_existing_file() {
        let repo = repo_with(&["scripts/foo.sh"]);
        assert!(resolves("scripts/foo.sh", repo.path()).unwrap());
    }

    #[test]
    fn missing_file_does_not_resolve() {
        let repo = repo_with(&["scripts/foo.sh"]);
        assert!(!resolves("scripts/missing.sh", repo.path()).unwrap());
    }

    #[test]
    fn directories_resolve() {
        let repo = repo_with(&["src/domain/planner.ts"]);
        assert!(resolves("src/domain", repo.path()).unwrap());
        assert!(resolves("src/domain/", repo.path()).unwrap());
    }

    #[test]
    fn trailing_punctuation_is_not_trimmed() {
        let repo = repo_with(&["scripts/foo.sh"]);
        assert!(!resolves("scripts/foo.sh.", repo.path()).unwrap());
    }

    #[test]
    fn parent_segments_are_left_to_the_filesystem() {
        let repo = repo_with(&["scripts/foo.sh", "src/a.ts"]);
        assert!(resolves("src/../scripts/foo.sh", repo.path()).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_resolve_to_their_target() {
        let repo = repo_with(&["scripts/real.sh"]);
        let root = repo.path();
        std::os::unix::fs::symlink(root.join("scripts/real.sh"), root.join("scripts/link.sh"))
            .unwrap();
        std::os::unix::fs::symlink(root.join("scripts/gone.sh"), root.join("scripts/dangling.sh"))
            .unwrap();
        assert!(resolves("scripts/link.sh", root).unwrap());
        assert!(!resolves("scripts/dangling.sh", root).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn unresolvable_fragment_is_reported_missing() {
        // A component longer than the filesystem name limit makes the lookup fail.
        let repo = repo_with(&["scripts/foo.sh"]);
        let fragment = format!("scripts/{}", "a".repeat(5000));
        assert!(matches!(
            resolves(&fragment, repo.path()),
            Err(DriftError::PathResolution { .. })
        ));
        assert_eq!(
            check(&fragment, repo.path()),
            PathCheck {
                fragment: fragment.clone(),
                exists: false
            }
        );
    }

    #[test]
    fn check_paths_covers_script_then_source_fragments() {
        let repo = repo_with(&["scripts/build.sh"]);
        let extraction = Extractor::new("npm")
            .unwrap()
            .extract("src/gone.ts and scripts/build.sh", &[]);
        let checks = check_paths(&extraction, repo.path());
        assert_eq!(
            checks,
            vec![
                PathCheck {
                    fragment: "scripts/build.sh".to_string(),
                    exists: true
                },
                PathCheck {
                    fragment: "src/gone.ts".to_string(),
                    exists: false
                },
            ]
        );
    }
}
