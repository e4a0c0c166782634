//! Command registry loading.
//!
//! Reads a JSON document (by default `package.json`) and returns the keys of
//! one of its object fields (by default `scripts`) as the set of known command
//! names. Only the keys are consumed; definitions are ignored. Key order
//! follows the document, which fixes the order of every registry-derived list
//! in the report.

use crate::error::{DriftError, Result};
use std::path::Path;

/// Loads the command names stored under `field` in the registry document at `path`.
///
/// Fails with `MissingRegistry` if the document does not exist. A document
/// without `field` yields an empty registry.
pub fn load(path: &Path, field: &str) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(DriftError::MissingRegistry(path.to_path_buf()));
    }

    let source = std::fs::read_to_string(path).map_err(|source| DriftError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    let value: serde_json::Value =
        serde_json::from_str(&source).map_err(|source| DriftError::ParseRegistry {
            path: path.to_path_buf(),
            source,
        })?;

    command_names(&value, field).map_err(|reason| DriftError::InvalidRegistry {
        path: path.to_path_buf(),
        reason,
    })
}

/// Extracts the key list of `document[field]`.
pub fn command_names(document: &serde_json::Value, field: &str) -> Result<Vec<String>, String> {
    let Some(root) = document.as_object() else {
        return Err("registry document is not a JSON object".to_string());
    };

    match root.get(field) {
        None => Ok(Vec::new()),
        Some(serde_json::Value::Object(commands)) => Ok(commands.keys().cloned().collect()),
        Some(_) => Err(format!("field '{}' is not an object", field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn command_names_keep_document_order() {
        let value = json!({
            "name": "app",
            "scripts": { "test": "vitest", "build": "tsc", "lint:fix": "eslint --fix" }
        });
        let names = command_names(&value, "scripts").unwrap();
        assert_eq!(names, vec!["test", "build", "lint:fix"]);
    }

    #[test]
    fn command_names_missing_field_is_empty() {
        let value = json!({ "name": "app" });
        assert!(command_names(&value, "scripts").unwrap().is_empty());
    }

    #[test]
    fn command_names_custom_field() {
        let value = json!({ "tasks": { "ci": {} } });
        assert_eq!(command_names(&value, "tasks").unwrap(), vec!["ci"]);
    }

    #[test]
    fn command_names_rejects_non_object_field() {
        let value = json!({ "scripts": ["build"] });
        let err = command_names(&value, "scripts").unwrap_err();
        assert!(err.contains("not an object"));
    }

    #[test]
    fn command_names_rejects_non_object_document() {
        assert!(command_names(&json!([1, 2]), "scripts").is_err());
    }

    #[test]
    fn load_missing_registry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        let err = load(&path, "scripts").unwrap_err();
        assert!(matches!(err, DriftError::MissingRegistry(p) if p == path));
    }

    #[test]
    fn load_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load(&path, "scripts").unwrap_err();
        assert!(matches!(err, DriftError::ParseRegistry { .. }));
    }

    #[test]
    fn load_reads_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{"scripts": {"build": "tsc", "test": "vitest"}}"#).unwrap();
        assert_eq!(load(&path, "scripts").unwrap(), vec!["build", "test"]);
    }
}
