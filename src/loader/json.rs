//! JSON file loader.

use super::{FileLoader, Outcome, ProcessedLog, has_data};
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loader for `.json` configuration files.
///
/// Direct instantiation is permitted, but loaders resolved through the
/// [`LoaderRegistry`](super::LoaderRegistry) are shared per format.
#[derive(Debug, Default)]
pub struct JsonLoader {
    log: ProcessedLog,
}

impl JsonLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileLoader for JsonLoader {
    fn load(&self, path: &Path) -> Result<Option<Value>> {
        let contents = fs::read_to_string(path).map_err(|source| {
            // Unreadable is the one unrecoverable case: the loader cannot
            // even say whether the file would have parsed.
            self.log.record(Outcome::Failed, path);
            ConfigError::NotReadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Malformed or falsy contents mean "no data", not an error
        let parsed = serde_json::from_str::<Value>(&contents)
            .ok()
            .filter(has_data);

        let outcome = if parsed.is_some() {
            Outcome::Successful
        } else {
            Outcome::Failed
        };
        self.log.record(outcome, path);
        debug!(path = %path.display(), %outcome, "json file parsed");

        Ok(parsed)
    }

    fn processed_files(&self, outcome: Outcome) -> Vec<PathBuf> {
        self.log.paths(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        std::fs::write(&path, r#"{"environment": "dev"}"#).unwrap();

        let loader = JsonLoader::new();
        let tree = loader.load(&path).unwrap().unwrap();
        assert_eq!(tree, json!({"environment": "dev"}));
    }

    #[test]
    fn test_missing_file_is_hard_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");

        let loader = JsonLoader::new();
        let err = loader.load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::NotReadable { .. }));
    }

    #[test]
    fn test_empty_file_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("empty.json");
        std::fs::write(&path, "").unwrap();

        let loader = JsonLoader::new();
        assert_eq!(loader.load(&path).unwrap(), None);
    }

    #[test]
    fn test_malformed_file_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("corrupted.json");
        std::fs::write(&path, "{ not json at all").unwrap();

        let loader = JsonLoader::new();
        assert_eq!(loader.load(&path).unwrap(), None);
    }

    #[test]
    fn test_top_level_null_is_soft_failure() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("null.json");
        std::fs::write(&path, "null").unwrap();

        let loader = JsonLoader::new();
        assert_eq!(loader.load(&path).unwrap(), None);
    }

    #[test]
    fn test_processed_files_history() {
        let temp = TempDir::new().unwrap();
        let good = temp.path().join("good.json");
        let bad = temp.path().join("bad.json");
        std::fs::write(&good, r#"{"a": 1}"#).unwrap();
        std::fs::write(&bad, "{").unwrap();

        let loader = JsonLoader::new();
        loader.load(&good).unwrap();
        loader.load(&bad).unwrap();
        let _ = loader.load(&temp.path().join("missing.json"));

        assert_eq!(loader.processed_files(Outcome::Successful), vec![good]);
        assert_eq!(loader.processed_files(Outcome::Failed).len(), 2);
    }
}
