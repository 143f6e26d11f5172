//! YAML file loader.

use super::{FileLoader, Outcome, ProcessedLog, has_data};
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loader for `.yaml`/`.yml` configuration files.
///
/// Not registered by default; register it for the extensions you use:
/// ```
/// use std::sync::Arc;
/// use layercfg::{LoaderRegistry, YamlLoader};
///
/// let registry = LoaderRegistry::new();
/// registry.register(&["yaml", "yml"], || Arc::new(YamlLoader::new())).unwrap();
/// ```
#[derive(Debug, Default)]
pub struct YamlLoader {
    log: ProcessedLog,
}

impl YamlLoader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FileLoader for YamlLoader {
    fn load(&self, path: &Path) -> Result<Option<Value>> {
        let contents = fs::read_to_string(path).map_err(|source| {
            self.log.record(Outcome::Failed, path);
            ConfigError::NotReadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Parsed into the same tree type the merge engine works on; YAML
        // documents that do not map onto it (non-string keys) count as no
        // data, same as malformed contents
        let parsed = serde_yaml::from_str::<Value>(&contents)
            .ok()
            .filter(has_data);

        let outcome = if parsed.is_some() {
            Outcome::Successful
        } else {
            Outcome::Failed
        };
        self.log.record(outcome, path);
        debug!(path = %path.display(), %outcome, "yaml file parsed");

        Ok(parsed)
    }

    fn processed_files(&self, outcome: Outcome) -> Vec<PathBuf> {
        self.log.paths(outcome)
    }
}
