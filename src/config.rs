//! Configuration facade: ordered multi-file loading, outcome bookkeeping,
//! and dot-path lookup over the merged tree.

use crate::error::Result;
use crate::loader::{LoaderRegistry, Outcome};
use crate::merge::deep_merge_all;
use crate::paths::BaseDir;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Layered configuration built by merging files in load order.
///
/// The accumulated tree starts empty and grows with each
/// [`load_from_files`](Config::load_from_files) batch; later files override
/// earlier ones at conflicting keys. Per-file outcomes are kept in
/// `successful`/`failed` buckets keyed by the file reference as supplied.
pub struct Config {
    registry: Arc<LoaderRegistry>,
    base_dir: Arc<BaseDir>,
    data: Value,
    successful: BTreeMap<String, String>,
    failed: BTreeMap<String, String>,
}

impl Config {
    /// Facade over a shared registry and base directory.
    pub fn new(registry: Arc<LoaderRegistry>, base_dir: Arc<BaseDir>) -> Self {
        Self {
            registry,
            base_dir,
            data: Value::Object(Map::new()),
            successful: BTreeMap::new(),
            failed: BTreeMap::new(),
        }
    }

    /// Facade with a fresh default registry and no base directory.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(LoaderRegistry::new()), Arc::new(BaseDir::new()))
    }

    /// Load and merge a batch of configuration files, in order.
    ///
    /// Every file gets an outcome entry and failures never abort the rest
    /// of the batch: an unreadable file, an unsupported extension, or a
    /// readable file with no usable contents each record a `failed` entry
    /// and processing moves on. A repeated file reference overwrites its
    /// earlier outcome.
    ///
    /// Trees parsed in this batch merge, in batch order, on top of the
    /// already accumulated tree.
    pub fn load_from_files<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parsed = Vec::new();

        for file in files {
            let file = file.as_ref();
            if file.is_empty() {
                self.record(Outcome::Failed, file, "file path must be a non-empty string");
                continue;
            }
            match self.load_one(file) {
                Ok(Some(tree)) => {
                    parsed.push(tree);
                    self.record(Outcome::Successful, file, "config file read successfully");
                }
                Ok(None) => {
                    self.record(Outcome::Failed, file, "config file contents invalid");
                }
                Err(err) => {
                    self.record(Outcome::Failed, file, &err.to_string());
                }
            }
        }

        if !parsed.is_empty() {
            // account for already present state: the accumulated tree seeds
            // the merge so new batches layer on top of it
            self.data = deep_merge_all(std::mem::take(&mut self.data), parsed);
        }
    }

    fn load_one(&self, file: &str) -> Result<Option<Value>> {
        let resolved = self.base_dir.resolve(file);
        // Assuming the file extension is consistent with the contents; a
        // missing extension resolves as "", which no loader maps
        let extension = resolved
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let loader = self.registry.resolve(extension)?;
        loader.load(&resolved)
    }

    /// Look up a value in the merged tree by dot-separated path.
    ///
    /// Returns `None` for anything the path does not name, including empty
    /// or degenerate paths. The returned value may itself be a mapping.
    pub fn get_by_path(&self, path: &str) -> Option<&Value> {
        crate::path::resolve(&self.data, path)
    }

    /// The outcome bucket for `outcome` (`"successful"` or `"failed"`).
    ///
    /// Maps file references to human-readable notes. Any other label yields
    /// an empty map.
    pub fn processing_stats(&self, outcome: &str) -> BTreeMap<String, String> {
        match Outcome::from_label(outcome) {
            Some(Outcome::Successful) => self.successful.clone(),
            Some(Outcome::Failed) => self.failed.clone(),
            None => BTreeMap::new(),
        }
    }

    /// Set the shared base directory for relative file references.
    ///
    /// The directory must be readable; the setting applies to every facade
    /// sharing this [`BaseDir`].
    pub fn set_base_dir(&self, path: impl AsRef<Path>) -> Result<()> {
        self.base_dir.set(path)
    }

    /// The merged configuration tree.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// A file reference lives in exactly one bucket; the latest attempt wins.
    fn record(&mut self, outcome: Outcome, file: &str, message: &str) {
        match outcome {
            Outcome::Successful => {
                debug!(file, "config file loaded");
                self.failed.remove(file);
                self.successful.insert(file.to_string(), message.to_string());
            }
            Outcome::Failed => {
                warn!(file, message, "config file not loaded");
                self.successful.remove(file);
                self.failed.insert(file.to_string(), message.to_string());
            }
        }
    }
}
