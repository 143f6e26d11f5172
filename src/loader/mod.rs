//! File loaders and the loader registry.
//!
//! A [`FileLoader`] turns one file format into a configuration tree. Loaders
//! are resolved by file extension through the [`LoaderRegistry`], which
//! constructs one shared instance per format.

mod json;
mod registry;
mod yaml;

pub use json::JsonLoader;
pub use registry::LoaderRegistry;
pub use yaml::YamlLoader;

use crate::error::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

/// Per-file processing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Successful,
    Failed,
}

impl Outcome {
    /// Bucket label as used by [`Config::processing_stats`](crate::Config::processing_stats).
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Successful => "successful",
            Outcome::Failed => "failed",
        }
    }

    /// Parse a bucket label; unrecognized labels map to `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "successful" => Some(Outcome::Successful),
            "failed" => Some(Outcome::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Capability of parsing one file format into a configuration tree.
///
/// The return contract distinguishes two failure modes:
/// - `Err(NotReadable)` — hard failure, the file cannot be opened at all
/// - `Ok(None)` — soft failure, the file was readable but its contents were
///   empty, malformed, or a top-level falsy value ("no data")
pub trait FileLoader: Send + Sync + std::fmt::Debug {
    /// Read and parse one file.
    fn load(&self, path: &Path) -> Result<Option<Value>>;

    /// Paths this loader has attempted, by outcome.
    ///
    /// Diagnostics only; loaders that keep no history return an empty list.
    fn processed_files(&self, _outcome: Outcome) -> Vec<PathBuf> {
        Vec::new()
    }
}

/// Whether a parsed top-level value carries usable configuration data.
///
/// Falsy top-level values (null, false, zero, empty string, empty sequence,
/// empty mapping) are treated the same as unparseable contents.
pub(crate) fn has_data(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Append-only log of attempted paths, behind a mutex so shared loader
/// instances can record history through `&self`.
#[derive(Debug, Default)]
pub(crate) struct ProcessedLog(Mutex<LogBuckets>);

#[derive(Debug, Default)]
struct LogBuckets {
    successful: Vec<PathBuf>,
    failed: Vec<PathBuf>,
}

impl ProcessedLog {
    pub(crate) fn record(&self, outcome: Outcome, path: &Path) {
        let mut buckets = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Outcome::Successful => buckets.successful.push(path.to_path_buf()),
            Outcome::Failed => buckets.failed.push(path.to_path_buf()),
        }
    }

    pub(crate) fn paths(&self, outcome: Outcome) -> Vec<PathBuf> {
        let buckets = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        match outcome {
            Outcome::Successful => buckets.successful.clone(),
            Outcome::Failed => buckets.failed.clone(),
        }
    }
}
