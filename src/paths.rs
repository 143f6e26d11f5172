//! Base-directory resolution for relative file references.

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{MAIN_SEPARATOR_STR, Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Base directory prefixed onto relative file references.
///
/// Empty by default, in which case relative references resolve against the
/// process working directory. Share one instance behind an `Arc` across
/// facade instances to get run-wide base-directory semantics.
#[derive(Debug, Default)]
pub struct BaseDir {
    dir: Mutex<Option<PathBuf>>,
}

impl BaseDir {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base directory after checking it is readable.
    ///
    /// The stored path is normalized to end with a separator so prefixing
    /// is a plain concatenation.
    pub fn set(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::read_dir(path).map_err(|source| ConfigError::BaseDirNotReadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut normalized = path.as_os_str().to_os_string();
        if !normalized.to_string_lossy().ends_with(MAIN_SEPARATOR_STR) {
            normalized.push(MAIN_SEPARATOR_STR);
        }
        *self.lock() = Some(PathBuf::from(normalized));
        Ok(())
    }

    /// The current base directory, if one has been set.
    pub fn get(&self) -> Option<PathBuf> {
        self.lock().clone()
    }

    /// Prefix the base directory onto `file` unless it is already absolute.
    pub fn resolve(&self, file: &str) -> PathBuf {
        let path = Path::new(file);
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.lock().as_ref() {
            Some(base) => base.join(path),
            None => path.to_path_buf(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<PathBuf>> {
        self.dir.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
