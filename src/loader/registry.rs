//! Extension-to-loader registry with lazy, memoized construction.

use super::{FileLoader, JsonLoader};
use crate::error::{ConfigError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

type LoaderFactory = Arc<dyn Fn() -> Arc<dyn FileLoader> + Send + Sync>;

/// Maps file extensions to loader implementations.
///
/// Construction is lazy and memoized: the first `resolve` for an extension
/// builds the loader, repeated calls return the same shared instance.
/// Registrations persist for the registry's lifetime; share one registry
/// behind an `Arc` to share loader instances across facade instances.
pub struct LoaderRegistry {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    factories: HashMap<String, LoaderFactory>,
    instances: HashMap<String, Arc<dyn FileLoader>>,
}

impl LoaderRegistry {
    /// Registry with the built-in JSON loader mapped to `json`.
    pub fn new() -> Self {
        let registry = Self {
            inner: Mutex::new(Inner::default()),
        };
        registry
            .register(&["json"], || Arc::new(JsonLoader::new()))
            .expect("built-in extension tokens are valid");
        registry
    }

    /// Look up the loader for `extension`, constructing it on first use.
    ///
    /// Fails with [`ConfigError::UnsupportedFormat`] when no mapping exists.
    pub fn resolve(&self, extension: &str) -> Result<Arc<dyn FileLoader>> {
        let mut inner = self.lock();
        if let Some(instance) = inner.instances.get(extension) {
            return Ok(Arc::clone(instance));
        }
        let factory = inner
            .factories
            .get(extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat {
                extension: extension.to_string(),
            })?;
        let instance = factory();
        inner
            .instances
            .insert(extension.to_string(), Arc::clone(&instance));
        Ok(instance)
    }

    /// Register `factory` for each extension, overwriting existing mappings.
    ///
    /// Returns the number of extensions registered. Fails with
    /// [`ConfigError::InvalidRegistration`] if any extension token is
    /// malformed, in which case no mapping is touched. Overwriting a mapping
    /// drops the memoized instance for that extension.
    pub fn register<F>(&self, extensions: &[&str], factory: F) -> Result<usize>
    where
        F: Fn() -> Arc<dyn FileLoader> + Send + Sync + 'static,
    {
        for token in extensions {
            if !is_valid_extension(token) {
                return Err(ConfigError::InvalidRegistration {
                    token: token.to_string(),
                });
            }
        }

        let factory: LoaderFactory = Arc::new(factory);
        let mut inner = self.lock();
        for &extension in extensions {
            debug!(extension, "file loader registered");
            inner
                .factories
                .insert(extension.to_string(), Arc::clone(&factory));
            inner.instances.remove(extension);
        }
        Ok(extensions.len())
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A well-formed extension token is non-empty ASCII alphanumerics.
fn is_valid_extension(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::YamlLoader;

    #[test]
    fn test_resolve_builtin_json() {
        let registry = LoaderRegistry::new();
        assert!(registry.resolve("json").is_ok());
    }

    #[test]
    fn test_resolve_unknown_extension() {
        let registry = LoaderRegistry::new();
        let err = registry.resolve("jsonx").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnsupportedFormat { extension } if extension == "jsonx"
        ));
    }

    #[test]
    fn test_resolve_is_memoized() {
        let registry = LoaderRegistry::new();
        let first = registry.resolve("json").unwrap();
        let second = registry.resolve("json").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_register_multiple_extensions() {
        let registry = LoaderRegistry::new();
        let count = registry
            .register(&["yaml", "yml"], || Arc::new(YamlLoader::new()))
            .unwrap();
        assert_eq!(count, 2);
        assert!(registry.resolve("yaml").is_ok());
        assert!(registry.resolve("yml").is_ok());
    }

    #[test]
    fn test_register_rejects_malformed_tokens() {
        let registry = LoaderRegistry::new();
        for token in ["", "with space", "dotted.ext", "semi;colon"] {
            let err = registry
                .register(&["ok", token], || Arc::new(YamlLoader::new()))
                .unwrap_err();
            assert!(matches!(err, ConfigError::InvalidRegistration { .. }));
        }
        // a failed registration must not leave partial mappings behind
        assert!(registry.resolve("ok").is_err());
    }

    #[test]
    fn test_overwrite_drops_memoized_instance() {
        let registry = LoaderRegistry::new();
        let before = registry.resolve("json").unwrap();
        registry
            .register(&["json"], || Arc::new(YamlLoader::new()))
            .unwrap();
        let after = registry.resolve("json").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }
}
