//! Layered configuration loading.
//!
//! Loads configuration from an ordered list of files, parses each by format
//! (selected via file extension), deep-merges the parsed trees with
//! later-file precedence, and exposes the merged tree through dot-separated
//! path lookup. Per-file outcomes are recorded so one bad file never aborts
//! a batch.
//!
//! ## Example
//! ```no_run
//! use layercfg::Config;
//!
//! let mut config = Config::with_defaults();
//! config.load_from_files(["defaults.json", "production.json"]);
//!
//! if let Some(host) = config.get_by_path("database.host") {
//!     println!("database host: {host}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod merge;
pub mod path;
pub mod paths;

pub use config::Config;
pub use error::{ConfigError, Result};
pub use loader::{FileLoader, JsonLoader, LoaderRegistry, Outcome, YamlLoader};
pub use merge::{deep_merge, deep_merge_all};
pub use paths::BaseDir;
