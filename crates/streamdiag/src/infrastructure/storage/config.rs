//! TOML-based configuration loading.
//!
//! Reads [`AppConfig`] from `streamdiag.toml` in the working directory, or
//! from the path given with `--config`.
//!
//! # What is TOML? (for beginners)
//!
//! TOML is a configuration format that reads like an INI file but has real
//! types (strings, integers, booleans, arrays). `serde` turns the text into
//! the `AppConfig` struct via `#[derive(Deserialize)]`, so there is no
//! hand-written parsing here.
//!
//! A missing file is not an error: first runs and checkouts without a config
//! behave exactly like an empty file.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::domain::AppConfig;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "streamdiag.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error other than "not found".
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            debug!(path = %path.display(), "config loaded");
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(AppConfig::default())
        }
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
