//! Configuration schema for streamdiag.
//!
//! The on-disk form is TOML; see `infrastructure::storage::config` for the
//! file handling. Example:
//!
//! ```toml
//! [data]
//! source = "data/streaming-standards-data.json"
//! validate_on_load = true
//!
//! [render]
//! mount_id = "diagram"
//!
//! [search]
//! min_query_len = 2
//!
//! [logging]
//! log_level = "info"
//! ```
//!
//! # Serde default values
//!
//! Every field carries `#[serde(default = "some_fn")]`, and every section is
//! `#[serde(default)]`, so an empty file (or no file at all) produces the
//! same configuration as `AppConfig::default()`. A file that sets only
//! `[search] min_query_len = 3` keeps every other default.

use serde::{Deserialize, Serialize};
use streamdiag_core::MIN_QUERY_LEN;

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the diagram document comes from and how it is checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataConfig {
    /// File path or `http(s)` URL of the JSON document.
    #[serde(default = "default_source")]
    pub source: String,
    /// Run the validator over the parsed JSON before decoding it.
    #[serde(default = "default_true")]
    pub validate_on_load: bool,
}

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Id of the mount point the diagram is rendered into.
    #[serde(default = "default_mount_id")]
    pub mount_id: String,
}

/// Search settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchConfig {
    /// Queries shorter than this (in characters) clear filtering.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// Ignored when `RUST_LOG` is set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_source() -> String {
    "data/streaming-standards-data.json".to_string()
}
fn default_true() -> bool {
    true
}
fn default_mount_id() -> String {
    "diagram".to_string()
}
fn default_min_query_len() -> usize {
    MIN_QUERY_LEN
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            validate_on_load: default_true(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_points_at_bundled_data_file() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.data.source, "data/streaming-standards-data.json");
        assert!(cfg.data.validate_on_load);
    }

    #[test]
    fn test_app_config_default_search_threshold_is_two() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.search.min_query_len, 2);
    }

    #[test]
    fn test_app_config_default_mount_and_log_level() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.render.mount_id, "diagram");
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("empty TOML must decode");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        // Arrange
        let text = "[search]\nmin_query_len = 3\n\n[data]\nvalidate_on_load = false\n";

        // Act
        let cfg: AppConfig = toml::from_str(text).expect("decode");

        // Assert
        assert_eq!(cfg.search.min_query_len, 3);
        assert!(!cfg.data.validate_on_load);
        assert_eq!(cfg.data.source, "data/streaming-standards-data.json");
        assert_eq!(cfg.render.mount_id, "diagram");
    }

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.data.source = "https://example.org/data.json".to_string();
        cfg.logging.log_level = "debug".to_string();

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }
}
