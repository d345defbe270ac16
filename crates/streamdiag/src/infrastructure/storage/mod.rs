//! Storage infrastructure: configuration file access.
//!
//! The `config` sub-module reads `streamdiag.toml` and falls back to
//! defaults when the file does not exist.

pub mod config;
