//! streamdiag library crate.
//!
//! Everything the `streamdiag` binary does, minus argument parsing, so that
//! integration tests in `tests/` and `main.rs` share one module tree.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! CLI (clap)
//!         ↕
//! [streamdiag]
//!   ├── domain/           Pure types: AppConfig, DataSource
//!   ├── application/      Loader (fetch → parse → validate → decode), DiagramSession
//!   └── infrastructure/
//!         ├── fetch/      File and HTTP implementations of the Fetcher trait
//!         └── storage/    TOML config file, output writing
//!         ↕
//! [streamdiag-core]       Document, Validator, search, Renderer
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `streamdiag-core`, and reaches the
//!   outside world only through the `Fetcher` trait.
//! - `infrastructure` implements those traits with `tokio::fs` and `reqwest`.

/// Domain layer: configuration and data-source types (no I/O).
pub mod domain;

/// Application layer: loading and the interactive session.
pub mod application;

/// Infrastructure layer: fetchers and config storage.
pub mod infrastructure;
