//! Domain layer for streamdiag.
//!
//! Pure types with no dependencies on I/O, networking or async runtimes.
//!
//! # What belongs in the domain layer?
//!
//! - Configuration structures and their defaults
//! - The description of where the data document lives
//!
//! # What does NOT belong here?
//!
//! - Reading the config file (that is `infrastructure::storage`)
//! - Fetching the data document (that is `infrastructure::fetch`)

pub mod config;
pub mod source;

pub use config::AppConfig;
pub use source::{DataSource, SourceError};
