//! Infrastructure layer: adapters to the filesystem, the network and the
//! terminal.
//!
//! - [`fetch`]: `Fetcher` implementations for files and HTTP URLs.
//! - [`storage`]: the `streamdiag.toml` configuration file.
//! - [`output`]: writing rendered HTML and reports to a file or stdout.

pub mod fetch;
pub mod output;
pub mod storage;
