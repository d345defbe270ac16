//! Application layer: use cases.
//!
//! - [`load_document`]: turns a [`crate::domain::DataSource`] into a
//!   [`streamdiag_core::Document`], optionally validating it on the way.
//! - [`session`]: renders a document and tracks search/highlight state.
//!
//! Both depend only on the domain layer, `streamdiag-core` and the
//! [`load_document::Fetcher`] trait; no file or network access happens here.

pub mod load_document;
pub mod session;

pub use load_document::{FetchError, Fetcher, LoadError, Loaded, Loader};
pub use session::{DiagramSession, QueryEffect, SessionError};
