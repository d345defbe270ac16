//! # streamdiag-core
//!
//! Shared library for the streaming standards diagram containing the data
//! model, the contributor-facing schema validator, the search engine and the
//! view-tree renderer.
//!
//! This crate has zero dependencies on network sockets, file systems or async
//! runtimes.  Everything here is a pure function of its inputs, which is what
//! makes the renderer idempotent and the search testable without any display
//! surface.
//!
//! # Architecture overview (for beginners)
//!
//! The diagram is a reference chart of video-streaming standards.  A single
//! JSON document describes it as a three-level tree:
//!
//! ```text
//! Document
//!   └── Layer        (an architectural tier, e.g. "application")
//!         └── Category   (a group of related standards, e.g. "Protocols")
//!               └── Technology (a single standard, e.g. "HLS")
//! ```
//!
//! This crate is organised around that tree:
//!
//! - **`domain`** – The typed data model.  Plain `serde` structs, no behaviour
//!   beyond small lookup helpers.
//!
//! - **`validation`** – Walks the *untyped* JSON value and reports missing
//!   required fields and suspicious URLs.  Works on `serde_json::Value` so it
//!   can describe documents the typed model cannot even represent.
//!
//! - **`search`** – Case-insensitive substring search over technologies and the
//!   derived visibility/highlight state map.
//!
//! - **`render`** – Projects a document into a view tree mounted on a
//!   [`Page`], and serialises that tree (plus visibility state) to HTML.

pub mod domain;
pub mod render;
pub mod search;
pub mod validation;

// Re-export the most-used types at the crate root so callers can write
// `streamdiag_core::Document` instead of `streamdiag_core::domain::document::Document`.
pub use domain::document::{
    Category, Document, KeyOrganization, Layer, Link, Metadata, Technology,
};
pub use render::html::to_html;
pub use render::renderer::{RenderError, Renderer};
pub use render::view::{Element, Node, Page};
pub use search::engine::{search, SearchHit};
pub use search::visibility::{ItemState, VisibilityMap, MIN_QUERY_LEN};
pub use validation::report::{JsonValidation, Report, ReportSummary};
pub use validation::validator::{validate, validate_json_string, Validator};
