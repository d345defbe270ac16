//! Domain entities for the streaming standards diagram.
//!
//! This module contains the pure data model with no infrastructure
//! dependencies.
//!
//! # What is "domain" in Clean Architecture? (for beginners)
//!
//! The innermost layer of a Clean Architecture codebase is the **domain**.
//! Domain code:
//!
//! - Describes the things the application is *about*: here, layers,
//!   categories and technologies of the streaming stack.
//! - Has **no** imports from network libraries, file systems or async runtimes.
//! - Can be compiled and tested on any platform without any external setup.
//!
//! Outer layers (the loader, the CLI) depend on the domain; the domain never
//! depends on them.

/// The document tree: metadata, layers, categories, technologies, links.
///
/// See [`document::Document`] for the root type.
pub mod document;

/// `deserialize_with` helpers that keep decoding when fields are `null` or
/// of the wrong JSON type.
mod lenient;
