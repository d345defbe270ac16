//! Projection of a [`crate::Document`] into a browsable view tree.
//!
//! # Layout of the rendered tree
//!
//! ```text
//! <mount>
//!   header            title / subtitle / description
//!   legend            one entry per layer tier (static)
//!   layers-container
//!     layer.<id>      header + hover detail, then one block per category
//!       category      header + hover detail, then one item per technology
//!         tech-item   name + hover detail, data-search key
//!   workflows-container  five static pipeline diagrams
//!   search-container     input + results list
//! ```
//!
//! The tree is plain data ([`view::Element`]); [`html::to_html`] turns it into
//! markup and applies the search visibility state on the way out.

pub mod html;
pub mod renderer;
pub mod statics;
pub mod view;

pub use html::to_html;
pub use renderer::{RenderError, Renderer};
pub use view::{Element, Node, Page};
