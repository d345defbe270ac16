//! Technology search and the derived visibility/highlight state.
//!
//! Search is a linear scan: there are a few hundred technologies at most, and
//! the result order must follow the document (layer, then category, then
//! technology), so there is no index and no ranking.
//!
//! The visual effect of a search is not applied to the rendered tree directly.
//! Instead [`visibility::VisibilityMap`] records, per technology name, whether
//! the item is visible and whether it is highlighted; the HTML serializer reads
//! that map.  This keeps the decision logic testable without any display
//! surface.

pub mod engine;
pub mod visibility;

pub use engine::{run_query, search, QueryOutcome, SearchHit};
pub use visibility::{ItemState, VisibilityMap, MIN_QUERY_LEN};
