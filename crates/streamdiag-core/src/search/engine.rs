//! Case-insensitive substring search over the technology tree.

use std::fmt;

use tracing::debug;

use crate::domain::document::{Category, Document, Layer, Technology};

/// One matching technology plus the nodes that own it.
#[derive(Debug, Clone, Copy)]
pub struct SearchHit<'a> {
    pub technology: &'a Technology,
    pub category: &'a Category,
    pub layer: &'a Layer,
}

impl SearchHit<'_> {
    /// `"HLS - Protocols (Application)"`: the line shown in result lists.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SearchHit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} ({})",
            self.technology.name, self.category.name, self.layer.name
        )
    }
}

/// Result of feeding one search-box value through the length threshold.
#[derive(Debug, Clone)]
pub enum QueryOutcome<'a> {
    /// The query was shorter than the threshold: filtering is cleared.
    Cleared,
    /// The query was long enough; these are its matches (possibly none).
    Matches(Vec<SearchHit<'a>>),
}

/// Returns every technology whose name, search terms or category name contain
/// `query`, ignoring case.
///
/// An empty result is not an error.  The empty query matches everything; the
/// length threshold lives in [`run_query`], not here.
pub fn search<'a>(document: &'a Document, query: &str) -> Vec<SearchHit<'a>> {
    let needle = query.to_lowercase();
    let hits: Vec<SearchHit<'a>> = document
        .technologies()
        .filter(|t| t.technology.haystack(&t.category.name).contains(&needle))
        .map(|t| SearchHit {
            technology: t.technology,
            category: t.category,
            layer: t.layer,
        })
        .collect();
    debug!(query = %needle, hits = hits.len(), "search");
    hits
}

/// Applies the search-box rules to a raw input value: lowercase it, clear
/// filtering when it is shorter than `min_len` characters, otherwise search.
pub fn run_query<'a>(document: &'a Document, raw: &str, min_len: usize) -> QueryOutcome<'a> {
    let query = raw.to_lowercase();
    if query.chars().count() < min_len {
        return QueryOutcome::Cleared;
    }
    QueryOutcome::Matches(search(document, &query))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
