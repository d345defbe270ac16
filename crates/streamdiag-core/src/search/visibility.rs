//! Per-item visibility and highlight state.
//!
//! Every technology item in the rendered tree is in one of three states:
//!
//! | State       | visible | highlighted | When                               |
//! |-------------|---------|-------------|------------------------------------|
//! | default     | true    | false       | no active search                   |
//! | highlighted | true    | true        | the item matches the active search |
//! | dimmed      | false   | false       | a search is active, item not a hit |
//!
//! Each update recomputes the whole map from scratch, so applying the same
//! outcome twice (or rapidly applying many) always converges on the same state.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use super::engine::QueryOutcome;
use crate::domain::document::Document;

/// Queries shorter than this many characters clear filtering.
pub const MIN_QUERY_LEN: usize = 2;

/// Display state of one technology item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ItemState {
    pub visible: bool,
    pub highlighted: bool,
}

impl ItemState {
    pub const DEFAULT: Self = Self {
        visible: true,
        highlighted: false,
    };
    pub const HIGHLIGHTED: Self = Self {
        visible: true,
        highlighted: true,
    };
    pub const DIMMED: Self = Self {
        visible: false,
        highlighted: false,
    };
}

impl Default for ItemState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Technology name → [`ItemState`] for every technology in a document.
///
/// Technologies that share a name share a state: the rendered items are keyed
/// by name, not by position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct VisibilityMap {
    items: BTreeMap<String, ItemState>,
}

impl VisibilityMap {
    /// A map with every technology of `document` in the default state.
    pub fn for_document(document: &Document) -> Self {
        let items = document
            .technologies()
            .map(|t| (t.technology.name.clone(), ItemState::DEFAULT))
            .collect();
        Self { items }
    }

    /// State of the item with this technology name.  Unknown names are in the
    /// default state.
    pub fn state(&self, name: &str) -> ItemState {
        self.items.get(name).copied().unwrap_or_default()
    }

    /// Restores every item to the default state.
    pub fn show_all(&mut self) {
        self.fill(ItemState::DEFAULT);
    }

    /// Dims every item.
    pub fn dim_all(&mut self) {
        self.fill(ItemState::DIMMED);
    }

    /// Recomputes the whole map from a query outcome.
    ///
    /// `Cleared` shows everything; `Matches` highlights the hits and dims the
    /// rest (an empty match list dims everything).
    pub fn apply(&mut self, outcome: &QueryOutcome<'_>) {
        match outcome {
            QueryOutcome::Cleared => self.show_all(),
            QueryOutcome::Matches(hits) => {
                let names: HashSet<&str> =
                    hits.iter().map(|h| h.technology.name.as_str()).collect();
                for (name, state) in &mut self.items {
                    *state = if names.contains(name.as_str()) {
                        ItemState::HIGHLIGHTED
                    } else {
                        ItemState::DIMMED
                    };
                }
            }
        }
    }

    /// Dims everything except the technology named `name` (matched without
    /// regard to case), which is highlighted.  Returns how many items were
    /// highlighted.
    pub fn highlight_technology(&mut self, name: &str) -> usize {
        let wanted = name.to_lowercase();
        let mut highlighted = 0;
        for (item, state) in &mut self.items {
            if item.to_lowercase() == wanted {
                *state = ItemState::HIGHLIGHTED;
                highlighted += 1;
            } else {
                *state = ItemState::DIMMED;
            }
        }
        highlighted
    }

    /// `true` when no item is dimmed or highlighted.
    pub fn is_unfiltered(&self) -> bool {
        self.items.values().all(|s| *s == ItemState::DEFAULT)
    }

    /// Number of tracked items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates `(name, state)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ItemState)> {
        self.items.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn fill(&mut self, state: ItemState) {
        for s in self.items.values_mut() {
            *s = state;
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
