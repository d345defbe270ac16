//! DiagramSession: the state behind one interactive view of the diagram.
//!
//! A session owns the loaded [`Document`], the [`Renderer`], the [`Page`] the
//! diagram is rendered into and the current [`VisibilityMap`]. Every piece is
//! a constructed value; nothing is global.
//!
//! # Lifecycle
//!
//! ```text
//! DiagramSession::new(document, mount, min_len)   renders once
//!     │
//!     ├── apply_query("hls")     search + visibility + results panel
//!     ├── highlight("HLS")       the "click a result" action
//!     └── html()                 serialise the mount with current visibility
//! ```

use std::sync::Arc;

use streamdiag_core::{
    search::{run_query, QueryOutcome},
    to_html, Document, Page, RenderError, Renderer, VisibilityMap,
};
use thiserror::Error;
use tracing::{debug, info};

/// Error type for session operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("render failed: {0}")]
    Render(#[from] RenderError),

    /// The named mount vanished from the page after rendering.
    #[error("mount '{0}' is missing from the page")]
    MissingMount(String),
}

/// What one search-box value did to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEffect {
    /// Below the length threshold; every item is visible again.
    Cleared,
    /// `name - category (layer)` lines for each match, in document order.
    Results(Vec<String>),
}

/// Interactive diagram state for one document and one mount point.
pub struct DiagramSession {
    document: Arc<Document>,
    renderer: Renderer,
    page: Page,
    mount_id: String,
    visibility: VisibilityMap,
    min_query_len: usize,
}

impl DiagramSession {
    /// Creates a page with mount `mount_id`, renders `document` into it and
    /// starts with every item visible.
    ///
    /// # Errors
    ///
    /// [`SessionError::Render`] if rendering fails.
    pub fn new(
        document: Document,
        mount_id: impl Into<String>,
        min_query_len: usize,
    ) -> Result<Self, SessionError> {
        let mount_id = mount_id.into();
        let document = Arc::new(document);
        let renderer = Renderer::with_document(Arc::clone(&document));
        let mut page = Page::new().with_mount(mount_id.clone());
        renderer.render(&mut page, &mount_id)?;

        let visibility = VisibilityMap::for_document(&document);
        info!(
            mount = %mount_id,
            items = visibility.len(),
            "diagram rendered"
        );
        Ok(Self {
            document,
            renderer,
            page,
            mount_id,
            visibility,
            min_query_len,
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn visibility(&self) -> &VisibilityMap {
        &self.visibility
    }

    /// Feeds one search-box value through search, visibility and the results
    /// panel.
    ///
    /// # Errors
    ///
    /// [`SessionError::Render`] if the results panel cannot be found.
    pub fn apply_query(&mut self, raw: &str) -> Result<QueryEffect, SessionError> {
        let outcome = run_query(&self.document, raw, self.min_query_len);
        self.visibility.apply(&outcome);
        self.renderer
            .render_search_results(&mut self.page, &self.mount_id, &outcome)?;

        let effect = match &outcome {
            QueryOutcome::Cleared => QueryEffect::Cleared,
            QueryOutcome::Matches(hits) => {
                QueryEffect::Results(hits.iter().map(|hit| hit.summary()).collect())
            }
        };
        debug!(query = raw, effect = ?effect, "query applied");
        Ok(effect)
    }

    /// Dims everything, then highlights items named `name` (ignoring case).
    /// Returns how many distinct item names were highlighted.
    pub fn highlight(&mut self, name: &str) -> usize {
        let count = self.visibility.highlight_technology(name);
        debug!(name, count, "technology highlighted");
        count
    }

    /// Clears the mount and renders the document again. Visibility is kept.
    ///
    /// # Errors
    ///
    /// [`SessionError::Render`] if rendering fails.
    pub fn rerender(&mut self) -> Result<(), SessionError> {
        self.page.clear(&self.mount_id);
        self.renderer.render(&mut self.page, &self.mount_id)?;
        Ok(())
    }

    /// Serialises the mount as an HTML fragment using the current visibility.
    ///
    /// # Errors
    ///
    /// [`SessionError::MissingMount`] if the mount is no longer on the page.
    pub fn html(&self) -> Result<String, SessionError> {
        let mount = self
            .page
            .mount(&self.mount_id)
            .ok_or_else(|| SessionError::MissingMount(self.mount_id.clone()))?;
        Ok(to_html(mount, &self.visibility))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
