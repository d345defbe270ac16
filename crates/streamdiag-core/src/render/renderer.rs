//! Walks the document once and builds the diagram's view tree.
//!
//! The renderer is a pure projection: the same document rendered into a
//! cleared mount always produces the same tree.  The complete subtree is built
//! before anything is appended, so a failed render leaves the mount untouched.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use super::statics::{LegendEntry, Workflow, LEGEND, WORKFLOWS};
use super::view::{Element, Node, Page};
use crate::domain::document::{Category, Document, Layer, Link, Metadata, Technology};
use crate::search::engine::QueryOutcome;

/// Id of the search input element inside the search panel.
pub const SEARCH_INPUT_ID: &str = "searchInput";
/// Id of the results list inside the search panel.
pub const SEARCH_RESULTS_ID: &str = "searchResults";

/// Renderer precondition failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The page has no container with this id.
    #[error("container with id '{0}' not found")]
    TargetNotFound(String),

    /// `render` was called before a document was supplied.
    #[error("data not loaded: supply a document before rendering")]
    NotLoaded,
}

/// Builds the diagram into a [`Page`] mount point.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    document: Option<Arc<Document>>,
}

impl Renderer {
    /// A renderer with no document yet.  [`Renderer::render`] fails with
    /// [`RenderError::NotLoaded`] until [`Renderer::set_document`] is called.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Arc<Document>) -> Self {
        Self {
            document: Some(document),
        }
    }

    pub fn set_document(&mut self, document: Arc<Document>) {
        self.document = Some(document);
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Appends the full diagram to the container `target`.
    ///
    /// # Errors
    ///
    /// [`RenderError::TargetNotFound`] when `page` has no such container
    /// (checked first), [`RenderError::NotLoaded`] when no document is set.
    pub fn render(&self, page: &mut Page, target: &str) -> Result<(), RenderError> {
        let container = page
            .mount_mut(target)
            .ok_or_else(|| RenderError::TargetNotFound(target.to_string()))?;
        let document = self.document.as_deref().ok_or(RenderError::NotLoaded)?;

        let blocks = vec![
            header(&document.metadata),
            legend(LEGEND),
            layers(&document.layers),
            workflows(WORKFLOWS),
            search_panel(),
        ];
        container.children.extend(blocks.into_iter().map(Node::Element));

        info!(
            target_id = target,
            layers = document.layers.len(),
            technologies = document.technology_count(),
            "rendered diagram"
        );
        Ok(())
    }

    /// Replaces the content of the search results list inside `target` with
    /// one entry per hit, "No results found" for an empty match list, or
    /// nothing when filtering is cleared.
    ///
    /// # Errors
    ///
    /// [`RenderError::TargetNotFound`] when the container or its results list
    /// does not exist (the diagram has not been rendered into it).
    pub fn render_search_results(
        &self,
        page: &mut Page,
        target: &str,
        outcome: &QueryOutcome<'_>,
    ) -> Result<(), RenderError> {
        let results = page
            .mount_mut(target)
            .ok_or_else(|| RenderError::TargetNotFound(target.to_string()))?
            .find_by_id_mut(SEARCH_RESULTS_ID)
            .ok_or_else(|| RenderError::TargetNotFound(SEARCH_RESULTS_ID.to_string()))?;

        results.children = match outcome {
            QueryOutcome::Cleared => Vec::new(),
            QueryOutcome::Matches(hits) if hits.is_empty() => {
                vec![Node::Element(Element::new("p").text("No results found"))]
            }
            QueryOutcome::Matches(hits) => hits
                .iter()
                .map(|hit| {
                    Node::Element(
                        Element::new("div")
                            .class("search-result")
                            .attr("data-tech", hit.technology.name.clone())
                            .child(Element::new("strong").text(hit.technology.name.clone()))
                            .text(format!(" - {} ({})", hit.category.name, hit.layer.name)),
                    )
                })
                .collect(),
        };
        debug!(entries = results.children.len(), "rendered search results");
        Ok(())
    }
}

// ── Block builders ────────────────────────────────────────────────────────────

fn header(metadata: &Metadata) -> Element {
    Element::new("div")
        .class("header")
        .child(Element::new("h1").text(metadata.title.clone()))
        .child(Element::new("p").class("subtitle").text(metadata.subtitle.clone()))
        .child(
            Element::new("p")
                .class("description")
                .text(metadata.description.clone()),
        )
}

fn legend(entries: &[LegendEntry]) -> Element {
    Element::new("div")
        .class("legend")
        .child(Element::new("h3").text("Legend"))
        .children(entries.iter().map(|entry| {
            Element::new("div")
                .class("legend-item")
                .class(entry.tier)
                .child(Element::new("span").class("legend-swatch").class(entry.tier))
                .child(Element::new("strong").text(entry.label))
                .child(Element::new("span").class("legend-meaning").text(entry.meaning))
        }))
}

fn layers(layers: &[Layer]) -> Element {
    Element::new("div")
        .class("layers-container")
        .children(layers.iter().map(layer))
}

fn layer(layer: &Layer) -> Element {
    let tooltip = Element::new("div")
        .class("layer-tooltip")
        .child(Element::new("h5").text(layer.name.clone()))
        .child(Element::new("p").text(layer.description.clone()))
        .child(labelled("Key Functions:"))
        .child(plain_list(&layer.key_functions));

    let header = Element::new("div")
        .class("layer-header")
        .class(layer.id.clone())
        .text(format!("{} - {}", layer.name, layer.subtitle))
        .child(tooltip);

    Element::new("div")
        .class("layer")
        .class(layer.id.clone())
        .attr("data-layer", layer.id.clone())
        .child(header)
        .child(
            Element::new("div")
                .class("layer-content")
                .children(layer.categories.iter().map(category)),
        )
}

fn category(category: &Category) -> Element {
    let organizations = Element::new("ul").children(category.key_organizations.iter().map(|org| {
        Element::new("li")
            .child(Element::new("strong").text(format!("{}:", org.name)))
            .text(format!(" {}", org.description))
    }));

    let tooltip = Element::new("div")
        .class("category-tooltip")
        .child(Element::new("h5").text(category.name.clone()))
        .child(Element::new("p").text(category.description.clone()))
        .child(labelled("Key Organizations:"))
        .child(organizations)
        .child(labelled("Research Areas:"))
        .child(plain_list(&category.research_areas))
        .child(labelled("Links:"))
        .child(link_list(&category.links));

    Element::new("div")
        .class("category")
        .child(
            Element::new("h4")
                .class("category-header")
                .attr("data-search", category.name.to_lowercase())
                .text(category.name.clone()),
        )
        .child(tooltip)
        .child(
            Element::new("div")
                .class("technologies")
                .children(category.technologies.iter().map(technology)),
        )
}

fn technology(tech: &Technology) -> Element {
    let mut tooltip = Element::new("div")
        .class("tooltip")
        .child(Element::new("h5").text(tech.name.clone()))
        .child(Element::new("p").text(tech.description.clone()));
    if let Some(links) = &tech.links {
        tooltip = tooltip.child(labelled("Links:")).child(link_list(links));
    }

    Element::new("div")
        .class("tech-item")
        .attr("data-search", tech.search_key())
        .attr("data-tech", tech.name.clone())
        .child(Element::new("span").class("tech-name").text(tech.name.clone()))
        .child(tooltip)
}

fn workflows(workflows: &[Workflow]) -> Element {
    Element::new("div")
        .class("workflows-container")
        .children(workflows.iter().map(|workflow| {
            Element::new("div")
                .class("workflow-section")
                .child(Element::new("h3").text(format!("{} Workflow", workflow.name)))
                .child(
                    Element::new("div").class("workflow-steps").children(
                        workflow
                            .steps
                            .iter()
                            .map(|step| Element::new("div").class("step").text(*step)),
                    ),
                )
        }))
}

fn search_panel() -> Element {
    Element::new("div")
        .class("search-container")
        .child(
            Element::new("input")
                .class("search-input")
                .attr("type", "text")
                .attr("id", SEARCH_INPUT_ID)
                .attr("placeholder", "Search technologies..."),
        )
        .child(
            Element::new("div")
                .class("search-results")
                .attr("id", SEARCH_RESULTS_ID),
        )
}

fn labelled(label: &str) -> Element {
    Element::new("p").child(Element::new("strong").text(label))
}

fn plain_list(items: &[String]) -> Element {
    Element::new("ul").children(items.iter().map(|item| Element::new("li").text(item.clone())))
}

fn link_list(links: &[Link]) -> Element {
    Element::new("ul").children(links.iter().map(|link| {
        Element::new("li").child(
            Element::new("a")
                .attr("href", link.url.clone())
                .attr("target", "_blank")
                .text(link.text.clone()),
        )
    }))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
