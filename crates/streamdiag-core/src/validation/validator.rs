//! Required-field walker over the untyped document.
//!
//! # What counts as "missing"?
//!
//! The data file was historically checked with JavaScript truthiness, and
//! contributors rely on that behaviour.  A field is missing when it is absent,
//! `null`, `false`, `0` or the empty string.  Empty arrays and empty objects
//! are *present*: a category with `"links": []` is valid.

use std::collections::HashSet;
use std::fmt;

use serde_json::Value;
use tracing::debug;
use url::Url;

use super::report::{JsonValidation, Report};

const METADATA_FIELDS: &[&str] = &["title", "subtitle", "version"];
const LAYER_FIELDS: &[&str] = &[
    "id",
    "name",
    "subtitle",
    "description",
    "keyFunctions",
    "categories",
];
const CATEGORY_FIELDS: &[&str] = &[
    "id",
    "name",
    "description",
    "keyOrganizations",
    "researchAreas",
    "links",
    "technologies",
];
const TECHNOLOGY_FIELDS: &[&str] = &["name", "description", "searchTerms"];

/// Validates diagram documents against the required-field rules.
///
/// Stateless; one instance can be shared by the loader and the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Walks `candidate` top-down and returns every finding.
    pub fn validate(&self, candidate: &Value) -> Report {
        let mut walk = Walk::default();
        walk.document(candidate);
        let report = Report::new(walk.errors, walk.warnings);
        debug!(
            errors = report.summary.total_errors,
            warnings = report.summary.total_warnings,
            "validated document"
        );
        report
    }

    /// Parses `text` and validates it.  A parse failure becomes a one-error
    /// report instead of an `Err`.
    pub fn validate_json_string(&self, text: &str) -> JsonValidation {
        match serde_json::from_str::<Value>(text) {
            Ok(data) => {
                let report = self.validate(&data);
                JsonValidation {
                    is_valid: report.is_valid,
                    data: Some(data),
                    error: None,
                    report,
                }
            }
            Err(e) => {
                let message = e.to_string();
                JsonValidation {
                    is_valid: false,
                    data: None,
                    report: Report::parse_failure(&message),
                    error: Some(message),
                }
            }
        }
    }
}

/// Shorthand for `Validator::new().validate(candidate)`.
pub fn validate(candidate: &Value) -> Report {
    Validator::new().validate(candidate)
}

/// Shorthand for `Validator::new().validate_json_string(text)`.
pub fn validate_json_string(text: &str) -> JsonValidation {
    Validator::new().validate_json_string(text)
}

// ── Tree walk ─────────────────────────────────────────────────────────────────

/// Position of a node in the document, used to prefix messages.
#[derive(Debug, Clone, Copy, Default)]
struct NodePath {
    layer: usize,
    category: Option<usize>,
    technology: Option<usize>,
    link: Option<usize>,
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layer {}", self.layer)?;
        if let Some(c) = self.category {
            write!(f, ", Category {c}")?;
        }
        if let Some(t) = self.technology {
            write!(f, ", Technology {t}")?;
        }
        if let Some(l) = self.link {
            write!(f, ", Link {l}")?;
        }
        Ok(())
    }
}

#[derive(Default)]
struct Walk {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Walk {
    fn document(&mut self, data: &Value) {
        self.metadata(data.get("metadata"));

        let Some(layers) = data.get("layers").and_then(Value::as_array) else {
            self.errors.push("Missing or invalid 'layers' array".to_string());
            return;
        };

        let mut seen_ids = HashSet::new();
        for (index, layer) in layers.iter().enumerate() {
            let path = NodePath {
                layer: index,
                ..NodePath::default()
            };
            if let Some(id) = layer.get("id").and_then(Value::as_str) {
                if !id.is_empty() && !seen_ids.insert(id) {
                    self.errors.push(format!("{path}: Duplicate layer id '{id}'"));
                }
            }
            self.layer(layer, path);
        }
    }

    fn metadata(&mut self, metadata: Option<&Value>) {
        let Some(metadata) = metadata.filter(|m| is_truthy(m)) else {
            self.errors.push("Missing 'metadata' section".to_string());
            return;
        };
        for field in METADATA_FIELDS {
            if is_missing(metadata, field) {
                self.errors.push(format!("Missing required metadata field: '{field}'"));
            }
        }
    }

    fn layer(&mut self, layer: &Value, path: NodePath) {
        self.required(layer, LAYER_FIELDS, path);

        if let Some(categories) = layer.get("categories").and_then(Value::as_array) {
            for (index, category) in categories.iter().enumerate() {
                self.category(
                    category,
                    NodePath {
                        category: Some(index),
                        ..path
                    },
                );
            }
        }
    }

    fn category(&mut self, category: &Value, path: NodePath) {
        self.required(category, CATEGORY_FIELDS, path);

        if let Some(links) = category.get("links").and_then(Value::as_array) {
            for (index, link) in links.iter().enumerate() {
                self.link(
                    link,
                    NodePath {
                        link: Some(index),
                        ..path
                    },
                );
            }
        }

        if let Some(technologies) = category.get("technologies").and_then(Value::as_array) {
            for (index, technology) in technologies.iter().enumerate() {
                self.technology(
                    technology,
                    NodePath {
                        technology: Some(index),
                        ..path
                    },
                );
            }
        }
    }

    fn technology(&mut self, technology: &Value, path: NodePath) {
        self.required(technology, TECHNOLOGY_FIELDS, path);

        if let Some(terms) = technology.get("searchTerms") {
            if is_truthy(terms) && !terms.is_array() {
                self.errors.push(format!("{path}: 'searchTerms' must be an array"));
            }
        }

        match technology.get("links") {
            Some(Value::Array(links)) => {
                for (index, link) in links.iter().enumerate() {
                    self.link(
                        link,
                        NodePath {
                            link: Some(index),
                            ..path
                        },
                    );
                }
            }
            Some(other) if is_truthy(other) => {
                self.errors.push(format!("{path}: 'links' must be an array"));
            }
            _ => {}
        }
    }

    fn link(&mut self, link: &Value, path: NodePath) {
        if is_missing(link, "text") || is_missing(link, "url") {
            self.errors.push(format!("{path}: Missing 'text' or 'url'"));
        }

        let Some(url) = link.get("url").filter(|u| is_truthy(u)) else {
            return;
        };
        let parses = url.as_str().is_some_and(|s| Url::parse(s).is_ok());
        if !parses {
            let shown = url.as_str().map_or_else(|| url.to_string(), str::to_string);
            self.warnings.push(format!("{path}: URL may be invalid: {shown}"));
        }
    }

    fn required(&mut self, node: &Value, fields: &[&str], path: NodePath) {
        for field in fields {
            if is_missing(node, field) {
                self.errors.push(format!("{path}: Missing required field '{field}'"));
            }
        }
    }
}

/// JavaScript-style truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `true` when `node[field]` is absent or falsy.  Non-object nodes have no
/// fields, so every field is missing.
fn is_missing(node: &Value, field: &str) -> bool {
    node.get(field).map_or(true, |v| !is_truthy(v))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
