//! Typed data model of the diagram document.
//!
//! The JSON file uses camelCase keys (`keyFunctions`, `searchTerms`, ...); the
//! structs below map them onto snake_case fields with
//! `#[serde(rename_all = "camelCase")]`.
//!
//! Every struct is decoded with `#[serde(default)]` and every field through
//! a `lenient` decoder, so `null`, a number where text is expected or
//! a scalar where a list is expected decode to defaults instead of failing.
//! Validation is advisory: a document missing required fields must still
//! load and render; the [`crate::validation`] module is where those problems
//! are reported.
//!
//! The tree is immutable once loaded.  Nothing in this crate takes
//! `&mut Document`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Root of the diagram data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    #[serde(deserialize_with = "lenient::object")]
    pub metadata: Metadata,
    #[serde(deserialize_with = "lenient::list")]
    pub layers: Vec<Layer>,
}

/// Descriptive header of the document.
///
/// Keys other than the four known ones (e.g. `lastUpdated`, `contributors`)
/// are kept verbatim in `extra` so re-serialising a document loses nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text")]
    pub version: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// One architectural tier of the streaming stack.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layer {
    /// Unique across the document; also used as the layer's visual tag.
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub subtitle: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub key_functions: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub categories: Vec<Category>,
}

/// A group of related technologies within a layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::list")]
    pub key_organizations: Vec<KeyOrganization>,
    #[serde(deserialize_with = "lenient::text_list")]
    pub research_areas: Vec<String>,
    #[serde(deserialize_with = "lenient::list")]
    pub links: Vec<Link>,
    #[serde(deserialize_with = "lenient::list")]
    pub technologies: Vec<Technology>,
}

/// A standards body or industry group associated with a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyOrganization {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
}

/// A single named standard, tool or protocol: the leaf of the tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Technology {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(deserialize_with = "lenient::text_list")]
    pub search_terms: Vec<String>,
    /// Technologies may omit links entirely; `None` and `Some(vec![])` render
    /// differently (no "Links" heading vs. an empty list).
    #[serde(
        deserialize_with = "lenient::optional_list",
        skip_serializing_if = "Option::is_none"
    )]
    pub links: Option<Vec<Link>>,
}

/// A labelled hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    #[serde(deserialize_with = "lenient::text")]
    pub text: String,
    #[serde(deserialize_with = "lenient::text")]
    pub url: String,
}

/// A technology together with the category and layer that own it.
///
/// Yielded by [`Document::technologies`] in document order.
#[derive(Debug, Clone, Copy)]
pub struct TechnologyRef<'a> {
    pub layer: &'a Layer,
    pub category: &'a Category,
    pub technology: &'a Technology,
}

impl Document {
    /// Decodes a document from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when the root is not an object (or an
    /// array in serde's positional struct form).
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Iterates every technology in traversal order: layer, then category,
    /// then technology.
    pub fn technologies(&self) -> impl Iterator<Item = TechnologyRef<'_>> {
        self.layers.iter().flat_map(|layer| {
            layer.categories.iter().flat_map(move |category| {
                category.technologies.iter().map(move |technology| TechnologyRef {
                    layer,
                    category,
                    technology,
                })
            })
        })
    }

    /// Total number of technologies across all layers and categories.
    pub fn technology_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.categories)
            .map(|c| c.technologies.len())
            .sum()
    }

    /// Looks up a layer by its id.
    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id == id)
    }
}

impl Technology {
    /// The search key attached to the rendered item: lowercase space-joined
    /// search terms.
    pub fn search_key(&self) -> String {
        self.search_terms.join(" ").to_lowercase()
    }

    /// The text a query is matched against: name, search terms and the owning
    /// category's name, lowercased.
    pub fn haystack(&self, category_name: &str) -> String {
        format!(
            "{} {} {}",
            self.name,
            self.search_terms.join(" "),
            category_name
        )
        .to_lowercase()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_value() -> Value {
        json!({
            "metadata": {
                "title": "Video Streaming Standards",
                "subtitle": "Reference",
                "description": "All the standards",
                "version": "1.0",
                "lastUpdated": "2025-01-01"
            },
            "layers": [{
                "id": "app",
                "name": "Application",
                "subtitle": "Players",
                "description": "User-facing",
                "keyFunctions": ["Playback"],
                "categories": [{
                    "id": "protocols",
                    "name": "Protocols",
                    "description": "Delivery protocols",
                    "keyOrganizations": [{"name": "IETF", "description": "Internet standards"}],
                    "researchAreas": ["Low latency"],
                    "links": [{"text": "RFC 8216", "url": "https://www.rfc-editor.org/rfc/rfc8216"}],
                    "technologies": [
                        {"name": "HLS", "description": "HTTP Live Streaming", "searchTerms": ["hls", "apple"]},
                        {"name": "DASH", "description": "MPEG-DASH", "searchTerms": ["dash", "mpeg"],
                         "links": [{"text": "Spec", "url": "https://dashif.org"}]}
                    ]
                }]
            }]
        })
    }

    #[test]
    fn test_from_value_decodes_camel_case_fields() {
        let doc = Document::from_value(sample_value()).unwrap();

        assert_eq!(doc.metadata.title, "Video Streaming Standards");
        assert_eq!(doc.layers[0].key_functions, vec!["Playback"]);
        assert_eq!(doc.layers[0].categories[0].key_organizations[0].name, "IETF");
        assert_eq!(
            doc.layers[0].categories[0].technologies[0].search_terms,
            vec!["hls", "apple"]
        );
    }

    #[test]
    fn test_from_value_keeps_unknown_metadata_keys() {
        let doc = Document::from_value(sample_value()).unwrap();
        assert_eq!(
            doc.metadata.extra.get("lastUpdated"),
            Some(&json!("2025-01-01"))
        );
    }

    #[test]
    fn test_from_value_defaults_missing_fields() {
        // Arrange: a layer with nothing but an id
        let value = json!({"layers": [{"id": "bare"}]});

        // Act
        let doc = Document::from_value(value).unwrap();

        // Assert
        assert_eq!(doc.metadata.title, "");
        assert_eq!(doc.layers[0].id, "bare");
        assert!(doc.layers[0].categories.is_empty());
    }

    #[test]
    fn test_from_value_tolerates_scalar_search_terms() {
        let value = json!({"layers": [{"categories": [{"technologies": [
            {"name": "HLS", "searchTerms": "hls", "links": "https://x"}
        ]}]}]});

        let doc = Document::from_value(value).unwrap();

        let tech = &doc.layers[0].categories[0].technologies[0];
        assert_eq!(tech.name, "HLS");
        assert!(tech.search_terms.is_empty());
        assert!(tech.links.is_none());
    }

    #[test]
    fn test_from_value_maps_null_fields_to_defaults() {
        // Arrange
        let mut value = sample_value();
        value["layers"][0]["subtitle"] = Value::Null;
        value["layers"][0]["keyFunctions"] = Value::Null;
        value["layers"][0]["categories"][0]["technologies"][1]["links"] = Value::Null;

        // Act
        let doc = Document::from_value(value).unwrap();

        // Assert
        assert_eq!(doc.layers[0].subtitle, "");
        assert!(doc.layers[0].key_functions.is_empty());
        assert!(doc.layers[0].categories[0].technologies[1].links.is_none());
    }

    #[test]
    fn test_from_value_renders_non_string_scalars_as_text() {
        let mut value = sample_value();
        value["metadata"]["version"] = json!(1.0);
        value["layers"][0]["keyFunctions"] = json!(["Playback", 4]);

        let doc = Document::from_value(value).unwrap();

        assert_eq!(doc.metadata.version, "1.0");
        assert_eq!(doc.layers[0].key_functions, vec!["Playback", "4"]);
        assert_eq!(
            doc.metadata.extra.get("lastUpdated"),
            Some(&json!("2025-01-01"))
        );
    }

    #[test]
    fn test_from_value_non_object_nodes_become_defaults() {
        let value = json!({
            "metadata": "none",
            "layers": [{"categories": [null, {"name": "Codecs"}]}]
        });

        let doc = Document::from_value(value).unwrap();

        assert_eq!(doc.metadata, Metadata::default());
        assert_eq!(doc.layers[0].categories[0], Category::default());
        assert_eq!(doc.layers[0].categories[1].name, "Codecs");
    }

    #[test]
    fn test_from_value_rejects_scalar_root() {
        assert!(Document::from_value(json!(42)).is_err());
    }

    #[test]
    fn test_technology_links_absent_vs_empty() {
        let doc = Document::from_value(sample_value()).unwrap();
        let techs = &doc.layers[0].categories[0].technologies;
        assert!(techs[0].links.is_none());
        assert_eq!(techs[1].links.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_technologies_iterates_in_document_order() {
        let doc = Document::from_value(sample_value()).unwrap();
        let names: Vec<&str> = doc.technologies().map(|t| t.technology.name.as_str()).collect();
        assert_eq!(names, vec!["HLS", "DASH"]);
    }

    #[test]
    fn test_technology_count_sums_all_categories() {
        let doc = Document::from_value(sample_value()).unwrap();
        assert_eq!(doc.technology_count(), 2);
    }

    #[test]
    fn test_search_key_is_lowercase_join() {
        let tech = Technology {
            name: "HLS".to_string(),
            search_terms: vec!["HLS".to_string(), "Apple".to_string()],
            ..Technology::default()
        };
        assert_eq!(tech.search_key(), "hls apple");
    }

    #[test]
    fn test_haystack_includes_category_name() {
        let tech = Technology {
            name: "SRT".to_string(),
            search_terms: vec!["secure".to_string()],
            ..Technology::default()
        };
        assert_eq!(tech.haystack("Contribution Protocols"), "srt secure contribution protocols");
    }

    #[test]
    fn test_layer_lookup_by_id() {
        let doc = Document::from_value(sample_value()).unwrap();
        assert_eq!(doc.layer("app").map(|l| l.name.as_str()), Some("Application"));
        assert!(doc.layer("missing").is_none());
    }
}
