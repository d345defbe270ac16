//! LoadDocumentUseCase: fetch, parse, optionally validate, then decode.
//!
//! # Pipeline
//!
//! ```text
//! DataSource ──Fetcher──▶ text ──serde_json──▶ Value ──Validator?──▶ Report (logged)
//!                                                │
//!                                                └──Document::from_value──▶ Document
//! ```
//!
//! Validation is advisory: an invalid report is logged with `warn!` and the
//! document is still returned, as long as it decodes into the typed model.
//!
//! # Architecture
//!
//! The loader depends only on the [`Fetcher`] trait. The file and HTTP
//! implementations live in `infrastructure::fetch` and are injected at
//! construction time, so tests can substitute a mock or an in-memory double.

use std::sync::Arc;

use async_trait::async_trait;
use streamdiag_core::{Document, Report, Validator};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::DataSource;

/// Failure to obtain the raw document text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Local file could not be read (missing, permissions, not UTF-8…).
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP error! status: {status} ({url})")]
    Status { url: String, status: u16 },

    /// The request never produced a response (DNS, TLS, connection reset…).
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    /// No fetcher is registered for this kind of source.
    #[error("unsupported data source: {0}")]
    Unsupported(String),
}

/// Error type for the load use case.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The body was not JSON, or its root was not an object.
    #[error("parse failed: {0}")]
    Parse(String),
}

/// Trait for retrieving the document text from a [`DataSource`].
///
/// Infrastructure implementations read files or issue an HTTP GET; test
/// implementations return canned text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, source: &DataSource) -> Result<String, FetchError>;
}

/// A decoded document plus the validator's report, when validation ran.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub document: Document,
    pub report: Option<Report>,
}

/// Loads the diagram document from one source.
pub struct Loader {
    source: DataSource,
    fetcher: Arc<dyn Fetcher>,
    validator: Option<Validator>,
}

impl Loader {
    /// Creates a loader for `source`. Pass `Some(validator)` to check the JSON
    /// before it is decoded.
    pub fn new(
        source: DataSource,
        fetcher: Arc<dyn Fetcher>,
        validator: Option<Validator>,
    ) -> Self {
        Self {
            source,
            fetcher,
            validator,
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Fetches and parses the document.
    ///
    /// # Errors
    ///
    /// [`LoadError::Fetch`] when the source cannot be read, [`LoadError::Parse`]
    /// when the text is not JSON or its root is not an object.
    pub async fn load(&self) -> Result<Document, LoadError> {
        Ok(self.load_checked().await?.document)
    }

    /// Like [`Loader::load`], but also hands back the validation report so the
    /// caller can display it.
    ///
    /// # Errors
    ///
    /// Same as [`Loader::load`]. An invalid report is not an error.
    pub async fn load_checked(&self) -> Result<Loaded, LoadError> {
        info!(source = %self.source, "loading diagram data");
        let text = self.fetcher.fetch(&self.source).await?;
        debug!(bytes = text.len(), "fetched document");

        let value: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| LoadError::Parse(e.to_string()))?;

        let report = self.validator.map(|validator| {
            let report = validator.validate(&value);
            if report.is_valid {
                debug!(warnings = report.warnings.len(), "data validation passed");
            } else {
                warn!(
                    errors = report.errors.len(),
                    "Data validation failed: {}",
                    report.errors.join("; ")
                );
            }
            for warning in &report.warnings {
                warn!("{warning}");
            }
            report
        });

        let document = Document::from_value(value).map_err(|e| LoadError::Parse(e.to_string()))?;
        info!(
            layers = document.layers.len(),
            technologies = document.technology_count(),
            "diagram data loaded"
        );
        Ok(Loaded { document, report })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID: &str = r#"{
        "metadata": {"title": "T", "subtitle": "S", "version": "1"},
        "layers": [{
            "id": "app", "name": "App", "subtitle": "s", "description": "d",
            "keyFunctions": ["k"],
            "categories": [{
                "id": "p", "name": "Protocols", "description": "d",
                "keyOrganizations": [], "researchAreas": [], "links": [],
                "technologies": [{"name": "HLS", "description": "d", "searchTerms": ["hls"]}]
            }]
        }]
    }"#;

    fn source() -> DataSource {
        DataSource::File(PathBuf::from("data.json"))
    }

    fn mock_returning(body: &'static str) -> Arc<dyn Fetcher> {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .times(1)
            .returning(move |_| Ok(body.to_string()));
        Arc::new(fetcher)
    }

    #[tokio::test]
    async fn test_load_returns_document_on_valid_json() {
        // Arrange
        let loader = Loader::new(source(), mock_returning(VALID), None);

        // Act
        let doc = loader.load().await.expect("load must succeed");

        // Assert
        assert_eq!(doc.metadata.title, "T");
        assert_eq!(doc.technology_count(), 1);
    }

    #[tokio::test]
    async fn test_load_checked_without_validator_has_no_report() {
        let loader = Loader::new(source(), mock_returning(VALID), None);
        let loaded = loader.load_checked().await.unwrap();
        assert!(loaded.report.is_none());
    }

    #[tokio::test]
    async fn test_load_checked_with_validator_reports_valid() {
        let loader = Loader::new(source(), mock_returning(VALID), Some(Validator::new()));
        let loaded = loader.load_checked().await.unwrap();
        assert!(loaded.report.expect("validator ran").is_valid);
    }

    #[tokio::test]
    async fn test_invalid_document_still_loads() {
        // Arrange: layer lacks keyFunctions, subtitle and description
        let body = r#"{"metadata": {"title": "T", "subtitle": "S", "version": "1"},
                       "layers": [{"id": "app", "name": "App", "categories": []}]}"#;
        let loader = Loader::new(source(), mock_returning(body), Some(Validator::new()));

        // Act
        let loaded = loader.load_checked().await.expect("validation is advisory");

        // Assert
        let report = loaded.report.unwrap();
        assert!(!report.is_valid);
        assert_eq!(report.errors.len(), 3);
        assert_eq!(loaded.document.layers[0].id, "app");
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let loader = Loader::new(source(), mock_returning("{invalid"), Some(Validator::new()));
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_scalar_root_is_parse_error() {
        let loader = Loader::new(source(), mock_returning("42"), None);
        let err = loader.load().await.unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_null_field_loads_and_is_reported_missing() {
        // Arrange
        let body = r#"{
            "metadata": {"title": "T", "subtitle": "S", "version": "1"},
            "layers": [{
                "id": "app", "name": "App", "subtitle": null, "description": "d",
                "keyFunctions": ["k"], "categories": []
            }]
        }"#;
        let loader = Loader::new(source(), mock_returning(body), Some(Validator::new()));

        // Act
        let loaded = loader.load_checked().await.expect("null is advisory, not fatal");

        // Assert
        assert_eq!(loaded.document.layers[0].subtitle, "");
        assert_eq!(
            loaded.report.unwrap().errors,
            vec!["Layer 0: Missing required field 'subtitle'"]
        );
    }

    #[tokio::test]
    async fn test_numeric_version_loads_as_text() {
        // Arrange
        let body = r#"{"metadata": {"title": "T", "subtitle": "S", "version": 1.0}, "layers": []}"#;
        let loader = Loader::new(source(), mock_returning(body), Some(Validator::new()));

        // Act
        let loaded = loader.load_checked().await.expect("numeric version must load");

        // Assert
        assert_eq!(loaded.document.metadata.version, "1.0");
        assert!(loaded.report.unwrap().is_valid);
    }

    #[tokio::test]
    async fn test_zero_version_loads_and_is_reported_missing() {
        let body = r#"{"metadata": {"title": "T", "subtitle": "S", "version": 0}, "layers": []}"#;
        let loader = Loader::new(source(), mock_returning(body), Some(Validator::new()));

        let loaded = loader.load_checked().await.unwrap();

        assert_eq!(loaded.document.metadata.version, "0");
        assert_eq!(
            loaded.report.unwrap().errors,
            vec!["Missing required metadata field: 'version'"]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        // Arrange
        let mut fetcher = MockFetcher::new();
        fetcher.expect_fetch().returning(|source| {
            Err(FetchError::Status {
                url: source.to_string(),
                status: 404,
            })
        });
        let loader = Loader::new(source(), Arc::new(fetcher), None);

        // Act
        let err = loader.load().await.unwrap_err();

        // Assert
        assert!(matches!(err, LoadError::Fetch(FetchError::Status { status: 404, .. })));
        assert!(err.to_string().contains("status: 404"));
    }

    #[tokio::test]
    async fn test_fetcher_receives_configured_source() {
        let mut fetcher = MockFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|s| *s == DataSource::File(PathBuf::from("data.json")))
            .times(1)
            .returning(|_| Ok(VALID.to_string()));
        let loader = Loader::new(source(), Arc::new(fetcher), None);

        assert!(loader.load().await.is_ok());
    }
}
