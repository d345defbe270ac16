//! Reads the document from the local filesystem with `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;
use tracing::debug;

use crate::application::{FetchError, Fetcher};
use crate::domain::DataSource;

/// [`Fetcher`] for [`DataSource::File`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl FileFetcher {
    pub fn new() -> Self {
        Self
    }

    /// Reads `path` as UTF-8 text.
    ///
    /// # Errors
    ///
    /// [`FetchError::Io`] for a missing file, a permissions problem or
    /// content that is not valid UTF-8.
    pub async fn read(&self, path: &Path) -> Result<String, FetchError> {
        debug!(path = %path.display(), "reading data file");
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FetchError::Io {
                path: path.display().to_string(),
                source,
            })
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, source: &DataSource) -> Result<String, FetchError> {
        match source {
            DataSource::File(path) => self.read(path).await,
            DataSource::Url(url) => Err(FetchError::Unsupported(url.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_existing_file() {
        // Arrange
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"layers": []}}"#).unwrap();
        let source = DataSource::File(file.path().to_path_buf());

        // Act
        let text = FileFetcher::new().fetch(&source).await.unwrap();

        // Assert
        assert_eq!(text, r#"{"layers": []}"#);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DataSource::File(dir.path().join("absent.json"));

        let err = FileFetcher::new().fetch(&source).await.unwrap_err();

        assert!(matches!(err, FetchError::Io { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[tokio::test]
    async fn test_url_source_is_unsupported() {
        let source = DataSource::parse("https://example.org/data.json").unwrap();
        let err = FileFetcher::new().fetch(&source).await.unwrap_err();
        assert!(matches!(err, FetchError::Unsupported(_)));
    }
}
