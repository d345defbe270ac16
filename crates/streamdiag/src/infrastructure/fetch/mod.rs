//! Fetch infrastructure: implementations of the [`Fetcher`] trait.
//!
//! - [`file::FileFetcher`] reads local files (`tokio::fs`).
//! - [`http::HttpFetcher`] issues a GET (`reqwest`).
//! - [`SourceFetcher`] picks one of the two by looking at the [`DataSource`].
//!
//! The binary always injects a `SourceFetcher`, so `--data` accepts both a
//! path and a URL without the loader knowing which.

pub mod file;
pub mod http;

use async_trait::async_trait;

use crate::application::{FetchError, Fetcher};
use crate::domain::DataSource;

pub use file::FileFetcher;
pub use http::HttpFetcher;

/// Dispatches to the file or HTTP fetcher according to the source kind.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    file: FileFetcher,
    http: HttpFetcher,
}

impl SourceFetcher {
    /// # Errors
    ///
    /// Propagates [`HttpFetcher::new`] failures.
    pub fn new() -> Result<Self, FetchError> {
        Ok(Self {
            file: FileFetcher::new(),
            http: HttpFetcher::new()?,
        })
    }
}

#[async_trait]
impl Fetcher for SourceFetcher {
    async fn fetch(&self, source: &DataSource) -> Result<String, FetchError> {
        match source {
            DataSource::File(path) => self.file.read(path).await,
            DataSource::Url(url) => self.http.get(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_source_goes_to_file_fetcher() {
        // Arrange
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, "{}").unwrap();

        // Act
        let text = SourceFetcher::new()
            .unwrap()
            .fetch(&DataSource::File(path))
            .await
            .unwrap();

        // Assert
        assert_eq!(text, "{}");
    }
}
