//! Fetches the document over HTTP(S) with `reqwest`.
//!
//! One GET per load. A non-2xx status is a [`FetchError::Status`]; anything
//! that prevents a response (DNS, TLS, refused connection, timeout) is a
//! [`FetchError::Transport`]. There is no retry.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::application::{FetchError, Fetcher};
use crate::domain::DataSource;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// [`Fetcher`] for [`DataSource::Url`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    http: Client,
}

impl HttpFetcher {
    /// Builds the underlying client.
    ///
    /// # Errors
    ///
    /// [`FetchError::Transport`] if the TLS backend cannot be initialised.
    pub fn new() -> Result<Self, FetchError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("streamdiag/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Transport {
                url: String::new(),
                message: e.to_string(),
            })?;
        Ok(Self { http })
    }

    /// GETs `url` and returns the body text.
    ///
    /// # Errors
    ///
    /// [`FetchError::Status`] on a non-success status, otherwise
    /// [`FetchError::Transport`].
    pub async fn get(&self, url: &Url) -> Result<String, FetchError> {
        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        };

        debug!(%url, "requesting data document");
        let response = self.http.get(url.clone()).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(transport)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, source: &DataSource) -> Result<String, FetchError> {
        match source {
            DataSource::Url(url) => self.get(url).await,
            DataSource::File(path) => Err(FetchError::Unsupported(path.display().to_string())),
        }
    }
}
