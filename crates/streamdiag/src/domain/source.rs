//! Where the diagram document lives.
//!
//! A [`DataSource`] is either a local file or an `http`/`https` URL. The
//! distinction is made once, when the `--data` argument or config value is
//! parsed, so the loader never has to sniff strings.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Errors from [`DataSource::parse`].
#[derive(Debug, Error, PartialEq)]
pub enum SourceError {
    #[error("data source must not be empty")]
    Empty,

    /// The value looked like a URL but used a scheme we cannot fetch.
    #[error("unsupported URL scheme '{0}' (expected http, https or file)")]
    UnsupportedScheme(String),
}

/// Location of the JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(Url),
}

impl DataSource {
    /// Interprets `raw` as a URL when it parses as one with an `http`, `https`
    /// or `file` scheme, otherwise as a file path.
    ///
    /// Windows drive letters (`C:\data.json`) parse as a URL with a one-letter
    /// scheme, so single-character schemes are treated as paths.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Empty`] for a blank value and
    /// [`SourceError::UnsupportedScheme`] for URLs such as `ftp://…`.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(SourceError::Empty);
        }

        match Url::parse(raw) {
            Ok(url) if url.scheme().len() > 1 => match url.scheme() {
                "http" | "https" => Ok(Self::Url(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|()| SourceError::UnsupportedScheme("file".to_string())),
                other => Err(SourceError::UnsupportedScheme(other.to_string())),
            },
            _ => Ok(Self::File(PathBuf::from(raw))),
        }
    }

    /// Returns `true` for `http`/`https` sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
