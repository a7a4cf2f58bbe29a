use crate::http_client::HttpClientError;
use core::{
    error,
    fmt::{self, Display, Formatter},
};
use std::io;
use url::Url;

/// A scan error.
#[derive(Debug)]
pub enum Error {
    /// An HTTP client failure.
    HttpClient(HttpClientError),
    /// A file I/O failure.
    Io(io::Error),
    /// A body that fails to decode as JSON.
    Json(serde_json::Error),
    /// A response without a `Content-Type` header.
    MissingContentType {
        /// A request URL.
        url: Url,
    },
}

impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpClient(error) => write!(formatter, "{error}"),
            Self::Io(error) => write!(formatter, "{error}"),
            Self::Json(error) => write!(formatter, "invalid JSON content: {error}"),
            Self::MissingContentType { url } => {
                write!(formatter, "content type header not found in response from {url}")
            }
        }
    }
}

impl From<HttpClientError> for Error {
    fn from(error: HttpClientError) -> Self {
        Self::HttpClient(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error)
    }
}
