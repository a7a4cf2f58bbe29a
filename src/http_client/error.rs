use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};
use std::sync::Arc;

/// An HTTP client error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// An HTTP transport failure.
    Http(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
        }
    }
}
