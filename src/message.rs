use crate::{request::Request, response::Response};
use http::HeaderMap;

/// A common capability of HTTP requests and responses.
///
/// Any message exposing its headers can have a header block rendered for it.
pub trait HttpMessage {
    /// Returns headers of a message.
    fn headers(&self) -> &HeaderMap;
}

impl HttpMessage for Request {
    fn headers(&self) -> &HeaderMap {
        Self::headers(self)
    }
}

impl HttpMessage for Response {
    fn headers(&self) -> &HeaderMap {
        Self::headers(self)
    }
}
