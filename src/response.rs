use crate::request::Request;
use http::{HeaderMap, StatusCode};
use serde_json::Value;

/// An HTTP response.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    request: Request,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl Response {
    /// Creates a response.
    pub const fn new(
        request: Request,
        status: StatusCode,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Self {
        Self {
            request,
            status,
            headers,
            body,
        }
    }

    /// Returns a request which produced this response.
    pub const fn request(&self) -> &Request {
        &self.request
    }

    /// Returns a status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a raw body.
    #[allow(clippy::missing_const_for_fn)]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Returns `true` if a status code is a redirection.
    pub fn is_redirect(&self) -> bool {
        self.status.is_redirection()
    }

    /// Decodes a body as JSON.
    pub fn json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use url::Url;

    fn build_response(status: StatusCode, body: &[u8]) -> Response {
        Response::new(
            Request::get(Url::parse("https://foo.com").unwrap()),
            status,
            Default::default(),
            body.to_vec(),
        )
    }

    #[test]
    fn decode_json_body() {
        assert_eq!(
            build_response(StatusCode::OK, br#"{"id":1}"#).json().unwrap(),
            json!({"id": 1})
        );
    }

    #[test]
    fn fail_to_decode_non_json_body() {
        assert!(build_response(StatusCode::OK, b"<html></html>").json().is_err());
    }

    #[test]
    fn detect_redirect() {
        assert!(build_response(StatusCode::MOVED_PERMANENTLY, b"").is_redirect());
        assert!(!build_response(StatusCode::OK, b"").is_redirect());
    }
}
