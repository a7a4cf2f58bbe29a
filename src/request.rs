use http::{HeaderMap, Method};
use serde_json::Value;
use url::Url;

/// An HTTP request.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Value>,
}

impl Request {
    /// Creates a `GET` request with no headers and no body.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: Default::default(),
            body: None,
        }
    }

    /// Returns a method.
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Returns a URL.
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// Returns headers.
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns a body if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Sets headers.
    pub fn set_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a body.
    pub fn set_body(mut self, body: Option<Value>) -> Self {
        self.body = body;
        self
    }
}
