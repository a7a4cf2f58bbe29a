mod error;
mod reqwest;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::{StubHttpClient, StubResponse, build_stub_response};
pub use self::{error::HttpClientError, reqwest::ReqwestHttpClient};
use crate::{request::Request, response::Response};
use async_trait::async_trait;

/// An HTTP client.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Sends a `GET` request.
    async fn get(&self, request: &Request) -> Result<Response, HttpClientError>;
}
