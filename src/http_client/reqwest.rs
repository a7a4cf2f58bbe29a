use super::{HttpClient, HttpClientError};
use crate::{request::Request, response::Response};
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder};

/// An HTTP client based on [`reqwest`].
#[derive(Debug)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP client.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ClientBuilder::new().tcp_keepalive(None).build()?,
        })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, request: &Request) -> Result<Response, HttpClientError> {
        trace!("sending a request to {}", request.url());

        let response = self
            .client
            .execute(
                self.client
                    .get(request.url().clone())
                    .headers(request.headers().clone())
                    .build()?,
            )
            .await?;

        trace!("got {} response from {}", response.status(), request.url());

        Ok(Response::new(
            request.clone(),
            response.status(),
            response.headers().clone(),
            response.bytes().await?.to_vec(),
        ))
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}
