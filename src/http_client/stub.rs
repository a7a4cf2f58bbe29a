use super::{HttpClient, HttpClientError};
use crate::{request::Request, response::Response};
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use scc::HashMap;

#[derive(Debug)]
pub struct StubHttpClient {
    responses: HashMap<String, Result<StubResponse, HttpClientError>>,
}

#[derive(Clone, Debug)]
pub struct StubResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl StubHttpClient {
    pub fn new(responses: HashMap<String, Result<StubResponse, HttpClientError>>) -> Self {
        Self { responses }
    }
}

#[async_trait]
impl HttpClient for StubHttpClient {
    async fn get(&self, request: &Request) -> Result<Response, HttpClientError> {
        let stub = self
            .responses
            .get_async(request.url().as_str())
            .await
            .expect("stub response")
            .get()
            .clone()?;

        Ok(Response::new(
            request.clone(),
            stub.status,
            stub.headers,
            stub.body,
        ))
    }
}

pub fn build_stub_response(
    url: &str,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
) -> (String, Result<StubResponse, HttpClientError>) {
    (
        url.into(),
        Ok(StubResponse {
            status,
            headers,
            body,
        }),
    )
}
