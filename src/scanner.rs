use crate::{error::Error, http_client::HttpClient, request::Request, response::Response};
use url::Url;

/// API endpoints scanned by default.
pub const API_URLS: &[&str] = &[
    "https://cheesecakelabs.com/challenge/",
    "http://dummy.restapiexample.com/api/v1/employees",
    "https://jsonplaceholder.typicode.com/todos/1",
    "https://jsonplaceholder.typicode.com/posts",
];

/// An API scanner.
pub struct ApiScanner {
    client: Box<dyn HttpClient>,
}

impl ApiScanner {
    /// Creates an API scanner.
    pub fn new(client: impl HttpClient + 'static) -> Self {
        Self {
            client: Box::new(client),
        }
    }

    /// Sends a `GET` request to every URL and collects responses in call
    /// order.
    ///
    /// Requests are sent one at a time. Any client error propagates and
    /// aborts a scan.
    pub async fn scan(&self, urls: &[Url]) -> Result<Vec<Response>, Error> {
        let mut responses = Vec::with_capacity(urls.len());

        for url in urls {
            responses.push(self.client.get(&Request::get(url.clone())).await?);
        }

        Ok(responses)
    }
}
