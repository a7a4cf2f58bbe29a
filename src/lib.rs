#![doc = include_str!("../README.md")]

mod docs_writer;
mod error;
mod http_client;
mod message;
mod request;
mod response;
mod scanner;

pub use self::{
    docs_writer::DocsWriter,
    error::Error,
    http_client::{HttpClient, HttpClientError, ReqwestHttpClient},
    message::HttpMessage,
    request::Request,
    response::Response,
    scanner::{API_URLS, ApiScanner},
};
