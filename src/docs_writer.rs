use crate::{error::Error, message::HttpMessage, request::Request, response::Response};
use http::header::CONTENT_TYPE;
use serde_json::Value;
use std::path::PathBuf;
use tokio::{
    fs::{File, OpenOptions},
    io::AsyncWriteExt,
};

const JSON_CONTENT_TYPE: &str = "application/json";

/// A markdown documentation writer for API responses.
pub struct DocsWriter {
    path: PathBuf,
}

impl DocsWriter {
    /// Creates a documentation writer.
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Writes documentation of responses in their order.
    ///
    /// A file at a path is truncated once per call and appended to per
    /// response. Responses of content types other than JSON are reported on
    /// standard output and skipped.
    pub async fn write(&self, responses: &[Response]) -> Result<(), Error> {
        File::create(&self.path).await?;

        for response in responses {
            self.write_response(response).await?;
        }

        Ok(())
    }

    async fn write_response(&self, response: &Response) -> Result<(), Error> {
        let request = response.request();
        let Some(content_type) = response.headers().get(CONTENT_TYPE) else {
            return Err(Error::MissingContentType {
                url: request.url().clone(),
            });
        };
        let content_type = String::from_utf8_lossy(content_type.as_bytes());

        if !content_type.contains(JSON_CONTENT_TYPE) {
            println!(
                "Error: response is not a JSON: \n\tContent-Type: {} \n\tRequest: {} \n\tResponse {}: {}",
                content_type,
                request.url(),
                response.status().as_u16(),
                String::from_utf8_lossy(response.body()),
            );
            return Ok(());
        }

        let mut file = OpenOptions::new().append(true).open(&self.path).await?;

        Self::write_request_section(&mut file, request).await?;
        Self::write_response_section(&mut file, response).await?;

        file.flush().await?;

        Ok(())
    }

    async fn write_request_section(file: &mut File, request: &Request) -> Result<(), Error> {
        file.write_all(
            format!("### Request: {} {}\n", request.method(), request.url()).as_bytes(),
        )
        .await?;

        Self::write_headers(file, request).await?;
        Self::write_body(file, request).await
    }

    async fn write_response_section(file: &mut File, response: &Response) -> Result<(), Error> {
        file.write_all(format!("\n### Response: {}\n", response.status().as_u16()).as_bytes())
            .await?;
        file.write_all(
            format!(
                "\nIs redirect? {}\n",
                if response.is_redirect() {
                    "True"
                } else {
                    "False"
                }
            )
            .as_bytes(),
        )
        .await?;

        Self::write_headers(file, response).await?;
        Self::write_content(file, response).await
    }

    async fn write_headers(file: &mut File, message: &impl HttpMessage) -> Result<(), Error> {
        file.write_all(b"\nHEADERS:\n").await?;

        if message.headers().is_empty() {
            file.write_all(b"None\n").await?;
            return Ok(());
        }

        write_code_block(
            file,
            &serde_json::to_string_pretty(&headers_to_json(message.headers()))?,
        )
        .await
    }

    async fn write_body(file: &mut File, request: &Request) -> Result<(), Error> {
        file.write_all(b"\nBODY:\n").await?;

        if let Some(body) = request.body() {
            write_code_block(file, &serde_json::to_string_pretty(body)?).await
        } else {
            file.write_all(b"None\n").await?;

            Ok(())
        }
    }

    async fn write_content(file: &mut File, response: &Response) -> Result<(), Error> {
        file.write_all(b"\nContent:\n").await?;

        if response.body().is_empty() {
            file.write_all(b"None\n").await?;
            return Ok(());
        }

        write_code_block(file, &serde_json::to_string_pretty(&response.json()?)?).await
    }
}

async fn write_code_block(file: &mut File, content: &str) -> Result<(), Error> {
    file.write_all(b"\n```\n").await?;
    file.write_all(content.as_bytes()).await?;
    file.write_all(b"\n```\n").await?;

    Ok(())
}

fn headers_to_json(headers: &http::HeaderMap) -> Value {
    Value::Object(
        headers
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned().into(),
                )
            })
            .collect(),
    )
}
