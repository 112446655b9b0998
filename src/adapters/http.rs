//! HTTP document source.
//!
//! Fetches markdown documents from a web server, one resource per
//! document kind (`{base_url}/{kind}.md`).

use async_trait::async_trait;

use crate::domain::DocKind;

use super::{DocumentSource, FetchError};

/// Document source backed by an HTTP server
pub struct HttpSource {
    /// Base URL the resource paths are appended to
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a new HTTP source for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        // Resource paths start with a slash already
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Build the full URL for a document kind
    fn document_url(&self, kind: &DocKind) -> String {
        format!("{}{}", self.base_url, kind.resource_path())
    }
}

#[async_trait]
impl DocumentSource for HttpSource {
    async fn fetch(&self, kind: &DocKind) -> Result<String, FetchError> {
        let url = self.document_url(kind);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                path: kind.resource_path(),
                status: status.as_u16(),
            });
        }

        // The body read is part of the transfer; failures here are network
        // failures like any other.
        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}
