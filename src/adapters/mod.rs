//! Adapter interfaces for external systems.
//!
//! Adapters provide a unified interface for fetching raw markdown
//! documents, whatever transport they live behind.

pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DocKind;

// Re-export the HTTP source
pub use http::HttpSource;

/// Errors that can occur while fetching a document
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself failed (connectivity, DNS, aborted transfer)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but not with a success status
    #[error("unexpected status {status} for {path}")]
    Status { path: String, status: u16 },
}

/// Trait for document sources
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the raw markdown for a document kind
    async fn fetch(&self, kind: &DocKind) -> Result<String, FetchError>;
}
