//! docpanel - Lazy markdown document loader for page panels
//!
//! Fetches markdown documents on demand, renders them to HTML, and writes
//! them into addressable panels of a page surface. Each document is
//! fetched at most once per process lifetime; failures render a fixed
//! fallback panel and leave the document eligible for retry.
//!
//! # Architecture
//!
//! The loader is built around a small amount of shared state:
//! - A per-kind status map records which documents are loaded or in flight
//! - Loaded is terminal; a failed load clears the entry so retries work
//! - All failure handling lives inside the load call, so callers can
//!   discard the future (fire-and-forget)
//!
//! # Modules
//!
//! - `adapters`: Document sources (HTTP)
//! - `core`: Loading logic (ContentLoader)
//! - `domain`: Data structures (DocKind, LoadState)
//! - `render`: Markdown-to-HTML conversion and the error panel
//! - `page`: Page surfaces documents render into
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Load a document and print the panel content
//! docpanel load privacy --base-url http://127.0.0.1:8000
//!
//! # Render local markdown
//! docpanel render --input terms.md
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod page;
pub mod render;

// Re-export main types at crate root for convenience
pub use adapters::{DocumentSource, FetchError, HttpSource};
pub use config::Config;
pub use core::{ContentLoader, LoadError};
pub use domain::{DocKind, LoadState};
pub use page::{MemoryPage, Panel, PanelError};
