//! Core loading logic.
//!
//! This module contains:
//! - ContentLoader: lazy fetch-and-render engine

pub mod loader;

// Re-export commonly used types
pub use loader::{ContentLoader, LoadError};
