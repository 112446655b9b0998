//! Document identifiers.

use serde::{Deserialize, Serialize};

/// Identifier for a lazily loaded document (e.g. "privacy", "terms")
///
/// The identifier is caller-supplied and unvalidated. It selects both the
/// remote markdown resource and the page element the rendered document is
/// written into.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocKind(String);

impl DocKind {
    /// Create a document kind from an identifier
    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Remote resource path for this document
    pub fn resource_path(&self) -> String {
        format!("/{}.md", self.0)
    }

    /// Id of the page element this document renders into
    pub fn element_id(&self) -> String {
        format!("{}-content", self.0)
    }
}

impl std::fmt::Display for DocKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DocKind {
    fn from(kind: &str) -> Self {
        Self::new(kind)
    }
}
