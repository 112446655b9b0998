//! Page surfaces that documents are rendered into.
//!
//! A page surface exposes exactly one mutation: replacing the HTML content
//! of one element, addressed by id. The loader never creates elements; the
//! target element for a document must already exist in the page.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

/// Errors raised by a page surface
#[derive(Debug, Error)]
pub enum PanelError {
    /// The page has no element with the requested id
    #[error("no element with id '{0}' in the page")]
    MissingElement(String),
}

/// A surface holding addressable content panels
pub trait Panel: Send + Sync {
    /// Replace the HTML content of the element with the given id
    fn set_html(&self, element_id: &str, html: &str) -> Result<(), PanelError>;
}

/// In-memory page surface for the CLI and tests.
///
/// Elements must be registered up front; writes to unregistered ids fail
/// with [`PanelError::MissingElement`].
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, String>>,
}

impl MemoryPage {
    /// Create a page with the given element ids, all initially empty
    pub fn with_elements<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = ids
            .into_iter()
            .map(|id| (id.into(), String::new()))
            .collect();

        Self {
            elements: Mutex::new(elements),
        }
    }

    /// Current HTML content of an element, if it exists
    pub fn html(&self, element_id: &str) -> Option<String> {
        self.elements.lock().unwrap().get(element_id).cloned()
    }
}

impl Panel for MemoryPage {
    fn set_html(&self, element_id: &str, html: &str) -> Result<(), PanelError> {
        let mut elements = self.elements.lock().unwrap();

        match elements.get_mut(element_id) {
            Some(content) => {
                *content = html.to_string();
                Ok(())
            }
            None => Err(PanelError::MissingElement(element_id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_html_replaces_content() {
        let page = MemoryPage::with_elements(["privacy-content"]);

        page.set_html("privacy-content", "<p>first</p>").unwrap();
        page.set_html("privacy-content", "<p>second</p>").unwrap();

        assert_eq!(page.html("privacy-content").unwrap(), "<p>second</p>");
    }

    #[test]
    fn test_set_html_unknown_element() {
        let page = MemoryPage::with_elements(["privacy-content"]);

        let result = page.set_html("terms-content", "<p>hi</p>");
        assert!(matches!(result, Err(PanelError::MissingElement(id)) if id == "terms-content"));
    }

    #[test]
    fn test_html_unknown_element_is_none() {
        let page = MemoryPage::default();
        assert!(page.html("missing").is_none());
    }
}
