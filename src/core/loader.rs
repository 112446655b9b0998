//! Lazy document loading.
//!
//! Fetches each document at most once per process lifetime, renders it,
//! and writes it into its page panel. Any failure is absorbed here: the
//! panel gets the fixed error fallback and the document stays eligible
//! for retry on the next call.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::{debug, error, info};

use crate::adapters::{DocumentSource, FetchError};
use crate::domain::{DocKind, LoadState};
use crate::page::{Panel, PanelError};
use crate::render;

/// Errors captured inside a load attempt
#[derive(Debug, Error)]
pub enum LoadError {
    /// Fetching the document failed
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// Writing the rendered document into the page failed
    #[error("panel write failed: {0}")]
    Panel(#[from] PanelError),
}

/// Lazily fetches documents and renders them into a page
pub struct ContentLoader {
    /// Where documents come from
    source: Arc<dyn DocumentSource>,

    /// Where rendered documents go
    page: Arc<dyn Panel>,

    /// Per-kind load status; a missing entry means not loaded
    state: Mutex<HashMap<DocKind, LoadState>>,
}

impl ContentLoader {
    /// Create a loader over a document source and a page surface
    pub fn new(source: Arc<dyn DocumentSource>, page: Arc<dyn Panel>) -> Self {
        Self {
            source,
            page,
            state: Mutex::new(HashMap::new()),
        }
    }

    /// Load a document into its panel, unless it is already there.
    ///
    /// Fire-and-forget: the call never returns an error. On success the
    /// panel holds the rendered document and the kind is marked loaded;
    /// on failure the panel holds the error fallback and the kind stays
    /// unloaded, so a later call retries. The target element for the kind
    /// must already exist in the page.
    pub async fn load(&self, kind: &DocKind) {
        // Check-and-mark happens before the first await, so overlapping
        // calls for one kind agree on a single fetch.
        {
            let mut state = self.state.lock().unwrap();
            match state.get(kind) {
                Some(LoadState::Loaded) => {
                    debug!(%kind, "document already loaded");
                    return;
                }
                Some(LoadState::Loading) => {
                    debug!(%kind, "load already in flight");
                    return;
                }
                None => {
                    state.insert(kind.clone(), LoadState::Loading);
                }
            }
        }

        match self.fetch_and_render(kind).await {
            Ok(()) => {
                let mut state = self.state.lock().unwrap();
                state.insert(kind.clone(), LoadState::Loaded);
                info!(%kind, "document loaded");
            }
            Err(err) => {
                // Failure returns the kind to not-loaded so the next call
                // retries.
                self.state.lock().unwrap().remove(kind);
                error!(%kind, %err, "failed to load document");

                let panel_html = render::ERROR_PANEL;
                if let Err(panel_err) = self.page.set_html(&kind.element_id(), panel_html) {
                    error!(%kind, %panel_err, "failed to render error panel");
                }
            }
        }
    }

    /// Whether a document kind has been loaded successfully
    pub fn is_loaded(&self, kind: &DocKind) -> bool {
        self.state
            .lock()
            .unwrap()
            .get(kind)
            .is_some_and(|s| s.is_loaded())
    }

    async fn fetch_and_render(&self, kind: &DocKind) -> Result<(), LoadError> {
        let markdown = self.source.fetch(kind).await?;
        let html = render::to_html(&markdown);
        self.page.set_html(&kind.element_id(), &html)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use crate::page::MemoryPage;

    /// Document source with canned responses, counting fetches
    struct FixedSource {
        markdown: Result<String, u16>,
        fetch_count: AtomicU32,
    }

    impl FixedSource {
        fn ok(markdown: &str) -> Self {
            Self {
                markdown: Ok(markdown.to_string()),
                fetch_count: AtomicU32::new(0),
            }
        }

        fn status(status: u16) -> Self {
            Self {
                markdown: Err(status),
                fetch_count: AtomicU32::new(0),
            }
        }

        fn fetch_count(&self) -> u32 {
            self.fetch_count.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DocumentSource for FixedSource {
        async fn fetch(&self, kind: &DocKind) -> Result<String, FetchError> {
            self.fetch_count.fetch_add(1, Ordering::SeqCst);
            match &self.markdown {
                Ok(markdown) => Ok(markdown.clone()),
                Err(status) => Err(FetchError::Status {
                    path: kind.resource_path(),
                    status: *status,
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_load_renders_into_panel() {
        let source = Arc::new(FixedSource::ok("# Title\n\nHello"));
        let page = Arc::new(MemoryPage::with_elements(["terms-content"]));
        let loader = ContentLoader::new(source.clone(), page.clone());

        let kind = DocKind::new("terms");
        loader.load(&kind).await;

        let html = page.html("terms-content").unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Hello</p>"));
        assert!(loader.is_loaded(&kind));
    }

    #[tokio::test]
    async fn test_second_load_skips_fetch() {
        let source = Arc::new(FixedSource::ok("# Privacy"));
        let page = Arc::new(MemoryPage::with_elements(["privacy-content"]));
        let loader = ContentLoader::new(source.clone(), page.clone());

        let kind = DocKind::new("privacy");
        loader.load(&kind).await;
        loader.load(&kind).await;

        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_status_failure_renders_error_panel() {
        let source = Arc::new(FixedSource::status(404));
        let page = Arc::new(MemoryPage::with_elements(["imprint-content"]));
        let loader = ContentLoader::new(source.clone(), page.clone());

        let kind = DocKind::new("imprint");
        loader.load(&kind).await;

        let html = page.html("imprint-content").unwrap();
        assert!(html.contains("Fehler beim Laden"));
        assert!(!loader.is_loaded(&kind));
    }

    #[tokio::test]
    async fn test_failure_permits_retry() {
        let source = Arc::new(FixedSource::status(500));
        let page = Arc::new(MemoryPage::with_elements(["cookies-content"]));
        let loader = ContentLoader::new(source.clone(), page.clone());

        let kind = DocKind::new("cookies");
        loader.load(&kind).await;
        loader.load(&kind).await;

        // Both calls fetched: failure never marks the kind loaded
        assert_eq!(source.fetch_count(), 2);
        assert!(!loader.is_loaded(&kind));
    }

    #[tokio::test]
    async fn test_missing_element_leaves_kind_unloaded() {
        let source = Arc::new(FixedSource::ok("# Terms"));
        let page = Arc::new(MemoryPage::default());
        let loader = ContentLoader::new(source.clone(), page.clone());

        let kind = DocKind::new("terms");
        loader.load(&kind).await;

        assert!(!loader.is_loaded(&kind));
        assert!(page.html("terms-content").is_none());
    }
}
