//! Load status tracking.

/// Status of a document kind in the loader's state map.
///
/// Absence from the map means the document has never been loaded (or its
/// last load failed). `Loaded` is terminal: nothing transitions out of it.
/// `Loading` marks an in-flight fetch so overlapping calls for the same
/// kind are deduplicated; a failed load removes the entry again, which is
/// what permits retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// A fetch is in flight
    Loading,

    /// The document was fetched and rendered successfully
    Loaded,
}

impl LoadState {
    /// Whether this state is terminal
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}
