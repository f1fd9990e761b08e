//! Failure kinds reported by clipboard operations.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// No source object on copy, or no target objects on paste.
    #[error("no object selected")]
    EmptySelection,

    /// Paste was requested without choosing any clipboard entries.
    #[error("no clipboard entries selected")]
    NoRecordsSelected,

    /// A clipboard entry position that does not exist (stale view of the store).
    #[error("clipboard entry {index} does not exist (clipboard holds {len})")]
    InvalidIndex { index: usize, len: usize },

    /// The host reported an object it then could not resolve.
    #[error("object '{0}' not found in scene")]
    ObjectNotFound(String),
}

impl ClipboardError {
    /// True when the caller's view of the clipboard is out of date and
    /// should be refreshed rather than just warned about.
    pub fn is_stale_view(&self) -> bool {
        matches!(self, ClipboardError::InvalidIndex { .. })
    }
}
