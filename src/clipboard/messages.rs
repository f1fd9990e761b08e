//! Requests into the clipboard and the notifications it sends back.

use bevy::prelude::*;

use super::error::ClipboardError;

/// Copy the transform of the first selected scene object
#[derive(Message, Debug, Clone, Default)]
pub struct CopyTransformRequest;

/// Paste the chosen clipboard entries onto the selected scene objects.
/// `entries` is in the order the user picked them.
#[derive(Message, Debug, Clone, Default)]
pub struct PasteTransformRequest {
    pub entries: Vec<usize>,
}

/// Empty the clipboard
#[derive(Message, Debug, Clone, Default)]
pub struct ClearClipboardRequest;

/// Successful clipboard operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardOutcome {
    Copied { index: usize, object_id: String },
    Pasted { targets: usize },
    Cleared,
}

/// Sent exactly once for every request handled
#[derive(Message, Debug, Clone, PartialEq)]
pub struct ClipboardNotification {
    pub result: Result<ClipboardOutcome, ClipboardError>,
}

impl From<Result<ClipboardOutcome, ClipboardError>> for ClipboardNotification {
    fn from(result: Result<ClipboardOutcome, ClipboardError>) -> Self {
        Self { result }
    }
}
