//! Transform clipboard: record object transforms and paste them back.
//!
//! Every copy appends one record (object name + 4x4 matrix) to an ordered
//! buffer. Pasting one record applies its matrix unchanged; pasting several
//! applies their naive element-wise mean. Records are only ever appended or
//! cleared all at once.
//!
//! ## Module Structure
//!
//! - [`matrix`] - Flat 16-float transform matrix and the averaging rule
//! - [`store`] - Clipboard records and the ordered store resource
//! - [`applier`] - Capture and paste-matrix computation
//! - [`host`] - Host trait and the copy/paste/clear operations
//! - [`messages`] - Request and notification messages
//! - [`selection`] - Clipboard entries picked in the list
//! - [`systems`] - Bevy systems driving the operations
//!
//! ## Systems
//!
//! - [`handle_copy_requests`]: Copy the first selected object (Ctrl+C)
//! - [`handle_paste_requests`]: Paste picked entries onto the selection (Ctrl+V)
//! - [`handle_clear_requests`]: Empty the clipboard (Ctrl+Shift+Backspace)

mod applier;
mod error;
mod host;
mod matrix;
mod messages;
mod selection;
mod store;
mod systems;

// Re-exports - Types
pub use error::ClipboardError;
pub use host::TransformHost;
pub use matrix::TransformMatrix;
pub use messages::{
    ClearClipboardRequest, ClipboardNotification, ClipboardOutcome, CopyTransformRequest,
    PasteTransformRequest,
};
pub use selection::EntrySelection;
pub use store::ClipboardStore;

// Used by tests and kept public for other host implementations
#[allow(unused_imports)]
pub use applier::{apply, capture, paste_matrix, AppliedResult};
#[allow(unused_imports)]
pub use host::{clear_clipboard, copy_selection, paste_selection};
#[allow(unused_imports)]
pub use store::ClipboardRecord;

// Re-exports - Systems
pub use systems::{
    handle_clear_requests, handle_clipboard_shortcuts, handle_copy_requests,
    handle_paste_requests,
};

use bevy::prelude::*;

pub struct ClipboardPlugin;

impl Plugin for ClipboardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ClipboardStore>()
            .init_resource::<EntrySelection>()
            .add_message::<CopyTransformRequest>()
            .add_message::<PasteTransformRequest>()
            .add_message::<ClearClipboardRequest>()
            .add_message::<ClipboardNotification>()
            .add_systems(
                Update,
                (
                    handle_clipboard_shortcuts,
                    // Requests are handled in a fixed order within a frame
                    (
                        handle_copy_requests.run_if(on_message::<CopyTransformRequest>),
                        handle_paste_requests.run_if(on_message::<PasteTransformRequest>),
                        handle_clear_requests.run_if(on_message::<ClearClipboardRequest>),
                    )
                        .chain(),
                )
                    .chain(),
            );
    }
}
