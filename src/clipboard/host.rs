//! Host boundary and the copy/paste/clear operations run against it.

use super::applier::{apply, capture, AppliedResult};
use super::error::ClipboardError;
use super::matrix::TransformMatrix;
use super::messages::ClipboardOutcome;
use super::store::ClipboardStore;

/// What the clipboard needs from the scene it works on.
pub trait TransformHost {
    /// Selected object identifiers in selection order (empty if nothing is selected)
    fn current_selection(&self) -> Vec<String>;

    /// `None` if no object with this identifier exists
    fn get_transform(&self, object_id: &str) -> Option<TransformMatrix>;

    fn set_transform(&mut self, object_id: &str, transform: TransformMatrix);
}

/// Capture the first selected object into the clipboard.
pub fn copy_selection(
    store: &mut ClipboardStore,
    host: &impl TransformHost,
) -> Result<ClipboardOutcome, ClipboardError> {
    let selection = host.current_selection();
    let Some(object_id) = selection.first() else {
        return Err(ClipboardError::EmptySelection);
    };

    let transform = host
        .get_transform(object_id)
        .ok_or_else(|| ClipboardError::ObjectNotFound(object_id.clone()))?;

    let index = capture(store, object_id, transform)?;
    Ok(ClipboardOutcome::Copied {
        index,
        object_id: object_id.clone(),
    })
}

/// Apply the clipboard entries at `entries` to every selected object.
///
/// The host's `set_transform` is called once per target, in selection order.
/// Failures inside the host are its own concern and are not retried.
pub fn paste_selection(
    store: &ClipboardStore,
    host: &mut impl TransformHost,
    entries: &[usize],
) -> Result<ClipboardOutcome, ClipboardError> {
    let records = store.records_at(entries)?;
    let targets = host.current_selection();

    let results = apply(&records, &targets)?;
    for AppliedResult { target, transform } in &results {
        host.set_transform(target, *transform);
    }

    Ok(ClipboardOutcome::Pasted {
        targets: results.len(),
    })
}

pub fn clear_clipboard(store: &mut ClipboardStore) -> ClipboardOutcome {
    store.clear();
    ClipboardOutcome::Cleared
}
