//! Capture into the store and compute what a paste applies.

use super::error::ClipboardError;
use super::matrix::TransformMatrix;
use super::store::{ClipboardRecord, ClipboardStore};

/// The transform handed to the host for one paste target.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedResult {
    pub target: String,
    pub transform: TransformMatrix,
}

/// Record `transform` for `object_id` and return the new entry's position.
pub fn capture(
    store: &mut ClipboardStore,
    object_id: &str,
    transform: TransformMatrix,
) -> Result<usize, ClipboardError> {
    let record = ClipboardRecord::new(object_id, transform)?;
    Ok(store.append(record))
}

/// Matrix a paste of `records` applies.
///
/// One record is used verbatim. Several records are combined with
/// [`TransformMatrix::mean`], the naive element-wise mean.
pub fn paste_matrix(records: &[ClipboardRecord]) -> Result<TransformMatrix, ClipboardError> {
    match records {
        [] => Err(ClipboardError::NoRecordsSelected),
        [single] => Ok(*single.transform()),
        many => TransformMatrix::mean(many.iter().map(ClipboardRecord::transform))
            .ok_or(ClipboardError::NoRecordsSelected),
    }
}

/// Pair every target with the paste matrix, in target order.
///
/// Targets are checked before records, so a paste with nothing selected
/// anywhere reports `EmptySelection`.
pub fn apply(
    selected_records: &[ClipboardRecord],
    targets: &[String],
) -> Result<Vec<AppliedResult>, ClipboardError> {
    if targets.is_empty() {
        return Err(ClipboardError::EmptySelection);
    }

    let transform = paste_matrix(selected_records)?;

    Ok(targets
        .iter()
        .map(|target| AppliedResult {
            target: target.clone(),
            transform,
        })
        .collect())
}
