//! Ordered buffer of captured transforms.

use bevy::prelude::*;

use super::error::ClipboardError;
use super::matrix::TransformMatrix;

/// One captured (object, transform) pair.
///
/// The object name is whatever the host called the object at copy time and is
/// never re-validated. Records are addressed by position, not by name, since
/// the same object may be copied several times.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardRecord {
    object_name: String,
    transform: TransformMatrix,
}

impl ClipboardRecord {
    /// Fails with `EmptySelection` when no object name is given.
    pub fn new(
        object_name: impl Into<String>,
        transform: TransformMatrix,
    ) -> Result<Self, ClipboardError> {
        let object_name = object_name.into();
        if object_name.is_empty() {
            return Err(ClipboardError::EmptySelection);
        }
        Ok(Self {
            object_name,
            transform,
        })
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn transform(&self) -> &TransformMatrix {
        &self.transform
    }

    /// `"object: [m0, m1, ...]"` line shown in the clipboard list
    pub fn display_line(&self) -> String {
        format!("{}: {}", self.object_name, self.transform)
    }
}

/// Resource holding every captured record in insertion order.
///
/// Only grows by [`append`](Self::append) and only shrinks by
/// [`clear`](Self::clear); there is no single-entry removal.
#[derive(Resource, Debug, Default)]
pub struct ClipboardStore {
    records: Vec<ClipboardRecord>,
}

impl ClipboardStore {
    /// Add a record at the end and return its position.
    pub fn append(&mut self, record: ClipboardRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Records at the given positions, in the order the positions were given.
    pub fn records_at(&self, indices: &[usize]) -> Result<Vec<ClipboardRecord>, ClipboardError> {
        indices
            .iter()
            .map(|&index| {
                self.records
                    .get(index)
                    .cloned()
                    .ok_or(ClipboardError::InvalidIndex {
                        index,
                        len: self.records.len(),
                    })
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<&ClipboardRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn display_lines(&self) -> Vec<String> {
        self.records.iter().map(ClipboardRecord::display_line).collect()
    }
}
