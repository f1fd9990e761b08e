use bevy::prelude::*;

/// Clipboard entries the user has picked in the list, in click order.
///
/// The click order is the order records are handed to paste, so it is kept
/// as a list rather than a set.
#[derive(Resource, Debug, Default)]
pub struct EntrySelection {
    indices: Vec<usize>,
}

impl EntrySelection {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Plain click: select just this entry
    pub fn select_only(&mut self, index: usize) {
        self.indices.clear();
        self.indices.push(index);
    }

    /// Ctrl+click: add the entry at the end, or drop it if already picked
    pub fn toggle(&mut self, index: usize) {
        if let Some(pos) = self.indices.iter().position(|&i| i == index) {
            self.indices.remove(pos);
        } else {
            self.indices.push(index);
        }
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }
}
