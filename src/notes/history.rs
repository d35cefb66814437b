//! Undo/Redo History
//!
//! An append-only log of document snapshots with a cursor. Undo and redo
//! move the cursor; recording a new snapshot after an undo discards the
//! forward history (no branching).

use super::buffer::Document;

#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Document>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(Document::new())
    }
}

impl History {
    pub fn new(initial: Document) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Document {
        &self.snapshots[self.cursor]
    }

    /// Appends `doc` after the cursor, dropping any redo entries
    pub fn record(&mut self, doc: Document) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(doc);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps back one snapshot. Returns `None` at the oldest snapshot.
    pub fn undo(&mut self) -> Option<&Document> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    /// Steps forward one snapshot. Returns `None` when nothing was undone.
    pub fn redo(&mut self) -> Option<&Document> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Zero-based index of the current snapshot
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Snapshots held, including the initial one
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}
