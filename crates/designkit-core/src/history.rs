//! Snapshot-based undo/redo history.
//!
//! Every undoable command records the full `{objects, canvas, title}` state
//! before it mutates. Undo and redo swap whole snapshots, so deletions,
//! reorders and component group edits all restore uniformly.
//!
//! Batches coalesce any number of commands (a drag commit, a paste) into a
//! single entry holding the state from before the batch began.

use crate::document::CanvasConfig;
use crate::shapes::DesignObject;

/// Default number of undo steps retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// A snapshot of document state for undo/redo.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    pub objects: Vec<DesignObject>,
    pub canvas: CanvasConfig,
    pub title: String,
}

impl DocumentSnapshot {
    pub fn capture(objects: &[DesignObject], canvas: &CanvasConfig, title: &str) -> Self {
        Self {
            objects: objects.to_vec(),
            canvas: canvas.clone(),
            title: title.to_string(),
        }
    }
}

/// Bounded undo/redo stacks with batch grouping.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<DocumentSnapshot>,
    redo_stack: Vec<DocumentSnapshot>,
    limit: usize,
    /// Batch nesting depth (0 = not batching).
    batch_depth: usize,
    /// State captured when the outermost batch began.
    batch_snapshot: Option<DocumentSnapshot>,
    /// Whether anything was recorded during the current batch.
    batch_dirty: bool,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl History {
    /// Create a history retaining at most `limit` undo steps (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: limit.max(1),
            batch_depth: 0,
            batch_snapshot: None,
            batch_dirty: false,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Record the state before a mutation.
    ///
    /// Inside a batch the snapshot is not taken; the batch's opening state
    /// stands for every command in it.
    pub fn record(&mut self, before: impl FnOnce() -> DocumentSnapshot) {
        if self.batch_depth > 0 {
            self.batch_dirty = true;
            return;
        }
        self.push(before());
    }

    fn push(&mut self, snapshot: DocumentSnapshot) {
        self.undo_stack.push(snapshot);
        self.redo_stack.clear();

        if self.undo_stack.len() > self.limit {
            self.undo_stack.remove(0);
            log::debug!("Undo history full, dropped oldest entry");
        }
    }

    /// Start a batch. Nested batches join the outermost one.
    pub fn begin_batch(&mut self, current: impl FnOnce() -> DocumentSnapshot) {
        if self.batch_depth == 0 {
            self.batch_snapshot = Some(current());
            self.batch_dirty = false;
        }
        self.batch_depth += 1;
    }

    /// End a batch. When the outermost batch closes and something was
    /// recorded, one entry is pushed. Returns whether an entry was pushed.
    pub fn end_batch(&mut self) -> bool {
        if self.batch_depth == 0 {
            return false;
        }
        self.batch_depth -= 1;
        if self.batch_depth > 0 {
            return false;
        }

        let snapshot = self.batch_snapshot.take();
        let dirty = std::mem::take(&mut self.batch_dirty);
        match snapshot {
            Some(snapshot) if dirty => {
                self.push(snapshot);
                true
            }
            _ => false,
        }
    }

    pub fn is_batching(&self) -> bool {
        self.batch_depth > 0
    }

    /// Step back. `current` is saved for redo; returns the state to restore.
    pub fn undo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snapshot)
    }

    /// Step forward. `current` is saved for undo; returns the state to restore.
    pub fn redo(&mut self, current: DocumentSnapshot) -> Option<DocumentSnapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(title: &str) -> DocumentSnapshot {
        DocumentSnapshot::capture(&[], &CanvasConfig::default(), title)
    }

    #[test]
    fn test_undo_redo() {
        let mut history = History::default();
        history.record(|| titled("a"));
        assert!(history.can_undo());
        assert!(!history.can_redo());

        let restored = history.undo(titled("b")).unwrap();
        assert_eq!(restored.title, "a");
        assert!(history.can_redo());

        let again = history.redo(titled("a")).unwrap();
        assert_eq!(again.title, "b");
        assert!(history.undo(titled("b")).is_some());
        assert!(history.undo(titled("a")).is_none());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = History::default();
        history.record(|| titled("a"));
        history.undo(titled("b"));
        assert!(history.can_redo());
        history.record(|| titled("a"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.record(|| titled(&i.to_string()));
        }
        assert_eq!(history.undo_len(), 3);

        let mut titles = Vec::new();
        let mut current = titled("5");
        while let Some(snapshot) = history.undo(current.clone()) {
            titles.push(snapshot.title.clone());
            current = snapshot;
        }
        assert_eq!(titles, ["4", "3", "2"]);
    }

    #[test]
    fn test_batch_coalesces() {
        let mut history = History::default();
        history.begin_batch(|| titled("before"));
        history.record(|| panic!("snapshots are not taken inside a batch"));
        history.record(|| panic!("snapshots are not taken inside a batch"));
        assert!(history.end_batch());
        assert_eq!(history.undo_len(), 1);
        assert_eq!(history.undo(titled("after")).unwrap().title, "before");
    }

    #[test]
    fn test_nested_batches_join_outermost() {
        let mut history = History::default();
        history.begin_batch(|| titled("outer"));
        history.begin_batch(|| titled("inner"));
        history.record(|| titled("x"));
        assert!(!history.end_batch());
        assert!(history.is_batching());
        assert!(history.end_batch());
        assert_eq!(history.undo(titled("now")).unwrap().title, "outer");
    }

    #[test]
    fn test_empty_batch_records_nothing() {
        let mut history = History::default();
        history.begin_batch(|| titled("before"));
        assert!(!history.end_batch());
        assert!(!history.can_undo());
        assert!(!history.end_batch());
    }
}
