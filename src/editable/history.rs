//! Snapshot-based edit history (undo/redo).
//!
//! Every state-changing operation stores a [`Snapshot`] of the editable state
//! *after* the edit. Undoing edit N therefore restores the snapshot of edit
//! N-1, which is the new top of the undo stack once N has been moved to the
//! redo stack. When the undo stack runs dry the history's baseline is
//! returned: the canonical empty state, or whatever state was installed with
//! [`HistoryManager::reset`].

use super::buffer::TextBuffer;
use super::selection::Selection;

/// Default number of snapshots kept on the undo stack
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Immutable capture of the editable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    buffer: TextBuffer,
    clipboard: TextBuffer,
    selection: Selection,
    cursor: usize,
}

impl Snapshot {
    pub fn new(
        buffer: TextBuffer,
        clipboard: TextBuffer,
        selection: Selection,
        cursor: usize,
    ) -> Self {
        Self {
            buffer,
            clipboard,
            selection,
            cursor,
        }
    }

    /// The canonical empty state: empty buffer and clipboard, collapsed
    /// selection, cursor at 0.
    pub fn initial_state() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn clipboard(&self) -> &TextBuffer {
        &self.clipboard
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Split into owned parts for restoring into the engine
    pub fn into_parts(self) -> (TextBuffer, TextBuffer, Selection, usize) {
        (self.buffer, self.clipboard, self.selection, self.cursor)
    }
}

/// Two-stack snapshot caretaker.
#[derive(Debug, Clone)]
pub struct HistoryManager {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    baseline: Snapshot,
    max_size: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Create a new history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new history with specified max size (at least 1)
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            baseline: Snapshot::initial_state(),
            max_size: max_size.max(1),
        }
    }

    /// Record a post-edit snapshot. Any new edit invalidates the redo chain.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.redo_stack.clear();
        self.undo_stack.push(snapshot);

        // The oldest snapshot becomes the floor undo can return to
        if self.undo_stack.len() > self.max_size {
            self.baseline = self.undo_stack.remove(0);
            tracing::trace!(max_size = self.max_size, "history limit reached, evicted oldest snapshot");
        }
    }

    /// Step back one edit and return the state to restore.
    pub fn undo(&mut self) -> Snapshot {
        let Some(latest) = self.undo_stack.pop() else {
            return self.baseline.clone();
        };
        self.redo_stack.push(latest);
        self.undo_stack
            .last()
            .cloned()
            .unwrap_or_else(|| self.baseline.clone())
    }

    /// Re-apply the most recently undone edit and return the state to
    /// restore. With nothing to redo the current state is returned and
    /// neither stack changes.
    pub fn redo(&mut self) -> Snapshot {
        if let Some(snapshot) = self.redo_stack.pop() {
            self.undo_stack.push(snapshot.clone());
            return snapshot;
        }
        self.undo_stack
            .last()
            .cloned()
            .unwrap_or_else(|| self.baseline.clone())
    }

    /// Drop all history and make `baseline` the state undo bottoms out at
    pub fn reset(&mut self, baseline: Snapshot) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.baseline = baseline;
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of snapshots in the undo stack
    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of snapshots in the redo stack
    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(text: &str) -> Snapshot {
        let buffer = TextBuffer::from_text(text);
        let cursor = buffer.len();
        Snapshot::new(buffer, TextBuffer::new(), Selection::default(), cursor)
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut history = HistoryManager::new();
        assert_eq!(history.undo(), Snapshot::initial_state());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_returns_previous_snapshot() {
        let mut history = HistoryManager::new();
        history.save(snap("a"));
        history.save(snap("ab"));

        assert_eq!(history.undo(), snap("a"));
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 1);

        // Last undo falls back to the initial state
        assert_eq!(history.undo(), Snapshot::initial_state());
        assert!(!history.can_undo());
        assert_eq!(history.redo_count(), 2);
    }

    #[test]
    fn test_redo_round_trip() {
        let mut history = HistoryManager::new();
        history.save(snap("a"));
        history.save(snap("ab"));

        history.undo();
        history.undo();
        assert_eq!(history.redo(), snap("a"));
        assert_eq!(history.redo(), snap("ab"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_without_future_is_idempotent() {
        let mut history = HistoryManager::new();
        history.save(snap("a"));

        assert_eq!(history.redo(), snap("a"));
        assert_eq!(history.redo(), snap("a"));
        assert_eq!(history.undo_count(), 1);
        assert_eq!(history.redo_count(), 0);

        let mut empty = HistoryManager::new();
        assert_eq!(empty.redo(), Snapshot::initial_state());
    }

    #[test]
    fn test_save_clears_redo() {
        let mut history = HistoryManager::new();
        history.save(snap("a"));
        history.save(snap("ab"));
        history.undo();
        assert!(history.can_redo());

        history.save(snap("ax"));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), snap("ax"));
    }

    #[test]
    fn test_max_size_moves_baseline() {
        let mut history = HistoryManager::with_max_size(2);
        history.save(snap("a"));
        history.save(snap("ab"));
        history.save(snap("abc"));

        assert_eq!(history.undo_count(), 2);
        assert_eq!(history.baseline(), &snap("a"));

        history.undo();
        // Bottoming out returns the evicted snapshot, not the empty state
        assert_eq!(history.undo(), snap("a"));
    }

    #[test]
    fn test_reset_installs_baseline() {
        let mut history = HistoryManager::new();
        history.save(snap("old"));
        history.reset(snap("opened"));

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.undo(), snap("opened"));
    }
}
