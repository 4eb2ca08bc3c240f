//! The editing engine: owns the authoritative text state and applies every
//! [`Operation`] to it.
//!
//! Each operation is applied, snapshotted for undo and published to
//! subscribers before the next one is accepted. Subscribers only ever see
//! borrowed views of the state, so they cannot edit from inside a
//! notification.
//!
//! Notifications fire in a fixed order per operation: text, cursor,
//! selection (only when the operation touched it), then misspelled words
//! (always last, derived from the text).

use std::fmt;
use std::path::Path;

use crate::config::EditorConfig;
use crate::editable::{
    DeleteDirection, HistoryManager, MacroRecorder, Operation, Selection, Snapshot, TextBuffer,
};
use crate::error::{BufferError, EngineError, EngineResult};
use crate::io::{FileStore, FsFileStore};
use crate::spellcheck::{Dictionary, MisspelledSpan, SpellChecker};
use crate::tracing::StateSummary;

/// Read-only subscriber to engine state changes.
///
/// All methods have empty defaults so a subscriber only implements what it
/// renders.
pub trait EngineObserver {
    fn on_text_changed(&mut self, _text: &str) {}

    fn on_cursor_changed(&mut self, _pos: usize) {}

    fn on_selection_changed(&mut self, _active: bool, _selection: Selection) {}

    fn on_misspelled_words_changed(&mut self, _spans: &[MisspelledSpan]) {}
}

/// Handle returned by [`EditorEngine::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Which parts of the state an operation touched
#[derive(Debug, Clone, Copy, Default)]
struct Changes {
    text: bool,
    cursor: bool,
    selection: bool,
    spelling: bool,
}

impl Changes {
    const TEXT_AND_CURSOR: Self = Self {
        text: true,
        cursor: true,
        selection: false,
        spelling: false,
    };

    const ALL: Self = Self {
        text: true,
        cursor: true,
        selection: true,
        spelling: false,
    };

    fn with_selection(mut self, touched: bool) -> Self {
        self.selection |= touched;
        self
    }
}

/// Engine-side invariant check: buffer positions are always derived from the
/// engine's own state, so a rejected position is a bug, not an input error.
fn contract<T>(result: Result<T, BufferError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("editor engine computed an invalid buffer position: {e}"),
    }
}

/// Owns the buffer, clipboard, selection and cursor, and composes history,
/// macro recording and spell-checking into the editing command surface.
pub struct EditorEngine {
    buffer: TextBuffer,
    clipboard: TextBuffer,
    selection: Selection,
    selection_active: bool,
    cursor: usize,

    history: HistoryManager,
    recorder: MacroRecorder,
    spell_checker: SpellChecker,
    misspelled: Vec<MisspelledSpan>,
    spell_check_on_edit: bool,

    files: Box<dyn FileStore>,
    observers: Vec<(ObserverId, Box<dyn EngineObserver>)>,
    next_observer_id: u64,
}

impl fmt::Debug for EditorEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorEngine")
            .field("buffer", &self.buffer)
            .field("clipboard", &self.clipboard)
            .field("selection", &self.selection)
            .field("selection_active", &self.selection_active)
            .field("cursor", &self.cursor)
            .field("history", &self.history)
            .field("recorder", &self.recorder)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Default for EditorEngine {
    fn default() -> Self {
        Self::new(Dictionary::new())
    }
}

impl EditorEngine {
    /// Create an engine with an empty buffer, spell-checking against
    /// `dictionary` and reading/writing files on the local filesystem.
    pub fn new(dictionary: Dictionary) -> Self {
        Self {
            buffer: TextBuffer::new(),
            clipboard: TextBuffer::new(),
            selection: Selection::default(),
            selection_active: false,
            cursor: 0,
            history: HistoryManager::new(),
            recorder: MacroRecorder::new(),
            spell_checker: SpellChecker::new(dictionary),
            misspelled: Vec::new(),
            spell_check_on_edit: true,
            files: Box::new(FsFileStore),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Create an engine honouring the persisted configuration
    pub fn from_config(config: &EditorConfig, dictionary: Dictionary) -> Self {
        Self::new(dictionary)
            .with_history_limit(config.history_limit)
            .with_spell_check_on_edit(config.spell_check_on_edit)
    }

    /// Use a different file collaborator for open/save
    pub fn with_file_store(mut self, files: impl FileStore + 'static) -> Self {
        self.files = Box::new(files);
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = HistoryManager::with_max_size(limit);
        self
    }

    pub fn with_spell_check_on_edit(mut self, enabled: bool) -> Self {
        self.spell_check_on_edit = enabled;
        self
    }

    // =========================================================================
    // Subscribers
    // =========================================================================

    /// Register a subscriber; it is notified after every state transition
    pub fn subscribe(&mut self, observer: impl EngineObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove a subscriber. Returns false if the id was unknown.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        self.observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // =========================================================================
    // State accessors
    // =========================================================================

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn clipboard(&self) -> &TextBuffer {
        &self.clipboard
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_selection_active(&self) -> bool {
        self.selection_active
    }

    /// Spans from the most recent spell check
    pub fn misspelled(&self) -> &[MisspelledSpan] {
        &self.misspelled
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_recording()
    }

    /// The current macro log
    pub fn recorded(&self) -> &[Operation] {
        self.recorder.replay_list()
    }

    /// Capture the current editable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.buffer.clone(),
            self.clipboard.clone(),
            self.selection,
            self.cursor,
        )
    }

    fn summary(&self) -> StateSummary {
        StateSummary {
            len: self.buffer.len(),
            cursor: self.cursor,
            selection: self.selection,
            selection_active: self.selection_active,
        }
    }

    // =========================================================================
    // Operation submission
    // =========================================================================

    /// Apply one operation, logging it to the macro recorder first if a
    /// recording is running.
    pub fn execute(&mut self, op: Operation) -> EngineResult<()> {
        tracing::debug!(?op, "execute");
        let before = self.summary();
        self.record(&op);
        let result = self.apply(op);
        if let Some(diff) = before.diff(&self.summary()) {
            tracing::trace!("{}", diff);
        }
        result
    }

    fn record(&mut self, op: &Operation) {
        if op.is_recordable() {
            self.recorder.record(op);
        }
    }

    /// Apply without recording. Replay goes through here so a replay never
    /// grows the log it is reading.
    fn apply(&mut self, op: Operation) -> EngineResult<()> {
        match op {
            Operation::Insert { ch } => self.apply_insert(ch),
            Operation::Delete { direction } => self.apply_delete(direction),
            Operation::UpdateCursor { pos } => self.apply_update_cursor(pos),
            Operation::UpdateSelection { base, end } => self.apply_update_selection(base, end),
            Operation::ExtendSelection { end } => self.apply_extend_selection(end),
            Operation::SelectWordAt { pos } => self.apply_select_word_at(pos),
            Operation::Copy => self.apply_copy(),
            Operation::Cut => self.apply_cut(),
            Operation::Paste => self.apply_paste(),
            Operation::Undo => self.apply_undo(),
            Operation::Redo => self.apply_redo(),
            Operation::StartRecording => self.apply_start_recording(),
            Operation::StopRecording => self.apply_stop_recording(),
            Operation::ToggleRecording => self.toggle_recording(),
            Operation::ReplayMacro => return self.apply_replay(),
            Operation::Open { path } => return self.apply_open_file(&path),
            Operation::Save { path } => return self.apply_save_file(&path),
            Operation::SpellCheck => self.apply_spell_check(),
        }
        Ok(())
    }

    // Per-kind entry points. Each goes through the same recording path as
    // `execute`.

    pub fn insert(&mut self, ch: char) {
        self.record(&Operation::Insert { ch });
        self.apply_insert(ch);
    }

    pub fn delete(&mut self, direction: DeleteDirection) {
        self.record(&Operation::Delete { direction });
        self.apply_delete(direction);
    }

    pub fn update_cursor(&mut self, pos: usize) {
        self.record(&Operation::UpdateCursor { pos });
        self.apply_update_cursor(pos);
    }

    pub fn update_selection(&mut self, base: usize, end: usize) {
        self.record(&Operation::UpdateSelection { base, end });
        self.apply_update_selection(base, end);
    }

    pub fn extend_selection(&mut self, end: usize) {
        self.record(&Operation::ExtendSelection { end });
        self.apply_extend_selection(end);
    }

    pub fn select_word_at(&mut self, pos: usize) {
        self.record(&Operation::SelectWordAt { pos });
        self.apply_select_word_at(pos);
    }

    pub fn copy(&mut self) {
        self.record(&Operation::Copy);
        self.apply_copy();
    }

    pub fn cut(&mut self) {
        self.record(&Operation::Cut);
        self.apply_cut();
    }

    pub fn paste(&mut self) {
        self.record(&Operation::Paste);
        self.apply_paste();
    }

    pub fn undo(&mut self) {
        self.record(&Operation::Undo);
        self.apply_undo();
    }

    pub fn redo(&mut self) {
        self.record(&Operation::Redo);
        self.apply_redo();
    }

    /// Start a fresh macro, discarding the previous one
    pub fn start_recording(&mut self) {
        self.apply_start_recording();
    }

    pub fn stop_recording(&mut self) {
        self.apply_stop_recording();
    }

    /// Start recording when idle, stop when recording
    pub fn toggle_recording(&mut self) {
        if self.recorder.is_recording() {
            self.apply_stop_recording();
        } else {
            self.apply_start_recording();
        }
    }

    /// Re-submit every recorded operation in order
    pub fn replay_macro(&mut self) -> EngineResult<()> {
        self.apply_replay()
    }

    /// Replace the buffer with `chars`. Not undoable: history is reset so
    /// the opened document becomes the state undo bottoms out at.
    pub fn open(&mut self, chars: &[char]) {
        self.buffer.set_chars(chars);
        self.cursor = 0;
        self.selection = Selection::default();
        self.selection_active = false;
        self.history.reset(self.snapshot());
        tracing::debug!(len = self.buffer.len(), "opened document");
        self.publish(Changes::TEXT_AND_CURSOR);
    }

    /// Read `path` through the file collaborator and open it. On failure the
    /// engine state is left untouched.
    pub fn open_file(&mut self, path: &Path) -> EngineResult<()> {
        self.apply_open_file(path)
    }

    /// Write the buffer to `path` through the file collaborator
    pub fn save_file(&mut self, path: &Path) -> EngineResult<()> {
        self.apply_save_file(path)
    }

    /// Recompute misspelled words and publish them
    pub fn spell_check(&mut self) -> &[MisspelledSpan] {
        self.apply_spell_check();
        &self.misspelled
    }

    /// Serialize the recorded macro as JSON
    pub fn export_macro(&self) -> EngineResult<String> {
        Ok(serde_json::to_string_pretty(self.recorder.replay_list())?)
    }

    /// Replace the recorded macro with one parsed from JSON.
    ///
    /// Operations that are never recorded (recording control, files,
    /// spell-check) are rejected so a replay can't recurse or do I/O.
    pub fn import_macro(&mut self, json: &str) -> EngineResult<()> {
        let ops: Vec<Operation> = serde_json::from_str(json)?;
        if let Some(op) = ops.iter().find(|op| !op.is_recordable()) {
            return Err(EngineError::NotRecordable(op.clone()));
        }
        tracing::debug!(count = ops.len(), "imported macro");
        self.recorder.load(ops);
        Ok(())
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Delete the active selection, collapsing the cursor to its start.
    /// Returns true if there was a selection to delete.
    fn delete_selection_if_active(&mut self) -> bool {
        if !self.selection_active {
            return false;
        }
        let range = self.selection.range();
        contract(self.buffer.delete_range(range.start, range.end));
        self.cursor = range.start;
        self.selection = Selection::default();
        self.selection_active = false;
        true
    }

    fn save_snapshot(&mut self) {
        self.history.save(self.snapshot());
        tracing::trace!(undo_count = self.history.undo_count(), "snapshot saved");
    }

    fn apply_insert(&mut self, ch: char) {
        let replaced = self.delete_selection_if_active();
        contract(self.buffer.insert_at(ch, self.cursor));
        self.cursor += 1;
        self.save_snapshot();
        self.publish(Changes::TEXT_AND_CURSOR.with_selection(replaced));
    }

    fn apply_delete(&mut self, direction: DeleteDirection) {
        if self.delete_selection_if_active() {
            self.save_snapshot();
            self.publish(Changes::ALL);
            return;
        }

        match direction {
            DeleteDirection::Forward => self.buffer.delete_at(self.cursor),
            DeleteDirection::Backward => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.buffer.delete_at(self.cursor);
                }
            }
        }
        self.save_snapshot();
        self.publish(Changes::TEXT_AND_CURSOR);
    }

    fn apply_update_cursor(&mut self, pos: usize) {
        self.cursor = self.clamp_position(pos);
        self.selection = Selection::default();
        self.selection_active = false;
        self.publish(Changes {
            cursor: true,
            ..Changes::default()
        });
    }

    fn apply_update_selection(&mut self, base: usize, end: usize) {
        let base = self.clamp_position(base);
        let end = self.clamp_position(end);
        if base == end {
            self.apply_update_cursor(base);
            return;
        }
        self.selection = Selection::new(base, end);
        self.selection_active = true;
        self.cursor = end;
        self.publish(Changes {
            selection: true,
            ..Changes::default()
        });
    }

    fn apply_extend_selection(&mut self, end: usize) {
        let base = if self.selection_active {
            self.selection.base
        } else {
            self.cursor
        };
        self.apply_update_selection(base, end);
    }

    fn apply_select_word_at(&mut self, pos: usize) {
        let start = self.buffer.word_start(pos);
        let end = self.buffer.word_end(pos);
        self.apply_update_selection(start, end);
    }

    fn apply_copy(&mut self) {
        if self.selection_active {
            let range = self.selection.range();
            self.clipboard = contract(self.buffer.copy_range(range.start, range.end));
            tracing::debug!(len = self.clipboard.len(), "copied selection");
        }
    }

    fn apply_cut(&mut self) {
        if !self.selection_active {
            return;
        }
        self.apply_copy();
        self.delete_selection_if_active();
        self.save_snapshot();
        self.publish(Changes::ALL);
    }

    fn apply_paste(&mut self) {
        let replaced = self.delete_selection_if_active();
        if !replaced && self.clipboard.is_empty() {
            return;
        }
        if !self.clipboard.is_empty() {
            contract(self.buffer.insert_at(&self.clipboard, self.cursor));
            self.cursor += self.clipboard.len();
        }
        self.save_snapshot();
        self.publish(Changes::TEXT_AND_CURSOR.with_selection(replaced));
    }

    fn apply_undo(&mut self) {
        let snapshot = self.history.undo();
        tracing::debug!(
            undo_count = self.history.undo_count(),
            redo_count = self.history.redo_count(),
            "undo"
        );
        self.restore(snapshot);
    }

    fn apply_redo(&mut self) {
        let snapshot = self.history.redo();
        tracing::debug!(
            undo_count = self.history.undo_count(),
            redo_count = self.history.redo_count(),
            "redo"
        );
        self.restore(snapshot);
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let (buffer, clipboard, selection, cursor) = snapshot.into_parts();
        self.buffer = buffer;
        self.clipboard = clipboard;
        self.selection = selection;
        self.selection_active = !selection.is_empty();
        self.cursor = cursor;
        self.publish(Changes::ALL);
    }

    fn apply_start_recording(&mut self) {
        self.recorder.clear().start();
        tracing::debug!("macro recording started");
    }

    fn apply_stop_recording(&mut self) {
        self.recorder.stop();
        tracing::debug!(
            count = self.recorder.replay_list().len(),
            "macro recording stopped"
        );
    }

    fn apply_replay(&mut self) -> EngineResult<()> {
        let ops = self.recorder.replay_list().to_vec();
        tracing::debug!(count = ops.len(), "replaying macro");
        for op in ops {
            self.apply(op)?;
        }
        Ok(())
    }

    fn apply_open_file(&mut self, path: &Path) -> EngineResult<()> {
        let chars = self
            .files
            .read_file(path)
            .map_err(|source| EngineError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        self.open(&chars);
        tracing::info!("Opened {}", path.display());
        Ok(())
    }

    fn apply_save_file(&mut self, path: &Path) -> EngineResult<()> {
        let chars = self.buffer.to_chars();
        self.files
            .write_file(path, &chars)
            .map_err(|source| EngineError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!("Saved {}", path.display());
        Ok(())
    }

    fn apply_spell_check(&mut self) {
        self.misspelled = self.spell_checker.misspelled_words(&self.buffer);
        self.publish(Changes {
            spelling: true,
            ..Changes::default()
        });
    }

    fn clamp_position(&self, pos: usize) -> usize {
        let len = self.buffer.len();
        if pos > len {
            tracing::warn!(pos, len, "position past end of buffer, clamping");
        }
        pos.min(len)
    }

    // =========================================================================
    // Notification
    // =========================================================================

    fn publish(&mut self, mut changes: Changes) {
        if changes.text && self.spell_check_on_edit {
            self.misspelled = self.spell_checker.misspelled_words(&self.buffer);
            changes.spelling = true;
        }
        if self.observers.is_empty() {
            return;
        }

        if changes.text {
            let text = self.buffer.content();
            for (_, observer) in self.observers.iter_mut() {
                observer.on_text_changed(&text);
            }
        }
        if changes.cursor {
            for (_, observer) in self.observers.iter_mut() {
                observer.on_cursor_changed(self.cursor);
            }
        }
        if changes.selection {
            for (_, observer) in self.observers.iter_mut() {
                observer.on_selection_changed(self.selection_active, self.selection);
            }
        }
        if changes.spelling {
            for (_, observer) in self.observers.iter_mut() {
                observer.on_misspelled_words_changed(&self.misspelled);
            }
        }
    }
}
