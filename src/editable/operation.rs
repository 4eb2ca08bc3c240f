//! Operation types submitted to the editing engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Direction for [`Operation::Delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeleteDirection {
    /// Delete the character after the cursor (Delete)
    Forward,
    /// Delete the character before the cursor (Backspace)
    Backward,
}

/// Every editing intent the engine understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    // === Text ===
    /// Insert a single character, replacing any active selection
    Insert { ch: char },
    /// Delete the active selection, or one character in a direction
    Delete { direction: DeleteDirection },

    // === Cursor and selection ===
    /// Move the cursor and drop the selection
    UpdateCursor { pos: usize },
    /// Select `base..end` (collapses to a cursor when equal)
    UpdateSelection { base: usize, end: usize },
    /// Grow the selection (or start one at the cursor) up to `end`
    ExtendSelection { end: usize },
    /// Select the run of same-typed characters around `pos`
    SelectWordAt { pos: usize },

    // === Clipboard ===
    Copy,
    Cut,
    Paste,

    // === Undo/Redo ===
    Undo,
    Redo,

    // === Macros ===
    StartRecording,
    StopRecording,
    ToggleRecording,
    ReplayMacro,

    // === Files ===
    Open { path: PathBuf },
    Save { path: PathBuf },

    SpellCheck,
}

impl Operation {
    /// Check if this operation is captured while a macro is recording.
    ///
    /// Recording control, file operations and spell-check are never logged,
    /// so a replay can't nest or hit the filesystem.
    pub fn is_recordable(&self) -> bool {
        !matches!(
            self,
            Operation::StartRecording
                | Operation::StopRecording
                | Operation::ToggleRecording
                | Operation::ReplayMacro
                | Operation::Open { .. }
                | Operation::Save { .. }
                | Operation::SpellCheck
        )
    }

    /// Check if this operation can modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Operation::Insert { .. }
                | Operation::Delete { .. }
                | Operation::Cut
                | Operation::Paste
                | Operation::Undo
                | Operation::Redo
                | Operation::ReplayMacro
                | Operation::Open { .. }
        )
    }
}
