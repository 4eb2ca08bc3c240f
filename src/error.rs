//! Error types for the editing core

use std::path::PathBuf;

use thiserror::Error;

use crate::editable::Operation;

/// Position or range errors raised by [`crate::editable::TextBuffer`].
///
/// The engine derives every position from its own state, so seeing one of
/// these from inside the engine means its arithmetic is wrong.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BufferError {
    #[error("position {pos} is out of bounds for buffer of length {len}")]
    OutOfBounds { pos: usize, len: usize },

    #[error("range {start}..{end} is invalid for buffer of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Errors surfaced to callers of [`crate::engine::EditorEngine`].
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid macro: {0}")]
    Macro(#[from] serde_json::Error),

    #[error("operation cannot be part of a macro: {0:?}")]
    NotRecordable(Operation),
}

pub type EngineResult<T> = Result<T, EngineError>;
