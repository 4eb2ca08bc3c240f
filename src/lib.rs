//! Quill - editing core for a text editor
//!
//! This crate owns the authoritative text state and every transition applied
//! to it: insertion, deletion, selection, copy/cut/paste, undo/redo, macro
//! record/replay and spell-checking. Rendering and input mapping live outside;
//! a UI submits [`Operation`]s and renders what [`EngineObserver`]s are told.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod engine;
pub mod error;
pub mod io;
pub mod spellcheck;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editable::{DeleteDirection, Operation, Selection, TextBuffer};
pub use engine::{EditorEngine, EngineObserver, ObserverId};
pub use error::{BufferError, EngineError, EngineResult};
pub use spellcheck::{Dictionary, MisspelledSpan, SpellChecker};
