//! Editable state building blocks for the quill editing core.
//!
//! - [`TextBuffer`]: char-indexed buffer (backed by `ropey::Rope`) with
//!   position-addressed insert/delete/copy and word-boundary queries
//! - [`Selection`]: unordered `(base, end)` index pair
//! - [`Snapshot`] / [`HistoryManager`]: snapshot-based undo/redo
//! - [`MacroRecorder`]: operation log for macro record/replay
//! - [`Operation`]: closed set of editing intents submitted to the engine
//!
//! # Example
//!
//! ```
//! use quill::editable::TextBuffer;
//!
//! let mut buffer = TextBuffer::from_text("hello world");
//! buffer.insert_at('!', 11).unwrap();
//!
//! assert_eq!(buffer.content(), "hello world!");
//! assert_eq!((buffer.word_start(2), buffer.word_end(2)), (0, 5));
//! ```

mod buffer;
mod history;
mod operation;
mod recorder;
mod selection;

pub use buffer::{Insertion, TextBuffer};
pub use history::{HistoryManager, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use operation::{DeleteDirection, Operation};
pub use recorder::MacroRecorder;
pub use selection::Selection;
