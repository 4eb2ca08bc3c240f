//! Character buffer for the editing core.
//!
//! `TextBuffer` wraps a `ropey::Rope`, which is indexed by `char`. Clones are
//! cheap (the rope shares nodes copy-on-write) but behave as deep copies:
//! mutating one buffer never shows through another.

use ropey::Rope;
use std::fmt;
use std::ops::Range;

use crate::error::BufferError;
use crate::util::char_type;

/// Something that can be inserted into a [`TextBuffer`]: a single character
/// or another buffer's full content.
#[derive(Debug, Clone, Copy)]
pub enum Insertion<'a> {
    Char(char),
    Buffer(&'a TextBuffer),
}

impl From<char> for Insertion<'_> {
    fn from(ch: char) -> Self {
        Insertion::Char(ch)
    }
}

impl<'a> From<&'a TextBuffer> for Insertion<'a> {
    fn from(buffer: &'a TextBuffer) -> Self {
        Insertion::Buffer(buffer)
    }
}

/// Ordered, index-addressable character sequence (0-based).
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a TextBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Create a TextBuffer from a character sequence
    pub fn from_chars(chars: &[char]) -> Self {
        let text: String = chars.iter().collect();
        Self::from_text(&text)
    }

    /// Total length in characters
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get character at position, None if out of bounds
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.rope.get_char(pos)
    }

    /// Full content as a String
    pub fn content(&self) -> String {
        self.rope.to_string()
    }

    /// Full content as characters, the shape the file collaborator speaks
    pub fn to_chars(&self) -> Vec<char> {
        self.rope.chars().collect()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.rope.chars()
    }

    /// Insert a character or another buffer's content at `pos`.
    ///
    /// Valid positions are `0..=len`.
    pub fn insert_at<'a>(
        &mut self,
        content: impl Into<Insertion<'a>>,
        pos: usize,
    ) -> Result<(), BufferError> {
        let len = self.len();
        if pos > len {
            return Err(BufferError::OutOfBounds { pos, len });
        }
        match content.into() {
            Insertion::Char(ch) => self.rope.insert_char(pos, ch),
            Insertion::Buffer(other) => {
                // Walk the other rope's chunks so no intermediate String is built
                let mut offset = pos;
                for chunk in other.rope.chunks() {
                    self.rope.insert(offset, chunk);
                    offset += chunk.chars().count();
                }
            }
        }
        Ok(())
    }

    /// Remove the character at `pos`.
    ///
    /// Deleting at `len` (or anywhere in an empty buffer) does nothing, so a
    /// stray backspace or forward-delete never fails.
    pub fn delete_at(&mut self, pos: usize) {
        if pos < self.len() {
            self.rope.remove(pos..pos + 1);
        }
    }

    /// Delete `[min(a, b), max(a, b))`. Both endpoints must be in `0..=len`.
    pub fn delete_range(&mut self, a: usize, b: usize) -> Result<(), BufferError> {
        let range = self.checked_range(a, b)?;
        if !range.is_empty() {
            self.rope.remove(range);
        }
        Ok(())
    }

    /// Copy `[min(a, b), max(a, b))` into a new buffer.
    pub fn copy_range(&self, a: usize, b: usize) -> Result<TextBuffer, BufferError> {
        let range = self.checked_range(a, b)?;
        Ok(Self {
            rope: Rope::from(self.rope.slice(range)),
        })
    }

    /// Replace the whole content
    pub fn set_chars(&mut self, chars: &[char]) {
        *self = Self::from_chars(chars);
    }

    /// Start of the run of same-typed characters (whitespace vs. not) that
    /// contains `pos`. `pos == len` is treated as `len - 1`.
    pub fn word_start(&self, pos: usize) -> usize {
        let Some(pos) = self.clamp_to_last(pos) else {
            return 0;
        };
        let kind = char_type(self.rope.char(pos));
        let mut start = pos;
        while start > 0 && char_type(self.rope.char(start - 1)) == kind {
            start -= 1;
        }
        start
    }

    /// End (exclusive) of the run of same-typed characters containing `pos`.
    /// `pos == len` is treated as `len - 1`.
    pub fn word_end(&self, pos: usize) -> usize {
        let Some(pos) = self.clamp_to_last(pos) else {
            return 0;
        };
        let len = self.len();
        let kind = char_type(self.rope.char(pos));
        let mut end = pos + 1;
        while end < len && char_type(self.rope.char(end)) == kind {
            end += 1;
        }
        end
    }

    fn clamp_to_last(&self, pos: usize) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            None
        } else {
            Some(pos.min(len - 1))
        }
    }

    fn checked_range(&self, a: usize, b: usize) -> Result<Range<usize>, BufferError> {
        let len = self.len();
        let (start, end) = (a.min(b), a.max(b));
        if end > len {
            return Err(BufferError::InvalidRange { start, end, len });
        }
        Ok(start..end)
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.rope.chunks() {
            f.write_str(chunk)?;
        }
        Ok(())
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextBuffer").field(&self.content()).finish()
    }
}
