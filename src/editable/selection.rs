//! Selection type for the editing core.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A text selection between `base` (where it started) and `end` (the most
/// recent interaction point).
///
/// `base` may be greater than `end` for backwards selections; use
/// [`Selection::range`] to get the normalized half-open range. Whether the
/// selection is active is tracked by the engine, not by this value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub base: usize,
    pub end: usize,
}

impl Selection {
    pub const fn new(base: usize, end: usize) -> Self {
        Self { base, end }
    }

    /// Check if selection is empty (base == end)
    pub fn is_empty(&self) -> bool {
        self.base == self.end
    }

    /// Get the start position (minimum of base and end)
    pub fn start(&self) -> usize {
        self.base.min(self.end)
    }

    /// Get the end position (maximum of base and end)
    pub fn stop(&self) -> usize {
        self.base.max(self.end)
    }

    /// Normalized half-open range covered by the selection
    pub fn range(&self) -> Range<usize> {
        self.start()..self.stop()
    }

    pub fn len(&self) -> usize {
        self.stop() - self.start()
    }

    /// Check if selection is reversed (end before base)
    pub fn is_reversed(&self) -> bool {
        self.end < self.base
    }

    /// Check if a position is within this selection
    pub fn contains(&self, pos: usize) -> bool {
        self.range().contains(&pos)
    }
}
