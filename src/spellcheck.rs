//! Dictionary-based spell-checking over a [`TextBuffer`]

use std::collections::HashSet;
use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

use crate::editable::{Selection, TextBuffer};
use crate::util::is_word_char;

/// Set of known-correct words, stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one word per line. Lines are trimmed and lowercased; blank lines
    /// are skipped.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_lowercase());
            }
        }
        Ok(Self { words })
    }

    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}

/// Location and text of a word missing from the dictionary
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MisspelledSpan {
    pub selection: Selection,
    pub word: String,
}

/// Maps buffer content to dictionary lookups.
#[derive(Debug, Clone, Default)]
pub struct SpellChecker {
    dictionary: Dictionary,
}

impl SpellChecker {
    pub fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Words in `buffer` that are not in the dictionary, ordered by position.
    pub fn misspelled_words(&self, buffer: &TextBuffer) -> Vec<MisspelledSpan> {
        let spans: Vec<MisspelledSpan> = words(buffer)
            .filter(|span| !self.dictionary.contains(&span.word))
            .collect();
        tracing::trace!(count = spans.len(), "spell check complete");
        spans
    }
}

/// Split a buffer into maximal runs of word characters.
///
/// Each span covers `[first char, one past last char)`.
pub fn words(buffer: &TextBuffer) -> impl Iterator<Item = MisspelledSpan> + '_ {
    let mut chars = buffer.chars().enumerate().peekable();
    std::iter::from_fn(move || {
        // Skip separators up to the next word
        while chars.next_if(|&(_, ch)| !is_word_char(ch)).is_some() {}

        let (start, first) = chars.next()?;
        let mut word = String::from(first);
        let mut end = start + 1;
        while let Some((idx, ch)) = chars.next_if(|&(_, ch)| is_word_char(ch)) {
            word.push(ch);
            end = idx + 1;
        }
        Some(MisspelledSpan {
            selection: Selection::new(start, end),
            word,
        })
    })
}
