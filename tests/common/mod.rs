//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use quill::{Dictionary, EditorEngine, EngineObserver, MisspelledSpan, Selection};

/// Create an engine holding `text` with the cursor at `cursor`
pub fn test_engine(text: &str, cursor: usize) -> EditorEngine {
    let mut engine = EditorEngine::default();
    let chars: Vec<char> = text.chars().collect();
    engine.open(&chars);
    engine.update_cursor(cursor);
    engine
}

/// Create an engine holding `text` with an active selection from `base` to `end`
pub fn test_engine_with_selection(text: &str, base: usize, end: usize) -> EditorEngine {
    let mut engine = test_engine(text, 0);
    engine.update_selection(base, end);
    engine
}

/// Create an empty engine that spell-checks against `words`
pub fn test_engine_with_dictionary(words: &[&str]) -> EditorEngine {
    EditorEngine::new(words.iter().collect::<Dictionary>())
}

/// One notification received by [`RecordingObserver`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Text(String),
    Cursor(usize),
    Selection(bool, Selection),
    Misspelled(Vec<MisspelledSpan>),
}

/// Subscriber that appends every notification to a shared log
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub events: Rc<RefCell<Vec<Event>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Event kinds in arrival order, for checking notification order
    pub fn kinds(&self) -> Vec<&'static str> {
        self.events
            .borrow()
            .iter()
            .map(|event| match event {
                Event::Text(_) => "text",
                Event::Cursor(_) => "cursor",
                Event::Selection(..) => "selection",
                Event::Misspelled(_) => "misspelled",
            })
            .collect()
    }
}

impl EngineObserver for RecordingObserver {
    fn on_text_changed(&mut self, text: &str) {
        self.events.borrow_mut().push(Event::Text(text.to_string()));
    }

    fn on_cursor_changed(&mut self, pos: usize) {
        self.events.borrow_mut().push(Event::Cursor(pos));
    }

    fn on_selection_changed(&mut self, active: bool, selection: Selection) {
        self.events
            .borrow_mut()
            .push(Event::Selection(active, selection));
    }

    fn on_misspelled_words_changed(&mut self, spans: &[MisspelledSpan]) {
        self.events
            .borrow_mut()
            .push(Event::Misspelled(spans.to_vec()));
    }
}

/// Type each character of `text` at the cursor
pub fn type_text(engine: &mut EditorEngine, text: &str) {
    for ch in text.chars() {
        engine.insert(ch);
    }
}
