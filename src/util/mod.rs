//! Utility modules

pub mod text;

pub use text::{char_type, is_special, is_whitespace, is_word_char, CharType};
