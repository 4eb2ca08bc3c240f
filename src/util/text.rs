//! Character classification shared by word selection and spell-checking

/// Check if a character is whitespace for word-boundary purposes.
///
/// Only the ASCII whitespace set counts: space, CR, LF, TAB, form feed and
/// vertical tab.
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\n' | '\t' | '\x0C' | '\x0B')
}

/// Check if a character is "special": anything that is neither alphanumeric
/// nor a plain space.
pub fn is_special(ch: char) -> bool {
    !(ch.is_alphanumeric() || ch == ' ')
}

/// Character type used when scanning for word boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharType {
    /// Whitespace characters
    Whitespace,
    /// Everything else
    Word,
}

/// Get the character type for word selection
pub fn char_type(ch: char) -> CharType {
    if is_whitespace(ch) {
        CharType::Whitespace
    } else {
        CharType::Word
    }
}

/// Check if a character can be part of a spell-checked word
pub fn is_word_char(ch: char) -> bool {
    !is_whitespace(ch) && !is_special(ch)
}
