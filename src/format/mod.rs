//! Formatting shortcuts applied to marked words without opening a buffer

pub mod case;
pub mod punctuation;

pub use case::toggle_case;
pub use punctuation::{is_punctuation, is_sentence_ending, toggle_punctuation, PunctuationToggle};

/// Closing counterpart of a wrapping key
pub fn closing_bracket(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '"' => Some('"'),
        _ => None,
    }
}

/// Prepend `open` to the first word and its closing char to the last
pub fn wrap_words(texts: &[String], open: char) -> Option<Vec<String>> {
    let close = closing_bracket(open)?;
    let mut wrapped = texts.to_vec();
    wrapped.first_mut()?.insert(0, open);
    wrapped.last_mut()?.push(close);
    Some(wrapped)
}

/// Concatenate words without a separator
pub fn join_words(texts: &[String]) -> String {
    texts.concat()
}
