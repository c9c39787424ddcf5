//! Character-offset helpers
//!
//! Cursor offsets count Unicode scalar values, never bytes, so "å" and "a"
//! both advance the cursor by one.

/// Number of characters in `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the character at `offset`, or `text.len()` past the end
pub fn byte_index(text: &str, offset: usize) -> usize {
    text.char_indices()
        .nth(offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split at a character offset
pub fn split_at_char(text: &str, offset: usize) -> (&str, &str) {
    text.split_at(byte_index(text, offset))
}

pub fn insert_at_char(text: &mut String, offset: usize, ch: char) {
    let index = byte_index(text, offset);
    text.insert(index, ch);
}

/// Remove the character at `offset`, if any
pub fn remove_at_char(text: &mut String, offset: usize) -> Option<char> {
    if offset >= char_len(text) {
        return None;
    }
    let index = byte_index(text, offset);
    Some(text.remove(index))
}

pub fn last_char(text: &str) -> Option<char> {
    text.chars().next_back()
}

/// Drop the final character
pub fn without_last_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

pub fn starts_uppercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_uppercase)
}

pub fn starts_lowercase(text: &str) -> bool {
    text.chars().next().is_some_and(char::is_lowercase)
}

/// True when lower-casing would not change the word
pub fn is_all_lowercase(text: &str) -> bool {
    text.to_lowercase() == text
}

/// Apply `f` to the first character only
fn map_first(text: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

pub fn capitalize_first(text: &str) -> String {
    map_first(text, |c| c.to_uppercase().collect())
}

pub fn lowercase_first(text: &str) -> String {
    map_first(text, |c| c.to_lowercase().collect())
}
