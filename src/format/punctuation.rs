//! Trailing punctuation toggle
//!
//! Pressing `.` `,` `!` or `?` on a marked word strips whatever punctuation
//! it ends with and appends the pressed key unless it was the one removed.
//! Sentence-ending keys also re-case the following word.
//!
//! The re-casing is asymmetric: adding sentence punctuation capitalizes a
//! lower-case next word, while removing it lower-cases a next word that does
//! not already start lower-case. A capitalized next word is left alone when
//! sentence punctuation is swapped for another sentence mark.

use crate::utils::chars;

pub const PUNCTUATION_KEYS: [char; 4] = ['.', ',', '!', '?'];

pub fn is_punctuation(ch: char) -> bool {
    PUNCTUATION_KEYS.contains(&ch)
}

pub fn is_sentence_ending(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Result of toggling punctuation on a word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PunctuationToggle {
    pub word: String,
    /// New text for the following word, when it changed
    pub next: Option<String>,
}

impl PunctuationToggle {
    /// Texts to write starting at the toggled word
    pub fn into_texts(self) -> Vec<String> {
        let mut texts = vec![self.word];
        texts.extend(self.next);
        texts
    }
}

pub fn toggle_punctuation(word: &str, next: Option<&str>, key: char) -> PunctuationToggle {
    let last = chars::last_char(word);
    let sentence = is_sentence_ending(key);

    let remove = last.is_some_and(is_punctuation);
    let add = last != Some(key);
    let mut to_lower = false;
    let mut to_upper = false;

    if let Some(next) = next {
        if remove && sentence && !chars::starts_lowercase(next) {
            to_lower = true;
        }
        if add {
            if sentence {
                if chars::starts_lowercase(next) {
                    to_upper = true;
                } else {
                    to_lower = false;
                }
            } else if chars::starts_uppercase(next) {
                to_lower = true;
            }
        }
    }

    let mut text = if remove {
        chars::without_last_char(word).to_string()
    } else {
        word.to_string()
    };
    if add {
        text.push(key);
    }

    let next = next.and_then(|next| {
        let recased = if to_upper {
            chars::capitalize_first(next)
        } else if to_lower {
            chars::lowercase_first(next)
        } else {
            return None;
        };
        (recased != next).then_some(recased)
    });

    PunctuationToggle { word: text, next }
}
