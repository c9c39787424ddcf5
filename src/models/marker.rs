//! Marker: the active word-range selection

use serde::{Deserialize, Serialize};

/// Inclusive word range inside one paragraph
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub paragraph_index: usize,
    pub word_index_start: usize,
    pub word_index_end: usize,
}

impl Marker {
    pub fn new(paragraph_index: usize, word_index_start: usize, word_index_end: usize) -> Self {
        Self {
            paragraph_index,
            word_index_start,
            word_index_end,
        }
    }

    /// Marker covering exactly one word
    pub fn word(paragraph_index: usize, word_index: usize) -> Self {
        Self::new(paragraph_index, word_index, word_index)
    }

    pub fn origin() -> Self {
        Self::word(0, 0)
    }

    pub fn is_single_word(&self) -> bool {
        self.word_index_start == self.word_index_end
    }

    pub fn len(&self) -> usize {
        self.word_index_end - self.word_index_start + 1
    }

    pub fn contains(&self, paragraph_index: usize, word_index: usize) -> bool {
        self.paragraph_index == paragraph_index
            && self.word_index_start <= word_index
            && word_index <= self.word_index_end
    }
}
