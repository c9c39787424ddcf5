//! Cursor inside an edit buffer
//!
//! Positions are (word, character) pairs relative to the buffer, not the grid.

use serde::{Deserialize, Serialize};

/// A position in the edit buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferCursor {
    /// Index into the buffer's word list
    pub word: usize,
    /// Character offset within that word (0 = before the first character)
    pub offset: usize,
}

impl BufferCursor {
    pub fn new(word: usize, offset: usize) -> Self {
        Self { word, offset }
    }

    /// Create a position at the start of a word
    pub fn word_start(word: usize) -> Self {
        Self { word, offset: 0 }
    }
}
