//! Edit buffer
//!
//! Staged word texts for the words under the marker. Edits touch only the
//! buffer; the grid changes when the session writes the buffer back.

use serde::{Deserialize, Serialize};

use super::cursor::BufferCursor;
use crate::utils::chars;

/// An open in-place edit session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditBuffer {
    words: Vec<String>,
    cursor: BufferCursor,
}

impl EditBuffer {
    /// Open a buffer over `texts` with the cursor clamped into it
    pub fn open(texts: Vec<String>, word_offset: usize, char_offset: usize) -> Self {
        let words = if texts.is_empty() {
            vec![String::new()]
        } else {
            texts
        };
        let word = word_offset.min(words.len() - 1);
        let offset = char_offset.min(chars::char_len(&words[word]));

        Self {
            words,
            cursor: BufferCursor::new(word, offset),
        }
    }

    /// Open with the cursor after the last character
    pub fn open_at_end(texts: Vec<String>) -> Self {
        Self::open(texts, usize::MAX, usize::MAX)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn cursor(&self) -> BufferCursor {
        self.cursor
    }

    pub fn current_word(&self) -> &str {
        &self.words[self.cursor.word]
    }

    pub fn is_last_word(&self) -> bool {
        self.cursor.word + 1 == self.words.len()
    }

    pub fn at_word_end(&self) -> bool {
        self.cursor.offset == chars::char_len(self.current_word())
    }

    pub fn insert_char(&mut self, ch: char) {
        let BufferCursor { word, offset } = self.cursor;
        chars::insert_at_char(&mut self.words[word], offset, ch);
        self.cursor.offset += 1;
    }

    /// Delete the character before the cursor in the current word
    pub fn delete_char_before(&mut self) -> bool {
        let BufferCursor { word, offset } = self.cursor;
        if offset == 0 {
            return false;
        }
        chars::remove_at_char(&mut self.words[word], offset - 1);
        self.cursor.offset -= 1;
        true
    }

    /// Break the current word in two at the cursor; the cursor moves to the
    /// start of the second half
    pub fn split_at_cursor(&mut self) {
        let BufferCursor { word, offset } = self.cursor;
        let (head, tail) = chars::split_at_char(&self.words[word], offset);
        let (head, tail) = (head.to_string(), tail.to_string());

        self.words[word] = head;
        self.words.insert(word + 1, tail);
        self.cursor = BufferCursor::word_start(word + 1);
    }

    /// Join the current word onto the previous one, cursor at the seam
    pub fn merge_with_previous(&mut self) -> bool {
        let word = self.cursor.word;
        if word == 0 {
            return false;
        }

        let current = self.words.remove(word);
        let previous = &mut self.words[word - 1];
        let seam = chars::char_len(previous);
        previous.push_str(&current);
        self.cursor = BufferCursor::new(word - 1, seam);
        true
    }

    /// Step the cursor one character left, crossing into the previous word
    ///
    /// Leaving an empty trailing word drops it. Returns false at the start
    /// of the buffer.
    pub fn move_left(&mut self) -> bool {
        if self.cursor.offset > 0 {
            self.cursor.offset -= 1;
            return true;
        }
        if self.cursor.word == 0 {
            return false;
        }

        if self.is_last_word() && self.current_word().is_empty() {
            self.words.pop();
        }
        let word = self.cursor.word - 1;
        self.cursor = BufferCursor::new(word, chars::char_len(&self.words[word]));
        true
    }

    /// Step the cursor one character right, crossing into the next word
    ///
    /// Returns false at the end of the buffer.
    pub fn move_right(&mut self) -> bool {
        if !self.at_word_end() {
            self.cursor.offset += 1;
            return true;
        }
        self.move_to_next_word_start()
    }

    pub fn move_to_next_word_start(&mut self) -> bool {
        if self.is_last_word() {
            return false;
        }
        self.cursor = BufferCursor::word_start(self.cursor.word + 1);
        true
    }

    /// Texts to write back, without a single trailing empty word
    pub fn staged_texts(&self) -> Vec<String> {
        let mut texts = self.words.clone();
        if texts.last().is_some_and(String::is_empty) {
            texts.pop();
        }
        texts
    }

    /// Close the buffer
    ///
    /// Returns the texts to write back, or `None` when discarding.
    pub fn commit(self, discard: bool) -> Option<Vec<String>> {
        if discard {
            None
        } else {
            Some(self.staged_texts())
        }
    }
}
