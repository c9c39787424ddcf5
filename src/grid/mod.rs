//! Word grid: one revision of a transcript's paragraphs
//!
//! Every mutation returns a new `WordGrid`, leaving the receiver untouched so
//! history entries can hold earlier revisions by value.

pub mod timing;

use serde::{Deserialize, Serialize};

use crate::error::{EditorError, Result};
use crate::models::{Paragraph, Word};

/// Ordered paragraphs of timed words
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(transparent)]
pub struct WordGrid {
    paragraphs: Vec<Paragraph>,
}

impl WordGrid {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Normalize paragraphs fetched from the store
    ///
    /// Sorts by start time and drops paragraphs without words, since a
    /// marker can only ever point at a word.
    pub fn from_store(mut paragraphs: Vec<Paragraph>) -> Self {
        paragraphs.sort_by_key(|p| p.start_time);
        paragraphs.retain(|p| {
            if p.words.is_empty() {
                log::warn!("Dropping empty paragraph {}", p.id);
                false
            } else {
                true
            }
        });
        Self { paragraphs }
    }

    pub fn into_paragraphs(self) -> Vec<Paragraph> {
        self.paragraphs
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph(&self, paragraph_index: usize) -> Option<&Paragraph> {
        self.paragraphs.get(paragraph_index)
    }

    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Word count of a paragraph (0 when the paragraph does not exist)
    pub fn word_count(&self, paragraph_index: usize) -> usize {
        self.paragraphs
            .get(paragraph_index)
            .map(Paragraph::word_count)
            .unwrap_or(0)
    }

    pub fn total_word_count(&self) -> usize {
        self.paragraphs.iter().map(Paragraph::word_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_word_count() == 0
    }

    pub fn word_at(&self, paragraph_index: usize, word_index: usize) -> Option<&Word> {
        self.paragraphs
            .get(paragraph_index)
            .and_then(|p| p.words.get(word_index))
    }

    /// Check that `start..=end` names existing words of one paragraph
    pub fn check_range(&self, paragraph_index: usize, start: usize, end: usize) -> Result<()> {
        if start <= end && end < self.word_count(paragraph_index) {
            Ok(())
        } else {
            Err(EditorError::out_of_range(paragraph_index, start, end))
        }
    }

    /// Texts of the words in `start..=end`
    pub fn texts(&self, paragraph_index: usize, start: usize, end: usize) -> Result<Vec<String>> {
        self.check_range(paragraph_index, start, end)?;
        Ok(self.paragraphs[paragraph_index].words[start..=end]
            .iter()
            .map(|w| w.text.clone())
            .collect())
    }

    /// Replace the inclusive word range with `texts`
    ///
    /// See [`timing::retime`] for how the new words are timed. An empty
    /// `texts` removes the range and, if nothing is left, the paragraph.
    pub fn replace_words<S: AsRef<str>>(
        &self,
        paragraph_index: usize,
        start: usize,
        end: usize,
        texts: &[S],
    ) -> Result<WordGrid> {
        self.check_range(paragraph_index, start, end)?;

        let removed = end - start + 1;
        if texts.is_empty() && self.total_word_count() == removed {
            return Err(EditorError::EmptyTranscript);
        }

        let mut next = self.clone();
        let paragraph = &mut next.paragraphs[paragraph_index];
        let words = timing::retime(&paragraph.words[start..=end], texts);
        paragraph.words.splice(start..=end, words);

        if paragraph.words.is_empty() {
            next.paragraphs.remove(paragraph_index);
        } else if start == 0 {
            paragraph.start_time = paragraph.words[0].start_time;
        }

        Ok(next)
    }

    /// Soft-delete the inclusive word range
    pub fn mark_words_deleted(
        &self,
        paragraph_index: usize,
        start: usize,
        end: usize,
    ) -> Result<WordGrid> {
        self.check_range(paragraph_index, start, end)?;

        let mut next = self.clone();
        for word in &mut next.paragraphs[paragraph_index].words[start..=end] {
            word.deleted = true;
        }
        Ok(next)
    }

    /// Move words `word_index..` into a new paragraph right after this one
    ///
    /// Splitting at word 0 leaves the grid unchanged.
    pub fn split_paragraph(&self, paragraph_index: usize, word_index: usize) -> Result<WordGrid> {
        self.check_range(paragraph_index, word_index, word_index)?;
        if word_index == 0 {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let original = &mut next.paragraphs[paragraph_index];
        let moved = original.words.split_off(word_index);
        let mut created = Paragraph::with_fresh_id(moved);
        created.speaker = original.speaker;

        next.paragraphs.insert(paragraph_index + 1, created);
        Ok(next)
    }

    /// Append paragraph `paragraph_index` onto the one before it
    ///
    /// Only meaningful at the first word of a paragraph other than the first;
    /// anywhere else this is a no-op.
    pub fn join_paragraphs(&self, paragraph_index: usize, word_index: usize) -> Result<WordGrid> {
        self.check_range(paragraph_index, word_index, word_index)?;
        if word_index != 0 || paragraph_index == 0 {
            return Ok(self.clone());
        }

        let mut next = self.clone();
        let removed = next.paragraphs.remove(paragraph_index);
        next.paragraphs[paragraph_index - 1].words.extend(removed.words);
        Ok(next)
    }

    pub fn set_speaker(&self, paragraph_index: usize, speaker: u32) -> Result<WordGrid> {
        if paragraph_index >= self.paragraph_count() {
            return Err(EditorError::out_of_range(paragraph_index, 0, 0));
        }

        let mut next = self.clone();
        next.paragraphs[paragraph_index].speaker = Some(speaker);
        Ok(next)
    }
}
