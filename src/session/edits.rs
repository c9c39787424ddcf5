//! Committed mutations
//!
//! Each operation builds the next revision from the current one and hands
//! it to `commit_revision`, which records the replaced revision in history.
//! Revisions equal to the current one are dropped without a history entry.

use super::EditorSession;
use crate::error::{EditorError, Result};
use crate::format;
use crate::grid::WordGrid;
use crate::host::{AnalyticsEvent, Host};
use crate::models::{Marker, Transcript};
use crate::text::EditBuffer;
use crate::timecode::{format_timecode, parse_timecode};

impl<H: Host> EditorSession<H> {
    /// Enter edit mode on the single marked word
    pub fn open_buffer(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if !marker.is_single_word() {
            return Ok(());
        }
        let texts = transcript.grid().texts(
            marker.paragraph_index,
            marker.word_index_start,
            marker.word_index_end,
        )?;
        self.buffer = Some(EditBuffer::open_at_end(texts));
        Ok(())
    }

    /// Drop the open buffer without writing; false when none was open
    pub fn discard_buffer(&mut self) -> bool {
        match self.buffer.take() {
            Some(buffer) => buffer.commit(true).is_none(),
            None => false,
        }
    }

    /// Write the buffer back to the marked words
    ///
    /// With `close == false` the buffer stays open over the written words.
    pub fn commit_buffer(&mut self, close: bool) -> Result<()> {
        let Some(buffer) = self.buffer.take() else {
            return Ok(());
        };
        let texts = if close {
            buffer.commit(false)
        } else {
            let texts = buffer.staged_texts();
            self.buffer = Some(buffer);
            Some(texts)
        };
        match texts {
            Some(texts) => self.write_words(&texts),
            None => Ok(()),
        }
    }

    /// Type a character, opening a buffer over the marked words if needed
    pub(crate) fn buffer_insert(&mut self, ch: char) -> Result<()> {
        self.ensure_editable()?;
        if self.buffer.is_none() {
            let (transcript, marker) = self.selection()?;
            let texts = transcript.grid().texts(
                marker.paragraph_index,
                marker.word_index_start,
                marker.word_index_end,
            )?;
            self.buffer = Some(EditBuffer::open_at_end(texts));
        }
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.insert_char(ch);
        }
        Ok(())
    }

    /// Backspace: edit the buffer, or soft-delete the marked words
    pub(crate) fn buffer_backspace(&mut self) -> Result<()> {
        let Some(buffer) = self.buffer.as_mut() else {
            return self.delete_marked_words();
        };
        if buffer.cursor().offset == 0 {
            buffer.merge_with_previous();
        } else {
            buffer.delete_char_before();
        }
        Ok(())
    }

    /// Space: toggle playback, or split/advance inside the buffer
    pub(crate) fn buffer_space(&mut self) -> Result<()> {
        let Some(buffer) = self.buffer.as_mut() else {
            self.host.toggle_play();
            return Ok(());
        };

        let last_filled = buffer.words().last().is_some_and(|w| !w.is_empty());
        let offset = buffer.cursor().offset;
        if last_filled && offset > 0 && (!buffer.at_word_end() || buffer.is_last_word()) {
            buffer.split_at_cursor();
            return self.commit_buffer(false);
        }

        if buffer.at_word_end() {
            if buffer.is_last_word() {
                return self.commit_buffer(true);
            }
            buffer.move_to_next_word_start();
        }
        Ok(())
    }

    /// Soft-delete the marked words
    pub fn delete_marked_words(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.buffer = None;
        let (transcript, marker) = self.selection()?;
        let grid = transcript.grid().mark_words_deleted(
            marker.paragraph_index,
            marker.word_index_start,
            marker.word_index_end,
        )?;
        self.commit_grid(grid, Some(marker), AnalyticsEvent::WordsDeleted);
        Ok(())
    }

    /// Tab: flip a single word between lower-case and capitalized
    pub fn toggle_marked_case(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if self.buffer.is_some() || !marker.is_single_word() {
            return Ok(());
        }
        let (p, w) = (marker.paragraph_index, marker.word_index_start);
        let text = match transcript.grid().word_at(p, w) {
            Some(word) => format::toggle_case(&word.text),
            None => return Err(EditorError::out_of_range(p, w, w)),
        };
        let grid = transcript.grid().replace_words(p, w, w, &[text])?;
        self.commit_grid(grid, Some(marker), AnalyticsEvent::WordsChanged);
        Ok(())
    }

    /// Toggle trailing punctuation on the single marked word
    ///
    /// The following word may be re-cased in the same revision; the marker
    /// then grows to cover it.
    pub fn toggle_punctuation(&mut self, key: char) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if self.buffer.is_some() || !marker.is_single_word() {
            return Ok(());
        }
        let grid = transcript.grid();
        let (p, w) = (marker.paragraph_index, marker.word_index_start);
        let word = grid.word_at(p, w).ok_or(EditorError::out_of_range(p, w, w))?;
        let next = grid.word_at(p, w + 1).map(|n| n.text.as_str());

        let texts = format::toggle_punctuation(&word.text, next, key).into_texts();
        let end = w + texts.len() - 1;
        let grid = grid.replace_words(p, w, end, &texts)?;
        self.commit_grid(grid, Some(Marker::new(p, w, end)), AnalyticsEvent::WordsChanged);
        Ok(())
    }

    /// `-`: fuse the marked words into one
    pub fn join_marked_words(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if self.buffer.is_some() || marker.is_single_word() {
            return Ok(());
        }
        let (p, start, end) = (marker.paragraph_index, marker.word_index_start, marker.word_index_end);
        let joined = format::join_words(&transcript.grid().texts(p, start, end)?);
        let grid = transcript.grid().replace_words(p, start, end, &[joined])?;
        self.commit_grid(grid, Some(Marker::word(p, start)), AnalyticsEvent::WordsChanged);
        Ok(())
    }

    /// Wrap the marked words in a bracket pair or quotes
    pub fn wrap_marked_words(&mut self, open: char) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if self.buffer.is_some() {
            return Ok(());
        }
        let (p, start, end) = (marker.paragraph_index, marker.word_index_start, marker.word_index_end);
        let texts = transcript.grid().texts(p, start, end)?;
        let Some(wrapped) = format::wrap_words(&texts, open) else {
            return Ok(());
        };
        let grid = transcript.grid().replace_words(p, start, end, &wrapped)?;
        self.commit_grid(grid, Some(marker), AnalyticsEvent::WordsChanged);
        Ok(())
    }

    /// Start a new paragraph at the single marked word
    pub fn split_paragraph_at_marker(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if !marker.is_single_word() {
            return Ok(());
        }
        let (p, w) = (marker.paragraph_index, marker.word_index_start);
        let grid = transcript.grid().split_paragraph(p, w)?;
        self.commit_grid(grid, Some(Marker::word(p + 1, 0)), AnalyticsEvent::ParagraphsSplit);
        Ok(())
    }

    /// Append the marked paragraph to the previous one
    ///
    /// Only applies when the marker is on the first word of a paragraph
    /// other than the first. The marker ends up on the same word, now
    /// inside the previous paragraph.
    pub fn join_paragraph_at_marker(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let (transcript, marker) = self.selection()?;
        if !marker.is_single_word() {
            return Ok(());
        }
        let (p, w) = (marker.paragraph_index, marker.word_index_start);
        if p == 0 || w != 0 {
            return Ok(());
        }
        let landing = transcript.grid().word_count(p - 1);
        let grid = transcript.grid().join_paragraphs(p, w)?;
        self.commit_grid(grid, Some(Marker::word(p - 1, landing)), AnalyticsEvent::ParagraphsJoined);
        Ok(())
    }

    /// Assign `speaker` to the marked paragraph, asking for a name first if
    /// the speaker has none yet
    pub fn assign_speaker(&mut self, speaker: u32) -> Result<()> {
        self.ensure_editable()?;
        let paragraph_index = self.selection()?.1.paragraph_index;
        let known = self
            .transcript
            .as_ref()
            .is_some_and(|t| t.speaker_name(speaker).is_some());

        let (renamed, event) = if known {
            (None, AnalyticsEvent::SpeakerSet)
        } else {
            let message = self.config.speaker_prompt_for(speaker);
            let name = self.ask(&message, None)?;
            (Some(name), AnalyticsEvent::SpeakerNameSet)
        };

        let (transcript, marker) = self.selection()?;
        let grid = transcript.grid().set_speaker(paragraph_index, speaker)?;
        let mut next = transcript.with_grid(grid);
        if let Some(name) = renamed {
            next = next.with_speaker_name(speaker, name);
        }
        self.commit_transcript(next, Some(marker), event);
        Ok(())
    }

    /// Prompt for a new display name for `speaker`
    pub fn rename_speaker(&mut self, speaker: u32) -> Result<()> {
        self.ensure_editable()?;
        let current = self
            .transcript
            .as_ref()
            .ok_or(EditorError::NotLoaded)?
            .speaker_name(speaker)
            .map(str::to_string);

        let message = self.config.speaker_prompt_for(speaker);
        let name = self.ask(&message, current.as_deref())?;

        let next = self.loaded()?.with_speaker_name(speaker, name);
        self.commit_transcript(next, self.tracker.marker(), AnalyticsEvent::SpeakerNameChanged);
        Ok(())
    }

    /// Prompt for the transcript's start time as `HH:MM:SS:CC`
    pub fn change_start_time(&mut self) -> Result<()> {
        self.ensure_editable()?;
        let current = format_timecode(self.loaded()?.start_time(), true);

        let message = self.config.start_time_prompt.clone();
        let answer = self.ask(&message, Some(&current))?;
        let start_time = parse_timecode(&answer)?;

        let next = self.loaded()?.with_start_time(start_time);
        self.commit_transcript(next, self.tracker.marker(), AnalyticsEvent::StartTimeChanged);
        Ok(())
    }

    /// Replace the marked words with `texts` and mark exactly the result
    fn write_words(&mut self, texts: &[String]) -> Result<()> {
        let (transcript, marker) = self.selection()?;
        let (p, start, end) = (marker.paragraph_index, marker.word_index_start, marker.word_index_end);
        let grid = transcript.grid().replace_words(p, start, end, texts)?;
        let after = Marker::new(p, start, start + texts.len().max(1) - 1);
        self.commit_grid(grid, Some(after), AnalyticsEvent::WordsChanged);
        Ok(())
    }

    fn commit_grid(&mut self, grid: WordGrid, marker: Option<Marker>, event: AnalyticsEvent) {
        let Some(current) = &self.transcript else {
            return;
        };
        let next = current.with_grid(grid);
        self.commit_transcript(next, marker, event);
    }

    fn commit_transcript(&mut self, next: Transcript, marker: Option<Marker>, event: AnalyticsEvent) {
        if self.transcript.as_ref() == Some(&next) {
            return;
        }
        self.commit_revision(next, marker, event);
    }

    /// Ask the host; an empty answer counts as cancelling
    fn ask(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        match self.host.prompt_text(message, default) {
            Some(answer) if !answer.trim().is_empty() => Ok(answer.trim().to_string()),
            _ => Err(EditorError::PromptCancelled),
        }
    }

    fn loaded(&self) -> Result<&Transcript> {
        self.transcript.as_ref().ok_or(EditorError::NotLoaded)
    }

    fn selection(&self) -> Result<(&Transcript, Marker)> {
        let transcript = self.loaded()?;
        let marker = self.tracker.marker().ok_or(EditorError::NoSelection)?;
        Ok((transcript, marker))
    }
}
