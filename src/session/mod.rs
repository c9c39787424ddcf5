//! Editor session
//!
//! This module contains the EditorSession struct which owns everything for
//! one loaded transcript: the current revision, marker, edit buffer,
//! history and sync state. It is the single owner of all mutable editor
//! state; keyboard, playback and host events all go through `&mut self`.

mod edits;

use serde::Serialize;

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};
use crate::export;
use crate::grid::WordGrid;
use crate::host::{AnalyticsEvent, Host};
use crate::marker::playback::{nanos_to_seconds, seconds_to_nanos};
use crate::marker::MarkerTracker;
use crate::models::{Marker, Role, Transcript};
use crate::sync::{SyncEngine, WriteBatch};
use crate::text::EditBuffer;
use crate::undo::{HistoryEntry, HistoryManager};

/// Read-only view of the session for rendering
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub transcript: Option<Transcript>,
    pub marker: Option<Marker>,
    pub selecting_forward: bool,
    /// Open edit buffer, if any
    pub edit: Option<EditBuffer>,
    pub can_undo: bool,
    pub can_redo: bool,
    /// Local changes not yet handed to the store
    pub sync_pending: bool,
}

/// State of one editing session
pub struct EditorSession<H: Host> {
    config: EditorConfig,
    role: Role,
    host: H,
    transcript: Option<Transcript>,
    tracker: MarkerTracker,
    buffer: Option<EditBuffer>,
    history: HistoryManager,
    sync: SyncEngine,
}

impl<H: Host> EditorSession<H> {
    pub fn new(config: EditorConfig, role: Role, host: H) -> Self {
        let history = HistoryManager::new(config.history_limit);
        let sync = SyncEngine::new(config.collection_root.clone());
        Self {
            config,
            role,
            host,
            transcript: None,
            tracker: MarkerTracker::new(),
            buffer: None,
            history,
            sync,
        }
    }

    /// Replace the session's transcript with a freshly fetched one
    ///
    /// Paragraphs are ordered by start time and empty ones dropped. Marker,
    /// buffer and history from the previous transcript are discarded.
    pub fn load_transcript(&mut self, mut transcript: Transcript) {
        let paragraphs = std::mem::take(&mut transcript.paragraphs).into_paragraphs();
        transcript.paragraphs = WordGrid::from_store(paragraphs);

        log::info!(
            "Loaded transcript {} ({} paragraphs)",
            transcript.id,
            transcript.grid().paragraph_count()
        );

        self.tracker.clear();
        self.buffer = None;
        self.history.clear();
        self.sync.rebase(&transcript);
        self.transcript = Some(transcript);
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    pub fn marker(&self) -> Option<Marker> {
        self.tracker.marker()
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.buffer.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            transcript: self.transcript.clone(),
            marker: self.tracker.marker(),
            selecting_forward: self.tracker.selecting_forward(),
            edit: self.buffer.clone(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            sync_pending: self.sync.is_dirty()
                || match (&self.transcript, self.sync.baseline()) {
                    (Some(current), Some(baseline)) => current != baseline,
                    _ => false,
                },
        }
    }

    /// Plain-text export of the current revision
    pub fn export_text(&self) -> Option<String> {
        self.transcript.as_ref().map(export::export_text)
    }

    /// Follow the player to the word at `seconds`
    ///
    /// The marker stays put while an edit buffer is open.
    pub fn handle_time_update(&mut self, seconds: f64) -> Option<Marker> {
        if self.buffer.is_some() {
            return None;
        }
        let transcript = self.transcript.as_ref()?;
        self.tracker
            .advance_to_next_word(transcript.grid(), seconds_to_nanos(seconds))
    }

    /// Mark a single word (e.g. clicked) and seek the player to it
    pub fn select_word(&mut self, paragraph_index: usize, word_index: usize) -> Result<Marker> {
        let transcript = self.transcript.as_ref().ok_or(EditorError::NotLoaded)?;
        let marker = self
            .tracker
            .set_marker(transcript.grid(), paragraph_index, word_index, word_index)?;
        self.buffer = None;
        self.seek_to_marker(true);
        Ok(marker)
    }

    pub fn undo(&mut self) -> bool {
        self.buffer = None;
        let Some(present) = self.present_entry() else {
            return false;
        };
        match self.history.undo(present) {
            Some(previous) => {
                self.restore(previous);
                self.host.track(AnalyticsEvent::Undo);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.buffer = None;
        let Some(present) = self.present_entry() else {
            return false;
        };
        match self.history.redo(present) {
            Some(next) => {
                self.restore(next);
                self.host.track(AnalyticsEvent::Redo);
                true
            }
            None => false,
        }
    }

    /// Next batch of writes for the document store
    pub fn prepare_sync(&mut self) -> Result<Option<WriteBatch>> {
        match &self.transcript {
            Some(transcript) => self.sync.prepare(transcript),
            None => Ok(None),
        }
    }

    /// Report the store's answer for a prepared batch
    pub fn complete_sync(&mut self, batch_id: u64, outcome: std::result::Result<(), String>) -> Result<()> {
        match self.sync.complete(batch_id, outcome) {
            Ok(_) => Ok(()),
            Err(EditorError::PersistenceFailure(message)) => {
                log::error!("Error saving batch {}: {}", batch_id, message);
                self.host
                    .track(AnalyticsEvent::PersistenceFailure(message.clone()));
                Err(EditorError::PersistenceFailure(message))
            }
            Err(e) => Err(e),
        }
    }

    /// Mark the first word if nothing is marked yet
    pub(crate) fn bootstrap_marker(&mut self) -> bool {
        match &self.transcript {
            Some(transcript) => self.tracker.bootstrap(transcript.grid()),
            None => false,
        }
    }

    /// Left/Right: move inside the buffer, or commit and move the marker
    pub(crate) fn move_horizontal(&mut self, forward: bool) -> Result<()> {
        if let Some(buffer) = self.buffer.as_mut() {
            let moved = if forward {
                buffer.move_right()
            } else {
                buffer.move_left()
            };
            if moved {
                return Ok(());
            }
            self.commit_buffer(true)?;
        }

        let transcript = self.transcript.as_ref().ok_or(EditorError::NotLoaded)?;
        let moved = if forward {
            self.tracker.move_right(transcript.grid())
        } else {
            self.tracker.move_left(transcript.grid())
        };
        if moved.is_some() {
            self.seek_to_marker(false);
        }
        Ok(())
    }

    /// Up/Down: commit any open buffer and move between paragraphs
    pub(crate) fn move_vertical(&mut self, down: bool) -> Result<()> {
        self.commit_buffer(true)?;
        let transcript = self.transcript.as_ref().ok_or(EditorError::NotLoaded)?;
        let moved = if down {
            self.tracker.move_down(transcript.grid())
        } else {
            self.tracker.move_up()
        };
        if moved.is_some() {
            self.seek_to_marker(false);
        }
        Ok(())
    }

    /// Shift+Left/Right
    pub(crate) fn extend_selection(&mut self, forward: bool) -> bool {
        if !forward {
            return self.tracker.extend_left();
        }
        match &self.transcript {
            Some(transcript) => self.tracker.extend_right(transcript.grid()),
            None => false,
        }
    }

    /// Install a new revision, recording the current one in history
    fn commit_revision(&mut self, next: Transcript, marker: Option<Marker>, event: AnalyticsEvent) {
        let Some(previous) = self.transcript.replace(next) else {
            return;
        };
        self.history
            .push(HistoryEntry::new(previous, self.tracker.marker()));

        if let Some(current) = &self.transcript {
            self.tracker.restore(current.grid(), marker);
        }
        self.host.track(event);
    }

    fn present_entry(&self) -> Option<HistoryEntry> {
        let transcript = self.transcript.clone()?;
        Some(HistoryEntry::new(transcript, self.tracker.marker()))
    }

    fn restore(&mut self, entry: HistoryEntry) {
        self.tracker.restore(entry.transcript.grid(), entry.marker);
        self.transcript = Some(entry.transcript);
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.role.can_edit() {
            Ok(())
        } else {
            Err(EditorError::ReadOnly)
        }
    }

    pub(crate) fn pause_for_edit(&mut self) {
        if self.config.pause_on_edit {
            self.host.pause();
        }
    }

    /// Seek the player to the first marked word
    fn seek_to_marker(&mut self, force: bool) {
        if !force && !self.config.seek_on_navigate {
            return;
        }
        let (Some(transcript), Some(marker)) = (&self.transcript, self.tracker.marker()) else {
            return;
        };
        if let Some(word) = transcript
            .grid()
            .word_at(marker.paragraph_index, marker.word_index_start)
        {
            self.host.seek_to(nanos_to_seconds(word.start_time));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::NullHost;
    use crate::models::{Paragraph, Word};

    fn transcript() -> Transcript {
        Transcript::new(
            "t1",
            vec![
                Paragraph::new("late", vec![Word::new("world", 1_000_000_000, 2_000_000_000)]),
                Paragraph::new("empty", vec![]),
                Paragraph::new("early", vec![Word::new("hello", 0, 1_000_000_000)]),
            ],
        )
    }

    fn session() -> EditorSession<NullHost> {
        let mut session = EditorSession::new(EditorConfig::default(), Role::Editor, NullHost);
        session.load_transcript(transcript());
        session
    }

    #[test]
    fn test_load_normalizes_paragraphs() {
        let session = session();
        let grid = session.transcript().unwrap().grid();
        assert_eq!(grid.paragraph_count(), 2);
        assert_eq!(grid.paragraphs()[0].id, "early");
        assert_eq!(session.marker(), None);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_select_word_validates() {
        let mut session = session();
        assert_eq!(session.select_word(1, 0).unwrap(), Marker::word(1, 0));
        assert!(session.select_word(1, 1).is_err());
        assert_eq!(session.marker(), Some(Marker::word(1, 0)));
    }

    #[test]
    fn test_time_update_moves_marker() {
        let mut session = session();
        assert_eq!(session.handle_time_update(1.5), Some(Marker::word(1, 0)));
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let session = session();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["canUndo"], false);
        assert_eq!(json["syncPending"], false);
        assert!(json["transcript"]["paragraphs"].is_array());
    }

    #[test]
    fn test_nothing_loaded() {
        let mut session = EditorSession::new(EditorConfig::default(), Role::Editor, NullHost);
        assert_eq!(session.select_word(0, 0), Err(EditorError::NotLoaded));
        assert_eq!(session.handle_time_update(1.0), None);
        assert_eq!(session.prepare_sync().unwrap(), None);
        assert!(!session.undo());
    }
}
