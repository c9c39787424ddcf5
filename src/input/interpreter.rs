//! Keyboard dispatch
//!
//! One key event is handled to completion before the next. Resolution goes
//! through the command table; execution calls into the session's marker,
//! buffer and edit operations.

use serde::{Deserialize, Serialize};

use super::command::{Command, Mode};
use super::key::KeyEvent;
use crate::error::{EditorError, Result};
use crate::host::Host;
use crate::session::EditorSession;

/// What happened to a key event
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyOutcome {
    /// The editor consumed the key
    Handled,
    /// Nothing to act on yet (no transcript or no marker)
    Ignored,
    /// No command for this key; leave it to the browser
    Unhandled,
    /// Not allowed for the session's role
    Rejected,
}

impl KeyOutcome {
    /// Whether the host should call `preventDefault` on the event
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyOutcome::Handled)
    }
}

impl<H: Host> EditorSession<H> {
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if self.transcript().is_none() {
            return KeyOutcome::Ignored;
        }

        // Viewers may only look around
        if !self.role().can_edit() && !event.is_arrow() {
            log::debug!("Rejected key {:?} for viewer", event.key);
            return KeyOutcome::Rejected;
        }

        let Some(marker) = self.marker() else {
            if event.is_arrow() && self.bootstrap_marker() {
                return KeyOutcome::Handled;
            }
            return KeyOutcome::Ignored;
        };

        let mode = Mode {
            editing: self.is_editing(),
            single_word: marker.is_single_word(),
        };
        let Some(command) = Command::from_key(event, mode) else {
            return KeyOutcome::Unhandled;
        };

        log::debug!("Key {:?} -> {:?}", event.key, command);
        if command.pauses_playback() {
            self.pause_for_edit();
        }

        match self.execute(command) {
            Ok(()) => {}
            Err(EditorError::PromptCancelled) => log::debug!("{:?} cancelled", command),
            Err(e) => log::warn!("{:?} failed: {}", command, e),
        }
        KeyOutcome::Handled
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::JoinParagraphs => self.join_paragraph_at_marker(),
            Command::SplitParagraph => self.split_paragraph_at_marker(),
            Command::Redo => {
                self.redo();
                Ok(())
            }
            Command::Undo => {
                self.undo();
                Ok(())
            }
            Command::DiscardEdit | Command::CancelEdit => {
                self.discard_buffer();
                Ok(())
            }
            Command::AssignSpeaker(speaker) => self.assign_speaker(speaker),
            Command::ToggleEdit => {
                if self.is_editing() {
                    self.commit_buffer(true)
                } else {
                    self.open_buffer()
                }
            }
            Command::MoveLeft => self.move_horizontal(false),
            Command::MoveRight => self.move_horizontal(true),
            Command::MoveUp => self.move_vertical(false),
            Command::MoveDown => self.move_vertical(true),
            Command::ExtendLeft => {
                self.discard_buffer();
                self.extend_selection(false);
                Ok(())
            }
            Command::ExtendRight => {
                self.discard_buffer();
                self.extend_selection(true);
                Ok(())
            }
            Command::ToggleCase => self.toggle_marked_case(),
            Command::DeleteWords => self.delete_marked_words(),
            Command::Backspace => self.buffer_backspace(),
            Command::Space => self.buffer_space(),
            Command::TogglePunctuation(key) => self.toggle_punctuation(key),
            Command::JoinWords => self.join_marked_words(),
            Command::Wrap(open) => self.wrap_marked_words(open),
            Command::Insert(ch) => self.buffer_insert(ch),
        }
    }
}
