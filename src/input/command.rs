//! Key-to-command table
//!
//! A key resolves to a command from the key itself, its modifiers and the
//! current mode. Special keys whose conditions do not hold fall back to
//! plain text insertion, so every printable character ends up somewhere.

use super::key::{Key, KeyEvent};
use crate::format;

/// Editor state relevant to key resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mode {
    /// An edit buffer is open
    pub editing: bool,
    /// The marker covers exactly one word
    pub single_word: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Ctrl/Cmd+Backspace
    JoinParagraphs,
    /// Ctrl/Cmd+Enter
    SplitParagraph,
    /// Ctrl/Cmd+Shift+Z
    Redo,
    /// Ctrl/Cmd+Z with an open buffer
    DiscardEdit,
    /// Ctrl/Cmd+Z
    Undo,
    /// Ctrl/Cmd+digit
    AssignSpeaker(u32),

    /// Escape
    CancelEdit,
    /// Enter: open or commit the buffer
    ToggleEdit,
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    ExtendLeft,
    ExtendRight,
    ToggleCase,
    DeleteWords,
    Backspace,
    Space,
    TogglePunctuation(char),
    JoinWords,
    Wrap(char),
    Insert(char),
}

impl Command {
    /// Resolve a key event; `None` leaves the key to the host
    pub fn from_key(event: &KeyEvent, mode: Mode) -> Option<Command> {
        if event.has_command_modifier() {
            return Self::from_modified_key(event, mode);
        }

        let command = match event.key() {
            Key::Escape => Command::CancelEdit,
            Key::Enter => Command::ToggleEdit,
            Key::ArrowLeft if event.shift_key => Command::ExtendLeft,
            Key::ArrowRight if event.shift_key => Command::ExtendRight,
            Key::ArrowLeft => Command::MoveLeft,
            Key::ArrowRight => Command::MoveRight,
            Key::ArrowUp => Command::MoveUp,
            Key::ArrowDown => Command::MoveDown,
            Key::Tab => Command::ToggleCase,
            Key::Delete => Command::DeleteWords,
            Key::Backspace => Command::Backspace,
            Key::Space => Command::Space,
            Key::Char(ch) if format::is_punctuation(ch) && !mode.editing && mode.single_word => {
                Command::TogglePunctuation(ch)
            }
            Key::Char('-') if !mode.editing && !mode.single_word => Command::JoinWords,
            Key::Char(ch) if format::closing_bracket(ch).is_some() && !mode.editing => {
                Command::Wrap(ch)
            }
            Key::Char(ch) => Command::Insert(ch),
            Key::Other => return None,
        };
        Some(command)
    }

    fn from_modified_key(event: &KeyEvent, mode: Mode) -> Option<Command> {
        let command = match event.key() {
            Key::Backspace => Command::JoinParagraphs,
            Key::Enter => Command::SplitParagraph,
            Key::Char('z' | 'Z') if event.shift_key => Command::Redo,
            Key::Char('z' | 'Z') if mode.editing => Command::DiscardEdit,
            Key::Char('z' | 'Z') => Command::Undo,
            Key::Char(ch) => Command::AssignSpeaker(ch.to_digit(10)?),
            _ => return None,
        };
        Some(command)
    }

    /// Commands that pause playback before they run
    pub fn pauses_playback(&self) -> bool {
        matches!(
            self,
            Command::ToggleEdit
                | Command::ExtendLeft
                | Command::ExtendRight
                | Command::ToggleCase
                | Command::DeleteWords
                | Command::Backspace
                | Command::TogglePunctuation(_)
                | Command::Insert(_)
        )
    }
}
