//! Keyboard events as delivered by the browser
//!
//! Field names follow DOM `KeyboardEvent`, so the host can pass the event's
//! `key`, `shiftKey`, `ctrlKey` and `metaKey` straight through; other fields are
//! ignored.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct KeyEvent {
    /// DOM key value, e.g. `"ArrowLeft"`, `"Enter"`, `"a"`, `" "`
    pub key: String,
    #[serde(default)]
    pub shift_key: bool,
    #[serde(default)]
    pub ctrl_key: bool,
    #[serde(default)]
    pub meta_key: bool,
}

/// Keys the editor distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Tab,
    Delete,
    Backspace,
    Space,
    /// Any single printable character
    Char(char),
    /// Function keys, modifiers alone and the like
    Other,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            shift_key: false,
            ctrl_key: false,
            meta_key: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    /// Ctrl on most platforms, Cmd on macOS
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl_key || self.meta_key
    }

    /// Normalized key, accepting the legacy names older browsers send
    pub fn key(&self) -> Key {
        match self.key.as_str() {
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "Delete" | "Del" => Key::Delete,
            "Backspace" => Key::Backspace,
            " " | "Spacebar" => Key::Space,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) if !ch.is_control() => Key::Char(ch),
                    _ => Key::Other,
                }
            }
        }
    }

    pub fn is_arrow(&self) -> bool {
        matches!(
            self.key(),
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown
        )
    }
}
