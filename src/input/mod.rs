//! Keyboard input
//!
//! Maps DOM key events to editor commands and runs them against a session.

pub mod command;
pub mod interpreter;
pub mod key;

pub use command::{Command, Mode};
pub use interpreter::KeyOutcome;
pub use key::{Key, KeyEvent};
