//! In-place text editing
//!
//! While a buffer is open, character-level keys edit the staged word texts
//! and the grid stays untouched until the session writes them back.
//!
//! ## Modules
//!
//! - `buffer`: staged word texts and their editing operations
//! - `cursor`: (word, character) positions inside the buffer

pub mod buffer;
pub mod cursor;

pub use buffer::EditBuffer;
pub use cursor::BufferCursor;
