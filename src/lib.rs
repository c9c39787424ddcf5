//! Transcript Editor WASM Module
//!
//! Keyboard-driven correction of machine-generated transcripts: a grid of
//! timed words grouped into speaker paragraphs, a marker that follows audio
//! playback, an inline edit buffer, undo/redo history and incremental
//! persistence to a document store.

pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod grid;
pub mod host;
pub mod input;
pub mod marker;
pub mod models;
pub mod session;
pub mod sync;
pub mod text;
pub mod timecode;
pub mod undo;
pub mod utils;

// Re-export commonly used types
pub use config::EditorConfig;
pub use error::{EditorError, Result};
pub use input::{KeyEvent, KeyOutcome};
pub use models::core::*;
pub use models::Marker;
pub use session::{EditorSession, EditorSnapshot};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() -> std::result::Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug)
        .map_err(|e| JsValue::from_str(&format!("failed to initialize logger: {}", e)))?;

    log::info!("Transcript editor WASM module initialized");
    Ok(())
}
