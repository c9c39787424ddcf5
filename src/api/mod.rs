//! WASM API
//!
//! The JavaScript-facing surface: the `TranscriptEditor` handle, the
//! host-callback adapter and shared boundary helpers.

pub mod editor;
pub mod helpers;
pub mod js_host;

pub use editor::TranscriptEditor;
pub use js_host::JsHost;
