//! JavaScript-facing editor handle
//!
//! One `TranscriptEditor` per mounted transcript view. The page forwards
//! keyboard events, player time updates and store acknowledgements, and
//! re-renders from `snapshot()` after each call.

use wasm_bindgen::prelude::*;

use super::helpers::{deserialize, editor_error, from_json, to_json};
use super::js_host::JsHost;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::input::KeyEvent;
use crate::models::{Role, Transcript};
use crate::session::EditorSession;
use crate::{wasm_info, wasm_log};

#[wasm_bindgen]
pub struct TranscriptEditor {
    session: EditorSession<JsHost>,
}

#[wasm_bindgen]
impl TranscriptEditor {
    /// Create an editor
    ///
    /// # Parameters
    /// - `config`: partial `EditorConfig` object, or `undefined`
    /// - `role`: `"viewer"`, `"editor"` or `"owner"`
    /// - `host`: object with the optional host callbacks
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, role: &str, host: JsValue) -> Result<TranscriptEditor, JsValue> {
        let config: EditorConfig = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            deserialize(config, "Invalid editor config")?
        };
        let role = Role::from_str_lossy(role);
        wasm_info!("TranscriptEditor created (role: {:?})", role);

        Ok(TranscriptEditor {
            session: EditorSession::new(config, role, JsHost::new(host)),
        })
    }

    /// Load a transcript document as read from the store
    #[wasm_bindgen(js_name = loadTranscript)]
    pub fn load_transcript(&mut self, transcript: JsValue) -> Result<(), JsValue> {
        let transcript: Transcript = from_json(&transcript, "Invalid transcript")?;
        self.session.load_transcript(transcript);
        Ok(())
    }

    #[wasm_bindgen(js_name = setRole)]
    pub fn set_role(&mut self, role: &str) {
        self.session.set_role(Role::from_str_lossy(role));
    }

    /// Handle a `keydown` event
    ///
    /// Returns `"handled"`, `"ignored"`, `"unhandled"` or `"rejected"`;
    /// the page should call `preventDefault` on `"handled"` only.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: KeyEvent = deserialize(event, "Invalid key event")?;
        let outcome = self.session.handle_key(&event);
        wasm_log!("handleKey {:?} -> {:?}", event.key, outcome);
        to_json(&outcome, "Failed to serialize key outcome")
    }

    /// Player `timeupdate`; returns the new marker or `null`
    #[wasm_bindgen(js_name = handleTimeUpdate)]
    pub fn handle_time_update(&mut self, seconds: f64) -> Result<JsValue, JsValue> {
        let marker = self.session.handle_time_update(seconds);
        to_json(&marker, "Failed to serialize marker")
    }

    /// Click on a word
    #[wasm_bindgen(js_name = selectWord)]
    pub fn select_word(&mut self, paragraph_index: usize, word_index: usize) -> Result<JsValue, JsValue> {
        let marker = self
            .session
            .select_word(paragraph_index, word_index)
            .map_err(editor_error)?;
        to_json(&marker, "Failed to serialize marker")
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.session.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.session.can_redo()
    }

    /// Speaker label clicked; false when the prompt was cancelled
    #[wasm_bindgen(js_name = renameSpeaker)]
    pub fn rename_speaker(&mut self, speaker: u32) -> Result<bool, JsValue> {
        changed(self.session.rename_speaker(speaker))
    }

    /// Start time clicked; false when the prompt was cancelled
    #[wasm_bindgen(js_name = changeStartTime)]
    pub fn change_start_time(&mut self) -> Result<bool, JsValue> {
        changed(self.session.change_start_time())
    }

    /// Everything the view needs to render
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_json(&self.session.snapshot(), "Failed to serialize snapshot")
    }

    /// Next write batch for the store, or `null` when nothing is due
    #[wasm_bindgen(js_name = prepareSync)]
    pub fn prepare_sync(&mut self) -> Result<JsValue, JsValue> {
        let batch = self.session.prepare_sync().map_err(editor_error)?;
        if let Some(batch) = &batch {
            wasm_info!("Prepared batch {} ({} ops)", batch.id, batch.ops.len());
        }
        to_json(&batch, "Failed to serialize write batch")
    }

    /// Store acknowledgement; pass an error message when the batch failed
    ///
    /// Batch ids arrive as JS numbers.
    #[wasm_bindgen(js_name = completeSync)]
    pub fn complete_sync(&mut self, batch_id: f64, error: Option<String>) -> Result<(), JsValue> {
        let outcome = match error {
            Some(message) => Err(message),
            None => Ok(()),
        };
        self.session
            .complete_sync(batch_id as u64, outcome)
            .map_err(editor_error)
    }

    #[wasm_bindgen(js_name = exportText)]
    pub fn export_text(&self) -> Option<String> {
        self.session.export_text()
    }
}

fn changed(result: crate::error::Result<()>) -> Result<bool, JsValue> {
    match result {
        Ok(()) => Ok(true),
        Err(EditorError::PromptCancelled) => Ok(false),
        Err(e) => Err(editor_error(e)),
    }
}
