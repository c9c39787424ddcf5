//! Editor configuration
//!
//! Passed from JavaScript as a plain object; every field is optional and
//! falls back to its default.

use serde::{Deserialize, Serialize};

/// Tunables for one editing session
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Maximum number of undo steps kept in history
    pub history_limit: usize,

    /// Seek playback to the newly marked word on keyboard navigation
    pub seek_on_navigate: bool,

    /// Pause playback on edits and shift-selection
    pub pause_on_edit: bool,

    /// Prompt message for an unknown speaker; `{}` is replaced by the speaker id
    pub speaker_prompt: String,

    /// Prompt message for the transcript start time
    pub start_time_prompt: String,

    /// Root collection of transcript documents in the store
    pub collection_root: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: 100,
            seek_on_navigate: true,
            pause_on_edit: true,
            speaker_prompt: "Name of speaker {}:".to_string(),
            start_time_prompt: "Start time:".to_string(),
            collection_root: "transcripts".to_string(),
        }
    }
}

impl EditorConfig {
    pub fn speaker_prompt_for(&self, speaker: u32) -> String {
        self.speaker_prompt.replace("{}", &speaker.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_takes_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"historyLimit": 5}"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert!(config.seek_on_navigate);
        assert_eq!(config.collection_root, "transcripts");
    }

    #[test]
    fn test_speaker_prompt_substitution() {
        let config = EditorConfig::default();
        assert_eq!(config.speaker_prompt_for(3), "Name of speaker 3:");
    }
}
