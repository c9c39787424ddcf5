//! Core data structures for the transcript editor
//!
//! A transcript is an ordered list of paragraphs, each an ordered list of
//! timed words. All times are nanoseconds from the start of the audio.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::serde_helpers::is_false;
use crate::grid::WordGrid;

/// Nanoseconds since the start of the recording
pub type Nanos = u64;

/// Conversion factor between playback seconds and grid time
pub const NANOS_PER_SECOND: f64 = 1e9;

/// One recognized (or corrected) word
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,

    pub start_time: Nanos,

    pub end_time: Nanos,

    /// Recognizer confidence in [0, 100]; corrected words get 100
    #[serde(default)]
    pub confidence: f32,

    /// Struck words stay in the grid but are left out of exports
    #[serde(default, skip_serializing_if = "is_false")]
    pub deleted: bool,
}

impl Word {
    pub fn new(text: impl Into<String>, start_time: Nanos, end_time: Nanos) -> Self {
        Self {
            text: text.into(),
            start_time,
            end_time,
            confidence: 100.0,
            deleted: false,
        }
    }

    /// Whether the playback position falls inside `[start, end)`
    pub fn contains_time(&self, time: Nanos) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

/// A block of words spoken by one speaker
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    /// Document id in the store; never reused once assigned
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speaker: Option<u32>,

    pub start_time: Nanos,

    pub words: Vec<Word>,
}

impl Paragraph {
    pub fn new(id: impl Into<String>, words: Vec<Word>) -> Self {
        let start_time = words.first().map(|w| w.start_time).unwrap_or(0);
        Self {
            id: id.into(),
            speaker: None,
            start_time,
            words,
        }
    }

    /// Create a paragraph with a freshly generated id
    pub fn with_fresh_id(words: Vec<Word>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), words)
    }

    pub fn with_speaker(mut self, speaker: u32) -> Self {
        self.speaker = Some(speaker);
        self
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Transcript-level metadata kept alongside the paragraphs
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Offset added to every displayed time (e.g. wall-clock start of the recording)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Nanos>,
}

/// One revision of a transcript document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub paragraphs: WordGrid,

    #[serde(default)]
    pub speaker_names: BTreeMap<u32, String>,

    #[serde(default)]
    pub metadata: Metadata,
}

impl Transcript {
    pub fn new(id: impl Into<String>, paragraphs: Vec<Paragraph>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            paragraphs: WordGrid::new(paragraphs),
            speaker_names: BTreeMap::new(),
            metadata: Metadata::default(),
        }
    }

    pub fn grid(&self) -> &WordGrid {
        &self.paragraphs
    }

    /// New revision with a different word grid
    pub fn with_grid(&self, grid: WordGrid) -> Self {
        Self {
            paragraphs: grid,
            ..self.clone()
        }
    }

    pub fn speaker_name(&self, speaker: u32) -> Option<&str> {
        self.speaker_names.get(&speaker).map(String::as_str)
    }

    /// New revision with a registered (or renamed) speaker
    pub fn with_speaker_name(&self, speaker: u32, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.speaker_names.insert(speaker, name.into());
        next
    }

    pub fn start_time(&self) -> Nanos {
        self.metadata.start_time.unwrap_or(0)
    }

    pub fn with_start_time(&self, start_time: Nanos) -> Self {
        let mut next = self.clone();
        next.metadata.start_time = Some(start_time);
        next
    }
}

/// Permission level of the person editing
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    #[default]
    Editor,
    Owner,
}

impl Role {
    pub fn from_str_lossy(role: &str) -> Self {
        match role.to_ascii_lowercase().as_str() {
            "viewer" => Role::Viewer,
            "owner" => Role::Owner,
            _ => Role::Editor,
        }
    }

    pub fn can_edit(self) -> bool {
        !matches!(self, Role::Viewer)
    }
}
