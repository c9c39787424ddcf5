//! Error types for the transcript editor
//!
//! No error here is fatal to an editing session: index failures are
//! swallowed as no-ops by the session, persistence failures are reported
//! and retried by the next diff, cancelled prompts abandon the command.

use thiserror::Error;

/// Top-level editor error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    /// Marker or word index does not exist in the current revision
    #[error("Index out of range: paragraph {paragraph}, words {start}..={end}")]
    OutOfRange {
        paragraph: usize,
        start: usize,
        end: usize,
    },

    /// The document store rejected a batch (or the network failed)
    #[error("Persistence failure: {0}")]
    PersistenceFailure(String),

    /// The user dismissed a prompt
    #[error("Prompt cancelled")]
    PromptCancelled,

    /// A start-time answer that is not `HH:MM:SS:CC`
    #[error("Invalid timecode: {0}")]
    InvalidTimecode(String),

    /// The session's role only allows navigation
    #[error("Transcript is read-only for viewers")]
    ReadOnly,

    /// No transcript has been loaded yet
    #[error("No transcript loaded")]
    NotLoaded,

    /// The command needs a marked word
    #[error("No word is marked")]
    NoSelection,

    /// A replacement would remove the last word of the transcript
    #[error("Transcript must keep at least one word")]
    EmptyTranscript,

    /// Failure crossing the JS boundary
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EditorError {
    pub fn out_of_range(paragraph: usize, start: usize, end: usize) -> Self {
        EditorError::OutOfRange { paragraph, start, end }
    }
}

pub type Result<T> = std::result::Result<T, EditorError>;
