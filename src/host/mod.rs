//! Collaborators provided by the embedding application
//!
//! The editor never talks to the browser directly. Prompts, the audio
//! player and analytics go through these traits so the session can be
//! driven by the WASM bridge in the browser and by fakes in tests.

/// Asks the user for a line of text
pub trait Prompt {
    /// `None` when the user cancelled
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String>;
}

/// Controls audio playback
pub trait Playback {
    fn seek_to(&mut self, seconds: f64);
    fn pause(&mut self);
    fn toggle_play(&mut self);
}

/// Receives best-effort usage events
pub trait Analytics {
    fn track(&mut self, event: AnalyticsEvent);
}

/// Everything a session needs from its host
pub trait Host: Prompt + Playback + Analytics {}

impl<T: Prompt + Playback + Analytics> Host for T {}

/// Notable editor actions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalyticsEvent {
    WordsChanged,
    WordsDeleted,
    ParagraphsSplit,
    ParagraphsJoined,
    Undo,
    Redo,
    SpeakerSet,
    SpeakerNameSet,
    SpeakerNameChanged,
    StartTimeChanged,
    PersistenceFailure(String),
}

impl AnalyticsEvent {
    /// Action label sent to the analytics backend
    pub fn action(&self) -> &'static str {
        match self {
            AnalyticsEvent::WordsChanged => "words changed",
            AnalyticsEvent::WordsDeleted => "words deleted",
            AnalyticsEvent::ParagraphsSplit => "paragraphs split",
            AnalyticsEvent::ParagraphsJoined => "paragraphs joined",
            AnalyticsEvent::Undo => "undo",
            AnalyticsEvent::Redo => "redo",
            AnalyticsEvent::SpeakerSet => "speaker set",
            AnalyticsEvent::SpeakerNameSet => "speaker name set",
            AnalyticsEvent::SpeakerNameChanged => "speaker name changed",
            AnalyticsEvent::StartTimeChanged => "start time changed",
            AnalyticsEvent::PersistenceFailure(_) => "persistence failure",
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            AnalyticsEvent::PersistenceFailure(message) => Some(message),
            _ => None,
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            AnalyticsEvent::PersistenceFailure(_) => "exception",
            _ => "editor",
        }
    }
}

/// Host that accepts every call and prompts nobody
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHost;

impl Prompt for NullHost {
    fn prompt_text(&mut self, _message: &str, _default: Option<&str>) -> Option<String> {
        None
    }
}

impl Playback for NullHost {
    fn seek_to(&mut self, _seconds: f64) {}
    fn pause(&mut self) {}
    fn toggle_play(&mut self) {}
}

impl Analytics for NullHost {
    fn track(&mut self, _event: AnalyticsEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_labels() {
        assert_eq!(AnalyticsEvent::ParagraphsJoined.action(), "paragraphs joined");
        assert_eq!(AnalyticsEvent::Undo.category(), "editor");
        assert_eq!(AnalyticsEvent::PersistenceFailure("x".into()).category(), "exception");
    }

    #[test]
    fn test_null_host_cancels_prompts() {
        let mut host = NullHost;
        assert_eq!(host.prompt_text("Name?", None), None);
    }
}
