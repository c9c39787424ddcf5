//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use transcript_editor::host::{Analytics, AnalyticsEvent, Playback, Prompt};
use transcript_editor::{
    EditorConfig, EditorSession, KeyEvent, KeyOutcome, Paragraph, Role, Transcript, Word,
};

/// Host that records every call and answers prompts from a queue
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub answers: VecDeque<Option<String>>,
    pub prompts: Vec<(String, Option<String>)>,
    pub seeks: Vec<f64>,
    pub pauses: usize,
    pub toggles: usize,
    pub events: Vec<AnalyticsEvent>,
}

impl RecordingHost {
    pub fn answering(answers: &[Option<&str>]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.map(str::to_string)).collect(),
            ..Self::default()
        }
    }
}

impl Prompt for RecordingHost {
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String> {
        self.prompts
            .push((message.to_string(), default.map(str::to_string)));
        self.answers.pop_front().flatten()
    }
}

impl Playback for RecordingHost {
    fn seek_to(&mut self, seconds: f64) {
        self.seeks.push(seconds);
    }

    fn pause(&mut self) {
        self.pauses += 1;
    }

    fn toggle_play(&mut self) {
        self.toggles += 1;
    }
}

impl Analytics for RecordingHost {
    fn track(&mut self, event: AnalyticsEvent) {
        self.events.push(event);
    }
}

pub const SECOND: u64 = 1_000_000_000;

fn paragraph(id: &str, texts: &[&str], first_second: u64) -> Paragraph {
    let words = texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let start = (first_second + i as u64) * SECOND;
            Word::new(*text, start, start + SECOND)
        })
        .collect();
    Paragraph::new(id, words)
}

/// Two paragraphs: "hello world again" (0-3s) and "cat sat" (4-6s)
pub fn transcript() -> Transcript {
    Transcript::new(
        "t1",
        vec![
            paragraph("a", &["hello", "world", "again"], 0),
            paragraph("b", &["cat", "sat"], 4),
        ],
    )
}

pub fn session(role: Role, host: RecordingHost) -> EditorSession<RecordingHost> {
    let mut session = EditorSession::new(EditorConfig::default(), role, host);
    session.load_transcript(transcript());
    session
}

pub fn editor() -> EditorSession<RecordingHost> {
    session(Role::Editor, RecordingHost::default())
}

pub fn press(session: &mut EditorSession<RecordingHost>, key: &str) -> KeyOutcome {
    session.handle_key(&KeyEvent::new(key))
}

pub fn press_event(session: &mut EditorSession<RecordingHost>, event: KeyEvent) -> KeyOutcome {
    session.handle_key(&event)
}

pub fn texts(session: &EditorSession<RecordingHost>, paragraph_index: usize) -> Vec<String> {
    session
        .transcript()
        .map(|t| t.grid().paragraphs()[paragraph_index].words.iter().map(|w| w.text.clone()).collect())
        .unwrap_or_default()
}
