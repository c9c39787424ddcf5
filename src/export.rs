//! Plain-text export

use crate::models::{Paragraph, Transcript};
use crate::timecode::format_timecode;

/// Render the transcript as text, one block per paragraph
///
/// Each block is `[HH:MM:SS] Speaker: words`. Struck words are left out,
/// and paragraphs with nothing left are skipped entirely.
pub fn export_text(transcript: &Transcript) -> String {
    transcript
        .grid()
        .paragraphs()
        .iter()
        .filter_map(|paragraph| export_paragraph(transcript, paragraph))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn export_paragraph(transcript: &Transcript, paragraph: &Paragraph) -> Option<String> {
    let words: Vec<&str> = paragraph
        .words
        .iter()
        .filter(|w| !w.deleted)
        .map(|w| w.text.as_str())
        .collect();
    if words.is_empty() {
        return None;
    }

    let time = format_timecode(transcript.start_time() + paragraph.start_time, false);
    let text = words.join(" ");

    Some(match paragraph.speaker {
        Some(speaker) => {
            let name = transcript
                .speaker_name(speaker)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Speaker {}", speaker));
            format!("[{}] {}: {}", time, name, text)
        }
        None => format!("[{}] {}", time, text),
    })
}
